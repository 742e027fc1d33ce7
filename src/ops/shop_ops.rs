use log::warn;
use thiserror::Error;

use crate::types::playback::PlaybackControl;
use crate::types::product::Product;
use crate::types::shop_state::ShopState;

/// Fire-and-forget user notification, e.g. an in-app toast.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("failed to open {0}")]
    Failed(String),
}

/// External destination opener (the system browser on desktop). `can_open`
/// is consulted before every `open` attempt.
pub trait ResourceOpener {
    fn can_open(&self, url: &str) -> bool;
    fn open(&self, url: &str) -> Result<(), OpenError>;
}

/// The three ways the shop panel can be dismissed. They are behaviorally
/// identical and all route through `dismiss_panel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    Backdrop,
    Swipe,
    CloseButton,
}

/// Open the shop panel: pause the reel first, then show the panel. The pause
/// is best-effort; a surface that is not ready must not keep the viewer out
/// of the panel.
pub fn open_panel(shop: &mut ShopState, player: Option<&mut dyn PlaybackControl>) {
    if let Some(player) = player {
        if let Err(err) = player.pause() {
            warn!("pause before shop panel failed: {err}");
        }
    }
    shop.panel_visible = true;
}

/// Dismiss the shop panel and resume the reel. Every dismissal trigger lands
/// here, so each close issues exactly one resume request.
pub fn dismiss_panel(
    shop: &mut ShopState,
    player: Option<&mut dyn PlaybackControl>,
    trigger: DismissTrigger,
) {
    shop.panel_visible = false;
    if let Some(player) = player {
        if let Err(err) = player.resume() {
            warn!("resume after shop panel ({trigger:?}) failed: {err}");
        }
    }
}

/// Put one more of the product in the cart and confirm it to the viewer.
pub fn add_to_cart(shop: &mut ShopState, notifier: &mut dyn Notifier, product: &Product) {
    shop.add_to_cart(&product.id);
    notifier.notify(&format!("Added to cart: {}", product.name));
}

/// Follow through to the product's external page. The locator is checked
/// with `can_open` first; an unopenable one is reported to the viewer and
/// never handed to `open`. A failure of `open` itself is only logged.
pub fn open_product_page(
    opener: &dyn ResourceOpener,
    notifier: &mut dyn Notifier,
    product: &Product,
) {
    if !opener.can_open(&product.url) {
        notifier.notify(&format!("Cannot open {}", product.url));
        return;
    }
    if let Err(err) = opener.open(&product.url) {
        warn!("open product page failed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::playback::{PlaybackError, PlaybackStatus};

    #[derive(Default)]
    struct RecordingPlayer {
        pause_calls: u32,
        resume_calls: u32,
        reject: bool,
    }

    impl PlaybackControl for RecordingPlayer {
        fn status(&self) -> PlaybackStatus {
            PlaybackStatus::Loading
        }
        fn pause(&mut self) -> Result<(), PlaybackError> {
            self.pause_calls += 1;
            if self.reject {
                Err(PlaybackError::Rejected("busy".to_string()))
            } else {
                Ok(())
            }
        }
        fn resume(&mut self) -> Result<(), PlaybackError> {
            self.resume_calls += 1;
            if self.reject {
                Err(PlaybackError::Rejected("busy".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Vec<String>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }

    struct FakeOpener {
        openable: bool,
        opened: std::cell::RefCell<Vec<String>>,
    }

    impl FakeOpener {
        fn new(openable: bool) -> Self {
            FakeOpener {
                openable,
                opened: std::cell::RefCell::new(Vec::new()),
            }
        }
    }

    impl ResourceOpener for FakeOpener {
        fn can_open(&self, _url: &str) -> bool {
            self.openable
        }
        fn open(&self, url: &str) -> Result<(), OpenError> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            price: "₹999".to_string(),
            image_path: format!("assets/{id}.png"),
            url: format!("https://shop.example/{id}"),
            start_sec: 0,
            end_sec: 5,
        }
    }

    #[test]
    fn test_open_panel_pauses_then_shows() {
        let mut shop = ShopState::new();
        let mut player = RecordingPlayer::default();
        open_panel(&mut shop, Some(&mut player));
        assert!(shop.panel_visible);
        assert_eq!(player.pause_calls, 1);
        assert_eq!(player.resume_calls, 0);
    }

    #[test]
    fn test_open_panel_without_handle_still_opens() {
        let mut shop = ShopState::new();
        open_panel(&mut shop, None);
        assert!(shop.panel_visible);
    }

    #[test]
    fn test_pause_failure_does_not_block_the_panel() {
        let mut shop = ShopState::new();
        let mut player = RecordingPlayer {
            reject: true,
            ..Default::default()
        };
        open_panel(&mut shop, Some(&mut player));
        assert!(shop.panel_visible);
        assert_eq!(player.pause_calls, 1);
    }

    #[test]
    fn test_every_dismissal_path_resumes_exactly_once() {
        for trigger in [
            DismissTrigger::Backdrop,
            DismissTrigger::Swipe,
            DismissTrigger::CloseButton,
        ] {
            let mut shop = ShopState::new();
            let mut player = RecordingPlayer::default();
            open_panel(&mut shop, Some(&mut player));
            dismiss_panel(&mut shop, Some(&mut player), trigger);
            assert!(!shop.panel_visible, "{trigger:?} left the panel open");
            assert_eq!(player.resume_calls, 1, "{trigger:?} resume count");
        }
    }

    #[test]
    fn test_resume_failure_is_swallowed() {
        let mut shop = ShopState::new();
        shop.panel_visible = true;
        let mut player = RecordingPlayer {
            reject: true,
            ..Default::default()
        };
        dismiss_panel(&mut shop, Some(&mut player), DismissTrigger::CloseButton);
        assert!(!shop.panel_visible);
    }

    #[test]
    fn test_add_to_cart_counts_and_notifies_per_call() {
        let mut shop = ShopState::new();
        let mut notifier = RecordingNotifier::default();
        let p1 = product("p1");
        add_to_cart(&mut shop, &mut notifier, &p1);
        add_to_cart(&mut shop, &mut notifier, &p1);
        assert_eq!(shop.cart_quantity("p1"), 2);
        assert_eq!(notifier.messages.len(), 2);
        assert!(notifier.messages[0].contains("Product p1"));
    }

    #[test]
    fn test_unopenable_url_is_reported_and_never_opened() {
        let opener = FakeOpener::new(false);
        let mut notifier = RecordingNotifier::default();
        let p = product("p1");
        open_product_page(&opener, &mut notifier, &p);
        assert!(opener.opened.borrow().is_empty());
        assert_eq!(notifier.messages.len(), 1);
        assert!(notifier.messages[0].contains("https://shop.example/p1"));
    }

    #[test]
    fn test_openable_url_is_opened_without_notice() {
        let opener = FakeOpener::new(true);
        let mut notifier = RecordingNotifier::default();
        let p = product("p1");
        open_product_page(&opener, &mut notifier, &p);
        let opened = opener.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0], "https://shop.example/p1");
        assert!(notifier.messages.is_empty());
    }
}
