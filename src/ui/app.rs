use eframe::egui;

use crate::ops::resolver::{self, Resolution};
use crate::ops::shop_ops::{self, OpenError, ResourceOpener};
use crate::types::playback::{ClockPlayback, PlaybackControl, PlaybackStatus};
use crate::types::product::Catalog;
use crate::types::shop_state::ShopState;
use crate::ui::browse;
use crate::ui::reel_view::{ReelEvent, ReelView};
use crate::ui::shop_panel::{PanelEvent, ShopPanel, ShopPanelState};
use crate::ui::toasts::Toasts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Reel,
    Explore,
}

pub struct AppState {
    pub catalog: Catalog,
    pub shop: ShopState,
    /// Playback capability handle; absent until the surface mounts on the
    /// first frame. Checked before every pause/resume call.
    pub player: Option<ClockPlayback>,
    /// Resolution snapshotted when the panel opened; cleared on dismissal.
    pub panel_snapshot: Option<Resolution>,
    pub panel_state: ShopPanelState,
    pub toasts: Toasts,
    pub active_tab: Tab,
    pub reel_duration_secs: f64,
}

impl AppState {
    pub fn new(catalog: Catalog, reel_duration_secs: f64) -> Self {
        AppState {
            catalog,
            shop: ShopState::new(),
            player: None,
            panel_snapshot: None,
            panel_state: ShopPanelState::default(),
            toasts: Toasts::new(),
            active_tab: Tab::Reel,
            reel_duration_secs,
        }
    }
}

pub struct ReelShopApp {
    pub state: AppState,
}

impl ReelShopApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    fn playback_status(&self) -> PlaybackStatus {
        match &self.state.player {
            Some(player) => player.status(),
            None => PlaybackStatus::Loading,
        }
    }

    /// "Shop this look": snapshot the current position, pause, show the panel.
    fn on_shop_requested(&mut self) {
        let position_sec = self.playback_status().position_seconds();
        shop_ops::open_panel(
            &mut self.state.shop,
            self.state
                .player
                .as_mut()
                .map(|p| p as &mut dyn PlaybackControl),
        );
        self.state.panel_snapshot = Some(resolver::resolve_at(&self.state.catalog, position_sec));
        self.state.panel_state.reset();
    }

    fn apply_panel_events(&mut self, ctx: &egui::Context, events: Vec<PanelEvent>) {
        for event in events {
            match event {
                PanelEvent::ToggleWishlist(id) => {
                    self.state.shop.toggle_wishlist(&id);
                }
                PanelEvent::AddToCart(id) => {
                    if let Some(product) = self.state.catalog.find_by_id(&id).cloned() {
                        shop_ops::add_to_cart(
                            &mut self.state.shop,
                            &mut self.state.toasts,
                            &product,
                        );
                    }
                }
                PanelEvent::OpenProduct(id) => {
                    if let Some(product) = self.state.catalog.find_by_id(&id).cloned() {
                        let opener = BrowserOpener { ctx };
                        shop_ops::open_product_page(&opener, &mut self.state.toasts, &product);
                    }
                }
                PanelEvent::Dismiss(trigger) => {
                    shop_ops::dismiss_panel(
                        &mut self.state.shop,
                        self.state
                            .player
                            .as_mut()
                            .map(|p| p as &mut dyn PlaybackControl),
                        trigger,
                    );
                    self.state.panel_snapshot = None;
                    self.state.panel_state.reset();
                }
            }
        }
    }

    fn tab_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (tab, label) in [
                    (Tab::Home, "Home"),
                    (Tab::Reel, "Reel"),
                    (Tab::Explore, "Explore"),
                ] {
                    if ui
                        .selectable_label(self.state.active_tab == tab, label)
                        .clicked()
                    {
                        self.state.active_tab = tab;
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("🛒 {}", self.state.shop.cart_total()));
                });
            });
        });
    }
}

impl eframe::App for ReelShopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The playback surface mounts on the first frame; before that the
        // capability handle is simply absent.
        if self.state.player.is_none() {
            self.state.player = Some(ClockPlayback::new(self.state.reel_duration_secs));
        }

        let dt = ctx.input(|i| i.unstable_dt) as f64;
        if let Some(player) = &mut self.state.player {
            if player.is_playing() {
                player.tick(dt);
                ctx.request_repaint_after(std::time::Duration::from_millis(16));
            }
        }

        self.tab_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.state.active_tab {
            Tab::Home => browse::home_tab(ui, &self.state.catalog),
            Tab::Explore => browse::explore_tab(ui, &self.state.catalog),
            Tab::Reel => {
                let status = self.playback_status();
                let reel_events = ReelView::new(&status).show(ui);
                for event in reel_events {
                    match event {
                        ReelEvent::ShopRequested => self.on_shop_requested(),
                    }
                }
            }
        });

        if self.state.shop.panel_visible {
            if let Some(snapshot) = self.state.panel_snapshot.clone() {
                let events =
                    ShopPanel::new(&snapshot, &self.state.shop, &mut self.state.panel_state)
                        .show(ctx);
                self.apply_panel_events(ctx, events);
            }
        }

        self.state.toasts.show(ctx);
    }
}

/// Desktop opener: hands the URL to egui, which forwards it to the system
/// browser. Only http(s) locators count as openable.
struct BrowserOpener<'a> {
    ctx: &'a egui::Context,
}

impl ResourceOpener for BrowserOpener<'_> {
    fn can_open(&self, url: &str) -> bool {
        url.starts_with("http://") || url.starts_with("https://")
    }

    fn open(&self, url: &str) -> Result<(), OpenError> {
        self.ctx.open_url(egui::OpenUrl::new_tab(url));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_request_pauses_and_snapshots() {
        let mut app = ReelShopApp::new(AppState::new(Catalog::demo(), 20.0));
        app.state.player = Some(ClockPlayback::new(20.0));
        app.state.player.as_mut().unwrap().tick(3.0);

        app.on_shop_requested();

        assert!(app.state.shop.panel_visible);
        assert!(!app.state.player.as_ref().unwrap().is_playing());
        let snapshot = app.state.panel_snapshot.as_ref().unwrap();
        assert_eq!(snapshot.position_sec, 3);
        // t=3 falls inside p1's tag range
        assert_eq!(snapshot.items[0].id, "p1");
    }

    #[test]
    fn test_shop_request_without_surface_snapshots_at_zero() {
        let mut app = ReelShopApp::new(AppState::new(Catalog::demo(), 20.0));
        assert!(app.state.player.is_none());

        app.on_shop_requested();

        assert!(app.state.shop.panel_visible);
        assert_eq!(app.state.panel_snapshot.as_ref().unwrap().position_sec, 0);
    }

    #[test]
    fn test_dismiss_event_clears_snapshot_and_resumes() {
        let mut app = ReelShopApp::new(AppState::new(Catalog::demo(), 20.0));
        app.state.player = Some(ClockPlayback::new(20.0));
        app.on_shop_requested();

        let ctx = egui::Context::default();
        app.apply_panel_events(
            &ctx,
            vec![PanelEvent::Dismiss(shop_ops::DismissTrigger::Swipe)],
        );

        assert!(!app.state.shop.panel_visible);
        assert!(app.state.panel_snapshot.is_none());
        assert!(app.state.player.as_ref().unwrap().is_playing());
    }

    #[test]
    fn test_cart_event_notifies_and_counts() {
        let mut app = ReelShopApp::new(AppState::new(Catalog::demo(), 20.0));
        let ctx = egui::Context::default();
        app.apply_panel_events(
            &ctx,
            vec![
                PanelEvent::AddToCart("p1".to_string()),
                PanelEvent::AddToCart("p1".to_string()),
            ],
        );
        assert_eq!(app.state.shop.cart_quantity("p1"), 2);
        assert_eq!(app.state.toasts.len(), 2);
    }
}
