use eframe::egui;

use crate::ops::resolver::Resolution;
use crate::ops::shop_ops::DismissTrigger;
use crate::types::shop_state::ShopState;

/// Downward drag on the grab handle needed to count as a dismissal swipe.
const SWIPE_DISMISS_THRESHOLD: f32 = 60.0;

/// User actions raised by the panel, applied by the app afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    ToggleWishlist(String),
    AddToCart(String),
    OpenProduct(String),
    Dismiss(DismissTrigger),
}

/// UI-transient state of the sheet (the in-progress swipe). Kept outside the
/// widget because the widget itself is rebuilt every frame.
#[derive(Debug, Clone, Default)]
pub struct ShopPanelState {
    drag_offset: f32,
}

impl ShopPanelState {
    pub fn reset(&mut self) {
        self.drag_offset = 0.0;
    }
}

/// The bottom-sheet shop panel. Renders the resolution snapshotted at open
/// time (it never re-resolves while open) and reports user actions as events.
pub struct ShopPanel<'a> {
    resolution: &'a Resolution,
    shop: &'a ShopState,
    state: &'a mut ShopPanelState,
}

impl<'a> ShopPanel<'a> {
    pub fn new(
        resolution: &'a Resolution,
        shop: &'a ShopState,
        state: &'a mut ShopPanelState,
    ) -> Self {
        ShopPanel {
            resolution,
            shop,
            state,
        }
    }

    pub fn show(mut self, ctx: &egui::Context) -> Vec<PanelEvent> {
        let mut events = Vec::new();

        let modal = egui::Modal::new(egui::Id::new("shop_panel")).show(ctx, |ui| {
            ui.set_width(520.0);

            self.grab_handle(ui, &mut events);

            ui.vertical_centered(|ui| {
                ui.heading(self.resolution.header_label());
                ui.label(
                    egui::RichText::new(format!("Video time: {}s", self.resolution.position_sec))
                        .weak(),
                );
            });
            ui.separator();

            egui::ScrollArea::horizontal().show(ui, |ui| {
                ui.horizontal(|ui| {
                    for product in &self.resolution.items {
                        self.product_card(ui, product, &mut events);
                    }
                });
            });

            ui.separator();
            ui.vertical_centered_justified(|ui| {
                if ui.button("Close").clicked() {
                    events.push(PanelEvent::Dismiss(DismissTrigger::CloseButton));
                }
            });
        });

        if modal.backdrop_response.clicked() {
            events.push(PanelEvent::Dismiss(DismissTrigger::Backdrop));
        } else if modal.should_close() {
            // Esc behaves like the close button
            events.push(PanelEvent::Dismiss(DismissTrigger::CloseButton));
        }

        events
    }

    /// The drag bar at the top of the sheet; dragging it down far enough
    /// dismisses the panel the same way the other triggers do.
    fn grab_handle(&mut self, ui: &mut egui::Ui, events: &mut Vec<PanelEvent>) {
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 18.0),
            egui::Sense::drag(),
        );
        let bar = egui::Rect::from_center_size(rect.center(), egui::vec2(48.0, 5.0));
        ui.painter().rect_filled(bar, 2.5, egui::Color32::GRAY);

        if response.dragged() {
            self.state.drag_offset += response.drag_delta().y;
        }
        if response.drag_stopped() {
            if self.state.drag_offset > SWIPE_DISMISS_THRESHOLD {
                events.push(PanelEvent::Dismiss(DismissTrigger::Swipe));
            }
            self.state.drag_offset = 0.0;
        }
    }

    fn product_card(
        &self,
        ui: &mut egui::Ui,
        product: &crate::types::product::Product,
        events: &mut Vec<PanelEvent>,
    ) {
        ui.group(|ui| {
            ui.set_width(170.0);
            ui.vertical(|ui| {
                ui.add(
                    egui::Image::new(product.image_uri())
                        .fit_to_exact_size(egui::vec2(154.0, 180.0))
                        .corner_radius(8.0),
                );
                ui.label(egui::RichText::new(&product.name).strong());
                ui.label(egui::RichText::new(&product.price).size(16.0).strong());

                ui.horizontal(|ui| {
                    let wish_label = if self.shop.is_wishlisted(&product.id) {
                        "♥ Wishlist"
                    } else {
                        "♡ Wishlist"
                    };
                    if ui.button(wish_label).clicked() {
                        events.push(PanelEvent::ToggleWishlist(product.id.clone()));
                    }

                    let qty = self.shop.cart_quantity(&product.id);
                    let cart_label = if qty > 0 {
                        format!("🛒 Add ({qty})")
                    } else {
                        "🛒 Add".to_string()
                    };
                    if ui.button(cart_label).clicked() {
                        events.push(PanelEvent::AddToCart(product.id.clone()));
                    }
                });

                let open_button = egui::Button::new(
                    egui::RichText::new("Open store page →").color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::from_rgb(255, 35, 86));
                if ui.add(open_button).clicked() {
                    events.push(PanelEvent::OpenProduct(product.id.clone()));
                }
            });
        });
    }
}
