use eframe::egui;

use crate::types::playback::PlaybackStatus;

/// Events the reel surface can emit for the app to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReelEvent {
    ShopRequested,
}

/// The reel surface with its overlay chrome: title, live time readout, and
/// the floating "Shop this look" button. The actual video frame is owned by
/// the external playback surface; this widget draws a stand-in.
pub struct ReelView<'a> {
    status: &'a PlaybackStatus,
}

impl<'a> ReelView<'a> {
    pub fn new(status: &'a PlaybackStatus) -> Self {
        ReelView { status }
    }

    pub fn show(self, ui: &mut egui::Ui) -> Vec<ReelEvent> {
        let mut events = Vec::new();

        let desired = egui::vec2(ui.available_width(), ui.available_height());
        let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
        ui.painter().rect_filled(rect, 12.0, egui::Color32::BLACK);

        // Stand-in for the video frame
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "▶ demo reel",
            egui::FontId::proportional(22.0),
            egui::Color32::DARK_GRAY,
        );

        // Top overlay: title and time, 0.0s until the surface reports in
        let overlay_pos = rect.left_top() + egui::vec2(12.0, 12.0);
        ui.painter().text(
            overlay_pos,
            egui::Align2::LEFT_TOP,
            "Demo: Shop the Reel",
            egui::FontId::proportional(15.0),
            egui::Color32::WHITE,
        );
        let time_label = format!("Time: {:.1}s", self.status.position_secs_f64());
        ui.painter().text(
            overlay_pos + egui::vec2(0.0, 22.0),
            egui::Align2::LEFT_TOP,
            time_label,
            egui::FontId::proportional(12.0),
            egui::Color32::LIGHT_GRAY,
        );
        if let PlaybackStatus::Error(msg) = self.status {
            ui.painter().text(
                overlay_pos + egui::vec2(0.0, 40.0),
                egui::Align2::LEFT_TOP,
                format!("Playback error: {msg}"),
                egui::FontId::proportional(12.0),
                egui::Color32::LIGHT_RED,
            );
        }

        // Floating shop button near the bottom edge
        let button_rect = egui::Rect::from_center_size(
            egui::pos2(rect.center().x, rect.bottom() - 40.0),
            egui::vec2(180.0, 40.0),
        );
        let mut button_ui = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(button_rect)
                .layout(egui::Layout::centered_and_justified(
                    egui::Direction::LeftToRight,
                )),
        );
        let shop_button = egui::Button::new(
            egui::RichText::new("Shop this look")
                .size(16.0)
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(egui::Color32::from_rgb(255, 35, 86))
        .corner_radius(20.0);
        if button_ui.add(shop_button).clicked() {
            events.push(ReelEvent::ShopRequested);
        }

        events
    }
}
