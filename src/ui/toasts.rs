use eframe::egui;
use std::time::Instant;

use crate::ops::shop_ops::Notifier;

const TOAST_LIFETIME_SECS: f32 = 3.0;
const TOAST_FADE_AFTER_SECS: f32 = 2.0;

/// In-app notification stack. Messages fade out after a few seconds; nothing
/// is consumed from them, so this is the fire-and-forget notifier the shop
/// actions expect.
#[derive(Default)]
pub struct Toasts {
    entries: Vec<(String, Instant)>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the live toasts in the top-right corner and drop expired ones.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.entries
            .retain(|(_, when)| when.elapsed().as_secs_f32() < TOAST_LIFETIME_SECS);
        if self.entries.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toast_area"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for (msg, when) in &self.entries {
                    let elapsed = when.elapsed().as_secs_f32();
                    let alpha = if elapsed > TOAST_FADE_AFTER_SECS {
                        ((TOAST_LIFETIME_SECS - elapsed)
                            / (TOAST_LIFETIME_SECS - TOAST_FADE_AFTER_SECS)
                            * 255.0) as u8
                    } else {
                        255
                    };
                    egui::Frame::popup(ui.style())
                        .fill(egui::Color32::from_rgba_unmultiplied(32, 32, 32, alpha))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(msg)
                                    .color(egui::Color32::from_rgba_unmultiplied(
                                        255, 255, 255, alpha,
                                    ))
                                    .size(13.0),
                            );
                        });
                }
            });

        // Keep repainting while toasts are fading
        ctx.request_repaint();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, message: &str) {
        self.entries.push((message.to_string(), Instant::now()));
    }
}
