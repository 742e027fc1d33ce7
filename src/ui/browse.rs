use eframe::egui;

use crate::types::product::Catalog;

/// Static "Home" tab body. Promotional chrome only; nothing here mutates
/// state.
pub fn home_tab(ui: &mut egui::Ui, catalog: &Catalog) {
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.heading("Shop the Reel");
        ui.label("Watch the drop, tap \"Shop this look\", own the moment.");
    });
    ui.add_space(16.0);
    ui.separator();
    ui.label(egui::RichText::new("Featured today").strong());
    ui.add_space(8.0);
    egui::ScrollArea::horizontal().show(ui, |ui| {
        ui.horizontal(|ui| {
            for product in catalog.products() {
                ui.group(|ui| {
                    ui.set_width(140.0);
                    ui.vertical(|ui| {
                        ui.add(
                            egui::Image::new(product.image_uri())
                                .fit_to_exact_size(egui::vec2(124.0, 140.0)),
                        );
                        ui.label(&product.name);
                        ui.label(egui::RichText::new(&product.price).strong());
                    });
                });
            }
        });
    });
}

/// Static "Explore" tab body: the whole catalog as a read-only grid.
pub fn explore_tab(ui: &mut egui::Ui, catalog: &Catalog) {
    ui.add_space(8.0);
    ui.heading("Explore");
    ui.label(egui::RichText::new("Every look from this reel").weak());
    ui.add_space(8.0);
    egui::ScrollArea::vertical().show(ui, |ui| {
        for product in catalog.products() {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Image::new(product.image_uri())
                            .fit_to_exact_size(egui::vec2(64.0, 72.0)),
                    );
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&product.name).strong());
                        ui.label(&product.price);
                        ui.label(
                            egui::RichText::new(format!(
                                "On screen {}s–{}s",
                                product.start_sec, product.end_sec
                            ))
                            .weak()
                            .size(11.0),
                        );
                    });
                });
            });
        }
    });
}
