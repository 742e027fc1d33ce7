mod ops;
mod types;
mod ui;

use crate::types::product::Catalog;
use crate::ui::app::{AppState, ReelShopApp};
use log::{info, warn};

/// Length of the bundled demo reel; the clock player loops at this point.
const DEMO_REEL_DURATION_SECS: f64 = 20.0;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Optional catalog file as the first argument; the compiled-in demo
    // catalog is the default and the fallback.
    let catalog = match std::env::args().nth(1) {
        Some(path) => match Catalog::load_from_file(&path) {
            Ok(catalog) => {
                info!("loaded catalog from {path}");
                catalog
            }
            Err(err) => {
                warn!("catalog file {path} rejected ({err}), using demo catalog");
                Catalog::demo()
            }
        },
        None => Catalog::demo(),
    };

    let app = ReelShopApp::new(AppState::new(catalog, DEMO_REEL_DURATION_SECS));

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "ReelShop",
        native_options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}
