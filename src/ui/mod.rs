pub mod app;
pub mod browse;
pub mod reel_view;
pub mod shop_panel;
pub mod toasts;
