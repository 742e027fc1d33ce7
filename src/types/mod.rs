pub mod playback;
pub mod product;
pub mod shop_state;
