pub mod resolver;
pub mod shop_ops;
