mod stock;

pub use stock::*;
