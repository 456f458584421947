// Domain layer: descriptor model and the renderer port.

pub mod model;
pub mod ports;
