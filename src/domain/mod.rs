// Domain layer: the greeting model and the Flipp contract. No I/O here.

pub mod model;
pub mod ports;
