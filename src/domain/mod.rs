// Domain layer: benchmark models and the ports the kernel driver talks through.

pub mod model;
pub mod ports;
