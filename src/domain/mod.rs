// Domain layer: installer models and ports. No filesystem or archive code here.

pub mod model;
pub mod ports;
