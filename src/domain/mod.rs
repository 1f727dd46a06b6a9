// Domain layer: report models and ports (throttle, delivery). No network code here.

pub mod model;
pub mod ports;
