// Domain layer: the demo transcript model and the ports every pattern and config source plugs into.

pub mod model;
pub mod ports;
