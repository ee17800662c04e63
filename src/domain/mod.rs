// Domain layer: layout table, run configuration and the ports the core talks through.

pub mod model;
pub mod ports;
