// Domain layer: score models, the league table and the ports (interfaces).

pub mod leagues;
pub mod model;
pub mod ports;
