// Domain layer: login form model, lesson outcomes and the console port.

pub mod model;
pub mod ports;
