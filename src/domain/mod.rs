//! Domain layer: models, ports, errors, and the slot grid.

pub mod errors;
pub mod models;
pub mod ports;
pub mod slots;
