// Domain layer: models and the check interface. No dependencies beyond serde.

pub mod model;
pub mod ports;
