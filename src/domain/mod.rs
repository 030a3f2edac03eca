// Domain layer: the persona model and the collaborator ports the composite depends on.

pub mod model;
pub mod ports;
