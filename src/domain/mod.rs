// Domain layer - Interval engine

pub mod errors;
pub mod model;
pub mod rules;
