// Domain layer - Core clip planning logic

pub mod errors;
pub mod model;
pub mod rules;
