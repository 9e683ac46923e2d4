pub mod estimator_checks;
pub mod evaluation;
pub mod math;
