pub mod base_model;
pub mod dummy;
pub mod kmeans;
pub mod linear;
pub mod pipeline;
pub mod softmax;
