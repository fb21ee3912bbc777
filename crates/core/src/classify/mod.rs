pub mod classifier;
pub mod patterns;
