pub mod frame;
pub mod masked_frame;
pub mod region;
