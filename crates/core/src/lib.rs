//! Real-time sensitive-content detection and masking.
//!
//! Frames flow from a capture source through the [`pipeline`] scheduler,
//! which runs face and text [`detection`] concurrently, classifies
//! recognized text with [`classify`], and paints the sensitive regions
//! over with a [`masking`] renderer before display.

pub mod classify;
pub mod detection;
pub mod io;
pub mod masking;
pub mod pipeline;
pub mod shared;
