//! Headless driver for the deep void scene: platform directories, frame pacing,
//! and a synthetic pointer standing in for window input.

pub mod demo;
pub mod frame_clock;
pub mod platform;
