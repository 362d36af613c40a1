//! Dataset loading and bounding-box-aware preprocessing for detection training.

mod common;
pub mod config;
pub mod dataset;
pub mod error;
pub mod processor;
pub mod sample;

pub use error::Error;
pub use sample::*;
