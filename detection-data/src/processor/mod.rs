//! Data preprocessing building blocks.

pub mod filter_boxes;
pub mod output_size;
pub mod pipeline;
pub mod random_crop;
pub mod rescale;
pub mod to_tensor;

pub use filter_boxes::*;
pub use output_size::*;
pub use pipeline::*;
pub use random_crop::*;
pub use rescale::*;
pub use to_tensor::*;

use crate::{common::*, error::Error, Sample};

/// A sample-to-sample preprocessing step.
///
/// Implementations keep only the configuration given at construction, so a
/// processor can be shared among worker threads. Random draws come from the
/// `rng` argument exclusively.
pub trait Processor
where
    Self: Debug + Send + Sync,
{
    fn forward(&self, sample: Sample, rng: &mut dyn RngCore) -> Result<Sample, Error>;
}
