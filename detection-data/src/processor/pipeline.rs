//! Ordered chain of processors.

use super::{Processor, TensorSample, ToTensor};
use crate::{common::*, error::Error, Sample};

/// Processors applied one after another.
///
/// An empty pipeline passes samples through unchanged.
#[derive(Debug, Default)]
pub struct Pipeline {
    processors: Vec<Box<dyn Processor>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a processor at the end of the pipeline.
    pub fn push<P>(mut self, processor: P) -> Self
    where
        P: Processor + 'static,
    {
        self.processors.push(Box::new(processor));
        self
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    pub fn forward(&self, sample: Sample, rng: &mut dyn RngCore) -> Result<Sample, Error> {
        sample.check()?;
        self.processors
            .iter()
            .try_fold(sample, |sample, processor| processor.forward(sample, &mut *rng))
    }

    /// Run the pipeline and convert the outcome to channel-first layout.
    pub fn forward_tensor(
        &self,
        sample: Sample,
        rng: &mut dyn RngCore,
    ) -> Result<TensorSample, Error> {
        ToTensor.forward(self.forward(sample, rng)?)
    }

    /// Run the pipeline with the thread-local random generator.
    pub fn forward_thread_rng(&self, sample: Sample) -> Result<Sample, Error> {
        self.forward(sample, &mut rand::thread_rng())
    }
}
