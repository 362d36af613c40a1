//! Image resizing with bounding box rescaling.

use super::{OutputSize, Processor};
use crate::{common::*, error::Error, sample::image_size, Sample};

/// Resize the image to a target size and scale boxes by the same ratios.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rescale {
    output_size: OutputSize,
}

impl Rescale {
    pub fn new(output_size: impl Into<OutputSize>) -> Result<Self, Error> {
        let output_size = output_size.into().validate()?;
        Ok(Self { output_size })
    }

    pub fn output_size(&self) -> OutputSize {
        self.output_size
    }

    pub fn forward(&self, sample: Sample) -> Result<Sample, Error> {
        sample.check()?;

        let Sample {
            image,
            classes,
            bboxes,
        } = sample;
        let orig_size = image_size(&image);
        if orig_size.is_empty() {
            return Err(Error::EmptyImage);
        }

        let new_size = self.output_size.resize_target(&orig_size);
        let (new_h, new_w) = match (u32::try_from(new_size.h()), u32::try_from(new_size.w())) {
            (Ok(h), Ok(w)) => (h, w),
            _ => return Err(Error::SizeOverflow { size: new_size }),
        };

        let image = imageops::resize(&image, new_w, new_h, FilterType::Triangle);
        let bboxes: Vec<_> = bboxes
            .iter()
            .map(|bbox| bbox.resize_truncated(&orig_size, &new_size))
            .collect();

        trace!("rescale image from {} to {}", orig_size, new_size);

        Ok(Sample {
            image,
            classes,
            bboxes,
        })
    }
}

impl Processor for Rescale {
    fn forward(&self, sample: Sample, _rng: &mut dyn RngCore) -> Result<Sample, Error> {
        Rescale::forward(self, sample)
    }
}
