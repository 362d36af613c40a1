//! Image layout conversion.

use crate::{common::*, error::Error, PixelBox, Sample};

/// The sample with its image in channel-first layout.
#[derive(Debug, Clone)]
pub struct TensorSample {
    /// Pixels in `[channels, height, width]` shape.
    pub image: Array3<u8>,
    pub classes: Vec<usize>,
    pub bboxes: Vec<PixelBox>,
}

/// Convert the HWC image into a contiguous CHW array with identical values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ToTensor;

impl ToTensor {
    pub fn forward(&self, sample: Sample) -> Result<TensorSample, Error> {
        sample.check()?;

        let Sample {
            image,
            classes,
            bboxes,
        } = sample;
        let (w, h) = image.dimensions();
        let hwc = Array3::from_shape_vec((h as usize, w as usize, 3), image.into_raw())?;
        let chw = hwc
            .permuted_axes([2, 0, 1])
            .as_standard_layout()
            .into_owned();

        Ok(TensorSample {
            image: chw,
            classes,
            bboxes,
        })
    }
}
