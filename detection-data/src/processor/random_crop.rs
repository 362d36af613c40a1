//! Random fixed-size cropping with bounding box translation.

use super::{OutputSize, Processor};
use crate::{common::*, error::Error, Sample};

/// Crop a randomly positioned window out of the image.
///
/// Boxes are translated into the window frame and are neither clipped nor
/// dropped, so they may end up partially or fully outside of the cropped image.
/// Append a [FilterBoxes](super::FilterBoxes) step if the consumer needs boxes
/// inside image bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RandomCrop {
    size: HW<usize>,
}

impl RandomCrop {
    pub fn new(output_size: impl Into<OutputSize>) -> Result<Self, Error> {
        let size = output_size.into().validate()?.crop_size();
        Ok(Self { size })
    }

    /// The crop window size.
    pub fn size(&self) -> HW<usize> {
        self.size
    }

    /// Crop at offsets drawn uniformly from `[0, h - new_h] x [0, w - new_w]`.
    pub fn forward<R>(&self, sample: Sample, rng: &mut R) -> Result<Sample, Error>
    where
        R: Rng + ?Sized,
    {
        sample.check()?;
        let [max_top, max_left] = self.max_offset(&sample.size())?;
        let top = rng.gen_range(0..=max_top);
        let left = rng.gen_range(0..=max_left);
        debug!("crop {} window at top={}, left={}", self.size, top, left);
        Ok(self.crop_at(sample, top, left))
    }

    /// Crop at the given offsets.
    pub fn forward_with_offset(
        &self,
        sample: Sample,
        top: usize,
        left: usize,
    ) -> Result<Sample, Error> {
        sample.check()?;
        let image_size = sample.size();
        let [max_top, max_left] = self.max_offset(&image_size)?;
        if top > max_top || left > max_left {
            return Err(Error::InvalidOffset {
                top,
                left,
                crop: self.size,
                image: image_size,
            });
        }
        Ok(self.crop_at(sample, top, left))
    }

    fn max_offset(&self, image_size: &HW<usize>) -> Result<[usize; 2], Error> {
        if !image_size.contains(&self.size) {
            return Err(Error::CropTooLarge {
                crop: self.size,
                image: *image_size,
            });
        }
        Ok([
            image_size.h() - self.size.h(),
            image_size.w() - self.size.w(),
        ])
    }

    fn crop_at(&self, sample: Sample, top: usize, left: usize) -> Sample {
        let Sample {
            image,
            classes,
            bboxes,
        } = sample;
        let [crop_h, crop_w] = self.size.hw();

        // offsets and sizes fit in u32 since they are bounded by the image size
        let image = imageops::crop_imm(
            &image,
            left as u32,
            top as u32,
            crop_w as u32,
            crop_h as u32,
        )
        .to_image();

        let transform = Transform::from_translation(-(top as i64), -(left as i64));
        let bboxes: Vec<_> = bboxes.iter().map(|bbox| &transform * bbox).collect();

        Sample {
            image,
            classes,
            bboxes,
        }
    }
}

impl Processor for RandomCrop {
    fn forward(&self, sample: Sample, rng: &mut dyn RngCore) -> Result<Sample, Error> {
        RandomCrop::forward(self, sample, rng)
    }
}
