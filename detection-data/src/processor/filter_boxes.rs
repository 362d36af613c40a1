//! Bounding box sanitization against image bounds.

use super::Processor;
use crate::{common::*, error::Error, PixelBox, Sample};

/// How boxes reaching out of the image are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoxPolicy {
    /// Leave every box as is.
    Keep,
    /// Clamp boxes into the image and drop those left without area.
    Clip,
    /// Drop boxes that are not fully inside the image.
    Drop,
}

impl Default for BoxPolicy {
    fn default() -> Self {
        Self::Keep
    }
}

/// Filter boxes by a [BoxPolicy] and an optional minimum side length.
///
/// A dropped box takes its class with it, so classes and boxes stay aligned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterBoxes {
    policy: BoxPolicy,
    min_size: Option<usize>,
}

impl FilterBoxes {
    pub fn new(policy: BoxPolicy, min_size: Option<usize>) -> Self {
        Self { policy, min_size }
    }

    pub fn policy(&self) -> BoxPolicy {
        self.policy
    }

    pub fn forward(&self, sample: Sample) -> Result<Sample, Error> {
        sample.check()?;

        let image_size: HW<i64> = sample.size().cast();
        let min_size = self.min_size.map(|size| size as i64);
        let orig_count = sample.num_objects();

        let labels: Vec<_> = sample
            .labels()
            .filter_map(|label| {
                label.filter_map_rect(|rect: PixelBox| {
                    let rect = match self.policy {
                        BoxPolicy::Keep => rect,
                        BoxPolicy::Clip => {
                            let clipped = rect.clamp_within(&image_size);
                            if clipped.is_degenerate() {
                                return None;
                            }
                            clipped
                        }
                        BoxPolicy::Drop => {
                            if !rect.is_within(&image_size) || rect.is_degenerate() {
                                return None;
                            }
                            rect
                        }
                    };

                    match min_size {
                        Some(min_size) if rect.h() < min_size || rect.w() < min_size => None,
                        _ => Some(rect),
                    }
                })
            })
            .collect();

        let num_dropped = orig_count - labels.len();
        if num_dropped > 0 {
            debug!(
                "dropped {} out of {} boxes with policy {:?}",
                num_dropped, orig_count, self.policy
            );
        }

        Ok(Sample::from_labels(sample.image, labels))
    }
}

impl Processor for FilterBoxes {
    fn forward(&self, sample: Sample, _rng: &mut dyn RngCore) -> Result<Sample, Error> {
        FilterBoxes::forward(self, sample)
    }
}
