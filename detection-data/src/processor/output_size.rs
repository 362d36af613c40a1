//! Target size of resizing and cropping processors.

use crate::{common::*, error::Error};

/// The output size parameter of [Rescale](super::Rescale) and [RandomCrop](super::RandomCrop).
///
/// It deserializes from either a number or a `[height, width]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutputSize {
    /// A single edge length. Rescaling matches the shorter image edge to it and
    /// keeps the aspect ratio, while cropping makes a square window.
    Shorter(usize),
    /// Exact `[height, width]`.
    Exact([usize; 2]),
}

impl OutputSize {
    /// Reject zero lengths and lengths that images cannot have.
    pub fn validate(self) -> Result<Self, Error> {
        let lengths = match self {
            Self::Shorter(size) => vec![size],
            Self::Exact([h, w]) => vec![h, w],
        };

        if lengths.iter().any(|&len| len == 0) {
            return Err(Error::InvalidConfig(format!(
                "{:?} must have positive lengths",
                self
            )));
        }
        if lengths.iter().any(|&len| len > u32::MAX as usize) {
            return Err(Error::InvalidConfig(format!(
                "{:?} exceeds the maximum image length {}",
                self,
                u32::MAX
            )));
        }

        Ok(self)
    }

    /// The window size when used as a crop size.
    pub fn crop_size(&self) -> HW<usize> {
        match *self {
            Self::Shorter(size) => HW::from_hw([size, size]),
            Self::Exact(hw) => HW::from_hw(hw),
        }
    }

    /// The outcome size of resizing an image of `src` size.
    ///
    /// Both lengths are truncated toward zero.
    pub fn resize_target(&self, src: &HW<usize>) -> HW<usize> {
        match *self {
            Self::Shorter(size) => {
                let [h, w] = src.hw();
                let (h, w, size) = (h as f64, w as f64, size as f64);
                let (new_h, new_w) = if h > w {
                    (size * h / w, size)
                } else {
                    (size, size * w / h)
                };
                HW::from_hw([new_h as usize, new_w as usize])
            }
            Self::Exact(hw) => HW::from_hw(hw),
        }
    }
}

impl From<usize> for OutputSize {
    fn from(size: usize) -> Self {
        Self::Shorter(size)
    }
}

impl From<(usize, usize)> for OutputSize {
    fn from((h, w): (usize, usize)) -> Self {
        Self::Exact([h, w])
    }
}

impl From<[usize; 2]> for OutputSize {
    fn from(hw: [usize; 2]) -> Self {
        Self::Exact(hw)
    }
}

impl TryFrom<&[usize]> for OutputSize {
    type Error = Error;

    fn try_from(lengths: &[usize]) -> Result<Self, Self::Error> {
        match *lengths {
            [size] => Ok(Self::Shorter(size)),
            [h, w] => Ok(Self::Exact([h, w])),
            _ => Err(Error::InvalidConfig(format!(
                "expect 1 or 2 lengths, but get {}",
                lengths.len()
            ))),
        }
    }
}
