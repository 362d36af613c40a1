//! Errors raised by sample processors.

use bbox::HW;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid output size: {0}")]
    InvalidConfig(String),
    #[error("input image is empty")]
    EmptyImage,
    #[error("output size {size} exceeds the supported image dimensions")]
    SizeOverflow { size: HW<usize> },
    #[error("crop size {crop} exceeds image size {image}")]
    CropTooLarge { crop: HW<usize>, image: HW<usize> },
    #[error(
        "crop offset (top={top}, left={left}) of size {crop} is out of bound in image size {image}"
    )]
    InvalidOffset {
        top: usize,
        left: usize,
        crop: HW<usize>,
        image: HW<usize>,
    },
    #[error("got {classes} classes but {bboxes} bounding boxes")]
    ShapeMismatch { classes: usize, bboxes: usize },
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}
