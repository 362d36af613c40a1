use crate::{common::*, PixelLabel};

/// The record with image path and boxes, but without image pixels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileRecord {
    pub image_path: PathBuf,
    pub annotation_path: PathBuf,
    /// The image size stated by the annotation, if any.
    pub size: Option<HW<usize>>,
    /// Bounding boxes in pixel units.
    pub labels: Vec<PixelLabel>,
}
