use crate::{common::*, error::Error};

/// Bounding box in pixel units of the image it belongs to.
pub type PixelBox = TLBR<i64>;

/// Bounding box with class index in pixel units.
pub type PixelLabel = Label<PixelBox, usize>;

/// The unit of work of the preprocessing pipeline.
///
/// `classes[i]` and `bboxes[i]` describe the same object. Every processor
/// checks that both have equal length before it touches the sample.
#[derive(Debug, Clone)]
pub struct Sample {
    pub image: RgbImage,
    pub classes: Vec<usize>,
    pub bboxes: Vec<PixelBox>,
}

impl Sample {
    pub fn new(image: RgbImage, classes: Vec<usize>, bboxes: Vec<PixelBox>) -> Result<Self, Error> {
        let sample = Self {
            image,
            classes,
            bboxes,
        };
        sample.check()?;
        Ok(sample)
    }

    pub fn from_labels<I>(image: RgbImage, labels: I) -> Self
    where
        I: IntoIterator<Item = PixelLabel>,
    {
        let (classes, bboxes) = labels
            .into_iter()
            .map(|label| (label.class, label.rect))
            .unzip();

        Self {
            image,
            classes,
            bboxes,
        }
    }

    /// Verify that classes and boxes are aligned.
    pub fn check(&self) -> Result<(), Error> {
        if self.classes.len() != self.bboxes.len() {
            return Err(Error::ShapeMismatch {
                classes: self.classes.len(),
                bboxes: self.bboxes.len(),
            });
        }
        Ok(())
    }

    /// The image size in pixels.
    pub fn size(&self) -> HW<usize> {
        image_size(&self.image)
    }

    pub fn num_objects(&self) -> usize {
        self.bboxes.len()
    }

    pub fn labels(&self) -> impl Iterator<Item = PixelLabel> + '_ {
        self.classes
            .iter()
            .zip(&self.bboxes)
            .map(|(&class, &rect)| Label::new(rect, class))
    }
}

pub(crate) fn image_size(image: &RgbImage) -> HW<usize> {
    let (w, h) = image.dimensions();
    HW::from_hw([h as usize, w as usize])
}
