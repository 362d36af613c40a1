use super::*;
use crate::{common::*, Sample};

/// The generic dataset trait.
pub trait GenericDataset
where
    Self: Debug + Sync + Send,
{
    /// The number of color channels of the dataset.
    fn input_channels(&self) -> usize;

    /// The list of class names of the dataset.
    fn classes(&self) -> &IndexSet<String>;
}

/// The dataset with a list of image paths.
pub trait FileDataset
where
    Self: GenericDataset,
{
    /// Get the list of image records in the dataset.
    fn records(&self) -> &[Arc<FileRecord>];
}

/// The dataset that can be random accessed.
pub trait RandomAccessDataset
where
    Self: GenericDataset,
{
    /// Get number of records in the dataset.
    fn num_records(&self) -> usize;

    /// Load the nth sample in the dataset.
    fn nth(&self, index: usize) -> Result<Sample>;
}
