//! Dataset loading toolkit.

mod dataset_;
mod record;
mod utils;
mod voc;

pub use dataset_::*;
pub use record::*;
pub use utils::*;
pub use voc::*;
