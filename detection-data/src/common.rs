pub use anyhow::{ensure, format_err, Context as _, Result};
pub use bbox::{Rect, RectNum, Transform, HW, TLBR, XYXY_};
pub use image::{imageops, imageops::FilterType, RgbImage};
pub use indexmap::IndexSet;
pub use label::Label;
pub use log::{debug, info, trace, warn};
pub use ndarray::Array3;
pub use rand::prelude::*;
pub use serde::{Deserialize, Serialize};
pub use std::{
    collections::HashSet,
    fmt::Debug,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};
