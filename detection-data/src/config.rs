//! Dataset and preprocessing configuration format.

use crate::{
    common::*,
    dataset::{load_classes_file, VocDataset, VocOptions},
    error::Error,
    processor::{BoxPolicy, FilterBoxes, OutputSize, Pipeline, RandomCrop, Rescale},
};

/// The main configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub preprocessor: PreprocessorConfig,
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config = json5::from_str(&text)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
        Ok(config)
    }
}

/// Dataset options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Optional list of whitelisted classes.
    pub class_whitelist: Option<HashSet<String>>,
    /// The dataset configuration.
    pub kind: DatasetKind,
}

/// Variants of dataset and options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DatasetKind {
    /// PASCAL VOC dataset options.
    Voc {
        dataset_dir: PathBuf,
        /// The class list file. The 20 VOC classes are used if not set.
        classes_file: Option<PathBuf>,
        /// The image set name under `ImageSets/Main`, such as `train` or `val`.
        split: Option<String>,
        #[serde(default)]
        skip_difficult: bool,
    },
}

impl DatasetConfig {
    pub fn load(&self) -> Result<VocDataset> {
        let Self {
            class_whitelist,
            kind,
        } = self;

        match kind {
            DatasetKind::Voc {
                dataset_dir,
                classes_file,
                split,
                skip_difficult,
            } => {
                let classes = classes_file
                    .as_ref()
                    .map(load_classes_file)
                    .transpose()?;
                let options = VocOptions {
                    classes,
                    split: split.clone(),
                    class_whitelist: class_whitelist.clone(),
                    skip_difficult: *skip_difficult,
                };
                VocDataset::load(dataset_dir, options)
            }
        }
    }
}

/// Data preprocessing options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreprocessorConfig {
    /// The random seed. It draws from OS entropy if not set.
    pub seed: Option<u64>,
    /// Processing steps in order of application.
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

/// A preprocessing step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StepConfig {
    Rescale {
        output_size: OutputSize,
    },
    RandomCrop {
        output_size: OutputSize,
    },
    FilterBoxes {
        #[serde(default)]
        policy: BoxPolicy,
        min_size: Option<usize>,
    },
}

impl PreprocessorConfig {
    /// Build the pipeline, validating every step.
    pub fn build(&self) -> Result<Pipeline, Error> {
        self.steps
            .iter()
            .try_fold(Pipeline::new(), |pipeline, step| -> Result<_, Error> {
                let pipeline = match *step {
                    StepConfig::Rescale { output_size } => {
                        pipeline.push(Rescale::new(output_size)?)
                    }
                    StepConfig::RandomCrop { output_size } => {
                        pipeline.push(RandomCrop::new(output_size)?)
                    }
                    StepConfig::FilterBoxes { policy, min_size } => {
                        pipeline.push(FilterBoxes::new(policy, min_size))
                    }
                };
                Ok(pipeline)
            })
    }

    /// The random generator determined by `seed`.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
