use anyhow::Result;
use detection_data::{
    config::{Config, DatasetKind, StepConfig},
    processor::{BoxPolicy, OutputSize},
    Error,
};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAMES: &[&str] = &["voc-train.json5", "voc-custom-classes.json5"];

lazy_static::lazy_static! {
    static ref CONFIG_DIR: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("cfg");
    static ref CONFIG_FILES: Vec<PathBuf> = {
        CONFIG_FILE_NAMES.iter().map(|file_name| CONFIG_DIR.join(file_name)).collect()
    };
}

#[test]
fn config_build_pipeline_test() -> Result<()> {
    CONFIG_FILES.iter().try_for_each(|path| -> Result<_> {
        let config = Config::open(path)?;
        let pipeline = config.preprocessor.build()?;
        assert_eq!(pipeline.len(), config.preprocessor.steps.len());
        Ok(())
    })?;
    Ok(())
}

#[test]
fn config_voc_train_test() -> Result<()> {
    let config = Config::open(CONFIG_DIR.join("voc-train.json5"))?;
    assert!(config.dataset.class_whitelist.is_none());

    let DatasetKind::Voc {
        split,
        skip_difficult,
        classes_file,
        ..
    } = &config.dataset.kind;
    assert_eq!(split.as_deref(), Some("train"));
    assert!(*skip_difficult);
    assert!(classes_file.is_none());

    assert_eq!(config.preprocessor.seed, Some(42));
    assert_eq!(
        config.preprocessor.steps[1],
        StepConfig::RandomCrop {
            output_size: OutputSize::Exact([384, 384])
        }
    );
    assert_eq!(
        config.preprocessor.steps[2],
        StepConfig::FilterBoxes {
            policy: BoxPolicy::Clip,
            min_size: Some(2)
        }
    );
    Ok(())
}

#[test]
fn config_invalid_crop_size_test() -> Result<()> {
    let config = Config::open(CONFIG_DIR.join("bad-crop-size.json5"))?;
    assert!(matches!(
        config.preprocessor.build(),
        Err(Error::InvalidConfig(_))
    ));
    Ok(())
}

#[test]
fn config_missing_file_test() {
    let err = Config::open(CONFIG_DIR.join("no-such-file.json5")).unwrap_err();
    assert!(format!("{:#}", err).contains("no-such-file.json5"));
}
