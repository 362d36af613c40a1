use anyhow::{Context, Result};
use clap::Parser;
use detection_data::{
    config::Config,
    dataset::{FileDataset, GenericDataset, RandomAccessDataset},
    processor::ToTensor,
};
use itertools::Itertools;
use log::info;
use prettytable::{cell, row, Table};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
enum Opts {
    /// Print per-class object counts of the dataset
    Info {
        /// configuration file
        config_file: PathBuf,
    },
    /// Run the preprocessing pipeline on one sample
    Preview {
        /// configuration file
        config_file: PathBuf,
        /// sample index
        #[clap(long, default_value = "0")]
        index: usize,
        /// output image file
        #[clap(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    match Opts::parse() {
        Opts::Info { config_file } => {
            info(config_file)?;
        }
        Opts::Preview {
            config_file,
            index,
            output,
        } => {
            preview(config_file, index, output)?;
        }
    }

    Ok(())
}

fn info(config_file: impl AsRef<Path>) -> Result<()> {
    let config = Config::open(config_file)?;
    let dataset = config.dataset.load()?;
    let records = dataset.records();
    let counts = records
        .iter()
        .flat_map(|record| record.labels.iter().map(|label| label.class))
        .counts();

    // print class statistics
    {
        let mut table = Table::new();
        table.add_row(row!["index", "class", "objects"]);

        dataset
            .classes()
            .iter()
            .enumerate()
            .for_each(|(index, name)| {
                let count = counts.get(&index).copied().unwrap_or(0);
                table.add_row(row![index, name, count]);
            });

        table.printstd();
    }

    println!(
        "{} images, {} objects in total",
        records.len(),
        counts.values().sum::<usize>()
    );

    Ok(())
}

fn preview(config_file: impl AsRef<Path>, index: usize, output: Option<PathBuf>) -> Result<()> {
    let config = Config::open(config_file)?;
    let dataset = config.dataset.load()?;
    let pipeline = config.preprocessor.build()?;
    let mut rng = config.preprocessor.rng();

    let sample = dataset.nth(index)?;
    info!(
        "input size {} with {} objects",
        sample.size(),
        sample.num_objects()
    );

    let sample = pipeline.forward(sample, &mut rng)?;
    info!(
        "output size {} with {} objects",
        sample.size(),
        sample.num_objects()
    );
    let classes = dataset.classes();
    sample.labels().for_each(|label| {
        let name = classes
            .get_index(label.class)
            .map(String::as_str)
            .unwrap_or("?");
        info!("{}\t{:?}", name, label.rect);
    });

    if let Some(output) = &output {
        sample
            .image
            .save(output)
            .with_context(|| format!("failed to save image '{}'", output.display()))?;
        info!("saved image to '{}'", output.display());
    }

    let tensor = ToTensor.forward(sample)?;
    info!("tensor shape {:?}", tensor.image.shape());

    Ok(())
}
