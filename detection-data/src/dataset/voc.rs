use super::*;
use crate::{common::*, PixelBox, PixelLabel, Sample};

/// The 20 object classes of PASCAL VOC.
pub const VOC_CLASSES: [&str; 20] = [
    "aeroplane",
    "bicycle",
    "bird",
    "boat",
    "bottle",
    "bus",
    "car",
    "cat",
    "chair",
    "cow",
    "diningtable",
    "dog",
    "horse",
    "motorbike",
    "person",
    "pottedplant",
    "sheep",
    "sofa",
    "train",
    "tvmonitor",
];

pub fn voc_classes() -> IndexSet<String> {
    VOC_CLASSES.iter().map(|&name| name.to_owned()).collect()
}

/// Options of [VocDataset::load].
#[derive(Debug, Clone, Default)]
pub struct VocOptions {
    /// The class list. It defaults to [VOC_CLASSES].
    pub classes: Option<IndexSet<String>>,
    /// If set, load the images listed in `ImageSets/Main/<split>.txt` only.
    pub split: Option<String>,
    /// If set, objects of other classes are skipped.
    pub class_whitelist: Option<HashSet<String>>,
    /// Skip objects marked as difficult.
    pub skip_difficult: bool,
}

/// The PASCAL VOC dataset.
///
/// Annotations are parsed once when loading. Image pixels are read on every
/// [nth](RandomAccessDataset::nth) call.
#[derive(Debug, Clone)]
pub struct VocDataset {
    pub dataset_dir: PathBuf,
    pub classes: IndexSet<String>,
    pub records: Vec<Arc<FileRecord>>,
}

impl GenericDataset for VocDataset {
    fn input_channels(&self) -> usize {
        3
    }

    fn classes(&self) -> &IndexSet<String> {
        &self.classes
    }
}

impl FileDataset for VocDataset {
    fn records(&self) -> &[Arc<FileRecord>] {
        &self.records
    }
}

impl RandomAccessDataset for VocDataset {
    fn num_records(&self) -> usize {
        self.records.len()
    }

    fn nth(&self, index: usize) -> Result<Sample> {
        let record = self.records.get(index).ok_or_else(|| {
            format_err!(
                "index {} is out of range, the dataset has {} records",
                index,
                self.records.len()
            )
        })?;

        let image = image::open(&record.image_path)
            .with_context(|| format!("failed to open image '{}'", record.image_path.display()))?
            .into_rgb8();

        if let Some(expect_size) = &record.size {
            let (w, h) = image.dimensions();
            let size = HW::from_hw([h as usize, w as usize]);
            ensure!(
                &size == expect_size,
                "image size does not match, expect {}, but get {} in '{}'",
                expect_size,
                size,
                record.image_path.display()
            );
        }

        trace!(
            "load sample {} with {} objects from '{}'",
            index,
            record.labels.len(),
            record.image_path.display()
        );

        Ok(Sample::from_labels(image, record.labels.iter().copied()))
    }
}

impl VocDataset {
    pub fn load<P>(dataset_dir: P, options: VocOptions) -> Result<VocDataset>
    where
        P: AsRef<Path>,
    {
        let VocOptions {
            classes,
            split,
            class_whitelist,
            skip_difficult,
        } = options;
        let dataset_dir = dataset_dir.as_ref().to_owned();
        let classes = classes.unwrap_or_else(voc_classes);
        ensure!(!classes.is_empty(), "the class list must not be empty");

        let image_dir = dataset_dir.join("JPEGImages");
        let annotation_dir = dataset_dir.join("Annotations");

        // list image files
        let image_files = match &split {
            Some(split) => {
                let split_file = dataset_dir
                    .join("ImageSets")
                    .join("Main")
                    .join(format!("{}.txt", split));
                list_split_images(&split_file, &image_dir)?
            }
            None => list_images(&image_dir)?,
        };

        // parse annotations
        let mut num_skipped = 0;
        let records: Vec<_> = image_files
            .into_iter()
            .map(|image_path| -> Result<_> {
                let stem = image_path
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .ok_or_else(|| {
                        format_err!("invalid image file name '{}'", image_path.display())
                    })?;
                let annotation_path = annotation_dir.join(format!("{}.xml", stem));

                let xml_content = fs::read_to_string(&annotation_path).with_context(|| {
                    format!(
                        "failed to read annotation file {}",
                        annotation_path.display()
                    )
                })?;
                let annotation: Annotation =
                    serde_xml_rs::from_str(&xml_content).with_context(|| {
                        format!(
                            "failed to parse annotation file {}",
                            annotation_path.display()
                        )
                    })?;

                let size = annotation
                    .size
                    .as_ref()
                    .map(|size| HW::from_hw([size.height, size.width]));

                let labels: Vec<PixelLabel> = annotation
                    .object
                    .iter()
                    .filter(|obj| {
                        // filter by whitelist and difficulty
                        let keep = class_whitelist
                            .as_ref()
                            .map_or(true, |whitelist| whitelist.contains(&obj.name))
                            && !(skip_difficult && obj.is_difficult());
                        if !keep {
                            num_skipped += 1;
                        }
                        keep
                    })
                    .map(|obj| -> Result<_> {
                        let class = classes.get_index_of(&obj.name).ok_or_else(|| {
                            format_err!(
                                "unknown class '{}' found in '{}'",
                                obj.name,
                                annotation_path.display()
                            )
                        })?;
                        let BndBox {
                            xmin,
                            ymin,
                            xmax,
                            ymax,
                        } = obj.bndbox;
                        let rect = PixelBox::try_from(XYXY_ {
                            xmin: xmin as i64,
                            ymin: ymin as i64,
                            xmax: xmax as i64,
                            ymax: ymax as i64,
                        })
                        .with_context(|| {
                            format!(
                                "invalid bounding box of '{}' in '{}'",
                                obj.name,
                                annotation_path.display()
                            )
                        })?;
                        Ok(Label::new(rect, class))
                    })
                    .collect::<Result<_>>()?;

                Ok(Arc::new(FileRecord {
                    image_path,
                    annotation_path,
                    size,
                    labels,
                }))
            })
            .collect::<Result<_>>()?;

        if num_skipped > 0 {
            warn!("skipped {} objects in the data set", num_skipped);
        }
        info!(
            "loaded {} records from '{}'",
            records.len(),
            dataset_dir.display()
        );

        Ok(VocDataset {
            dataset_dir,
            classes,
            records,
        })
    }
}

fn list_images(image_dir: &Path) -> Result<Vec<PathBuf>> {
    ensure!(
        image_dir.is_dir(),
        "image directory '{}' does not exist",
        image_dir.display()
    );

    let pattern = format!(
        "{}/*.jpg",
        glob::Pattern::escape(&image_dir.display().to_string())
    );
    let mut image_files = glob::glob(&pattern)?
        .map(|result| -> Result<_> { Ok(result?) })
        .collect::<Result<Vec<_>>>()?;
    image_files.sort();
    Ok(image_files)
}

fn list_split_images(split_file: &Path, image_dir: &Path) -> Result<Vec<PathBuf>> {
    let content = fs::read_to_string(split_file)
        .with_context(|| format!("failed to read split file '{}'", split_file.display()))?;

    // class-specific split files carry an extra flag column after the id
    content
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(|id| -> Result<_> {
            let path = image_dir.join(format!("{}.jpg", id));
            ensure!(
                path.is_file(),
                "image '{}' listed in '{}' does not exist",
                path.display(),
                split_file.display()
            );
            Ok(path)
        })
        .collect()
}

/// The `<annotation>` element of a VOC XML file.
#[derive(Debug, Clone, Deserialize)]
pub struct Annotation {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(default)]
    pub object: Vec<Object>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Size {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub depth: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Object {
    pub name: String,
    pub bndbox: BndBox,
    #[serde(default)]
    pub difficult: Option<String>,
}

impl Object {
    pub fn is_difficult(&self) -> bool {
        self.difficult.as_deref().map(str::trim) == Some("1")
    }
}

/// Box corners. Some datasets store fractional pixel values, which are
/// truncated when building [PixelBox]es.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BndBox {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voc_annotation_single_and_many_objects() -> Result<()> {
        let single = r#"
            <annotation>
                <filename>000001.jpg</filename>
                <size><width>353</width><height>500</height><depth>3</depth></size>
                <object>
                    <name>dog</name>
                    <pose>Left</pose>
                    <difficult>0</difficult>
                    <bndbox><xmin>48</xmin><ymin>240</ymin><xmax>195</xmax><ymax>371</ymax></bndbox>
                </object>
            </annotation>
        "#;
        let annotation: Annotation = serde_xml_rs::from_str(single)?;
        assert_eq!(annotation.object.len(), 1);
        assert_eq!(annotation.object[0].name, "dog");
        assert!(!annotation.object[0].is_difficult());
        let size = annotation.size.unwrap();
        assert_eq!((size.height, size.width), (500, 353));

        let many = r#"
            <annotation>
                <filename>000002.jpg</filename>
                <object>
                    <name>person</name>
                    <difficult>1</difficult>
                    <bndbox><xmin>8.5</xmin><ymin>12</ymin><xmax>352</xmax><ymax>498</ymax></bndbox>
                    <part>
                        <name>head</name>
                        <bndbox><xmin>100</xmin><ymin>20</ymin><xmax>140</xmax><ymax>70</ymax></bndbox>
                    </part>
                </object>
                <object>
                    <name>chair</name>
                    <bndbox><xmin>1</xmin><ymin>2</ymin><xmax>3</xmax><ymax>4</ymax></bndbox>
                </object>
            </annotation>
        "#;
        let annotation: Annotation = serde_xml_rs::from_str(many)?;
        assert!(annotation.size.is_none());
        assert_eq!(annotation.object.len(), 2);
        assert!(annotation.object[0].is_difficult());
        assert_eq!(annotation.object[0].bndbox.xmin, 8.5);
        assert_eq!(annotation.object[1].name, "chair");
        Ok(())
    }

    #[test]
    fn voc_annotation_without_objects() -> Result<()> {
        let empty = r#"
            <annotation>
                <filename>000003.jpg</filename>
                <size><width>10</width><height>10</height><depth>3</depth></size>
            </annotation>
        "#;
        let annotation: Annotation = serde_xml_rs::from_str(empty)?;
        assert!(annotation.object.is_empty());
        Ok(())
    }

    #[test]
    fn voc_annotation_full_and_bare_headers() -> Result<()> {
        let full = r#"
            <annotation>
                <folder>VOC2007</folder>
                <filename>000005.jpg</filename>
                <source>
                    <database>The VOC2007 Database</database>
                    <annotation>PASCAL VOC2007</annotation>
                    <image>flickr</image>
                    <flickrid>325991873</flickrid>
                </source>
                <owner><flickrid>archintent louisville</flickrid><name>?</name></owner>
                <size><width>500</width><height>375</height><depth>3</depth></size>
                <segmented>0</segmented>
                <object>
                    <name>chair</name>
                    <pose>Rear</pose>
                    <truncated>0</truncated>
                    <difficult>0</difficult>
                    <bndbox><xmin>263</xmin><ymin>211</ymin><xmax>324</xmax><ymax>339</ymax></bndbox>
                </object>
                <object>
                    <name>chair</name>
                    <pose>Unspecified</pose>
                    <truncated>1</truncated>
                    <difficult>1</difficult>
                    <bndbox><xmin>5</xmin><ymin>244</ymin><xmax>67</xmax><ymax>374</ymax></bndbox>
                </object>
            </annotation>
        "#;
        let annotation: Annotation = serde_xml_rs::from_str(full)?;
        assert_eq!(annotation.object.len(), 2);
        assert!(!annotation.object[0].is_difficult());
        assert!(annotation.object[1].is_difficult());
        assert_eq!(annotation.size.unwrap().depth, Some(3));

        // no source, segmented or depth, with fractional corners
        let bare = r#"
            <annotation>
                <size><width>64</width><height>48</height></size>
                <object>
                    <name>cat</name>
                    <bndbox><xmin>1.9</xmin><ymin>2.2</ymin><xmax>30.5</xmax><ymax>40.99</ymax></bndbox>
                </object>
            </annotation>
        "#;
        let annotation: Annotation = serde_xml_rs::from_str(bare)?;
        assert!(annotation.filename.is_none());
        let size = annotation.size.unwrap();
        assert_eq!((size.height, size.width, size.depth), (48, 64, None));
        assert_eq!(annotation.object[0].bndbox.ymax, 40.99);
        Ok(())
    }

    #[test]
    fn voc_default_classes() {
        let classes = voc_classes();
        assert_eq!(classes.len(), 20);
        assert_eq!(classes.get_index_of("aeroplane"), Some(0));
        assert_eq!(classes.get_index_of("tvmonitor"), Some(19));
    }
}
