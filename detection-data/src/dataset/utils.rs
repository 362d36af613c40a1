use crate::common::*;

/// Load class names from a text file, one name per line.
pub fn load_classes_file(path: impl AsRef<Path>) -> Result<IndexSet<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read classes file '{}'", path.display()))?;
    let lines: Vec<_> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let classes: IndexSet<_> = lines.iter().cloned().map(ToOwned::to_owned).collect();
    ensure!(
        lines.len() == classes.len(),
        "duplicated class names found in '{}'",
        path.display()
    );
    ensure!(
        !classes.is_empty(),
        "no classes found in '{}'",
        path.display()
    );
    Ok(classes)
}
