use anyhow::{bail, Context, Result};
use std::path::Path;

use super::catalog::Catalog;
use super::types::CaseFile;

const BUILTIN: [(&str, &str); 3] = [
    ("cases/html.toml", include_str!("../../cases/html.toml")),
    ("cases/css.toml", include_str!("../../cases/css.toml")),
    ("cases/js.toml", include_str!("../../cases/js.toml")),
];

pub fn parse_case_file(name: &str, content: &str) -> Result<CaseFile> {
    toml::from_str(content).with_context(|| format!("failed to parse case file {}", name))
}

pub fn load_case_file(path: &Path) -> Result<CaseFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read case file {}", path.display()))?;
    parse_case_file(&path.display().to_string(), &content)
}

/// The case table compiled into the binary.
pub fn load_builtin() -> Result<Catalog> {
    let files = BUILTIN
        .iter()
        .map(|(name, content)| parse_case_file(name, content))
        .collect::<Result<Vec<_>>>()?;
    Catalog::from_files(files)
}

/// Loads every `*.toml` file in `dir`. Files are read in file name order, so
/// `01_basics.toml` comes before `02_more.toml` for the same language.
pub fn load_dir(dir: &Path) -> Result<Catalog> {
    if !dir.is_dir() {
        bail!("case directory {} does not exist", dir.display());
    }
    let pattern = dir.join("*.toml");
    let pattern = pattern.to_string_lossy();

    let mut paths: Vec<_> = glob::glob(&pattern)
        .with_context(|| format!("invalid case directory {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .collect();
    paths.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));

    let mut files = Vec::new();
    for path in paths {
        files.push(load_case_file(&path)?);
    }

    Catalog::from_files(files).with_context(|| format!("incomplete case directory {}", dir.display()))
}
