//! Discovery of export files awaiting repair

use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffix appended to the stem of repaired files
const FIXED_SUFFIX: &str = "_fixed";

/// Find CSV exports under `root`, skipping files that are already repaired
/// outputs (stem ending in `_fixed`). Results are sorted for deterministic
/// processing order.
pub fn find_exports<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root.as_ref()).follow_links(true) {
        let entry = entry?;
        let path = entry.path();

        if !path.extension().is_some_and(|ext| ext == "csv") {
            continue;
        }

        let already_fixed = path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(FIXED_SUFFIX));

        if !already_fixed {
            found.push(path.to_path_buf());
        }
    }

    found.sort();
    Ok(found)
}

/// Output path for a repaired export: same directory, stem + `_fixed.csv`.
///
/// "builder_units.csv" becomes "builder_units_fixed.csv".
pub fn fixed_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{}{}.csv", stem, FIXED_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_fixed_output_path() {
        assert_eq!(
            fixed_output_path(Path::new("builder_units.csv")),
            PathBuf::from("builder_units_fixed.csv")
        );
        assert_eq!(
            fixed_output_path(Path::new("exports/heroes.csv")),
            PathBuf::from("exports/heroes_fixed.csv")
        );
    }

    #[test]
    fn test_find_exports_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        fs::write(root.join("b.csv"), "x").unwrap();
        fs::write(root.join("a.csv"), "x").unwrap();
        fs::write(root.join("a_fixed.csv"), "x").unwrap();
        fs::write(root.join("notes.txt"), "x").unwrap();
        fs::create_dir(root.join("nested")).unwrap();
        fs::write(root.join("nested/c.csv"), "x").unwrap();

        let found = find_exports(root).unwrap();
        let names: Vec<String> = found
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();

        assert_eq!(names, vec!["a.csv", "b.csv", "nested/c.csv"]);
    }

    #[test]
    fn test_find_exports_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let found = find_exports(dir.path()).unwrap();
        assert!(found.is_empty());
    }
}
