//! Build configuration for `trax build`.

use std::path::{Path, PathBuf};

/// Suffix of generated files written next to their input.
pub const DEFAULT_SUFFIX: &str = ".trax.ts";

/// Where and how transformed units are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Output root; when absent, generated files are written next to their input.
    pub out_dir: Option<PathBuf>,
    /// File suffix used for generated files written next to their input.
    pub suffix: String,
    /// Do not write anything; fail if any generated file is missing or stale.
    pub check: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: None,
            suffix: DEFAULT_SUFFIX.to_string(),
            check: false,
        }
    }
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(dir.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    /// Whether a path names a unit the build should transform.
    ///
    /// Declaration files (`.d.ts`) and previously generated files are skipped.
    pub fn is_input(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        name.ends_with(".ts") && !name.ends_with(".d.ts") && !name.ends_with(&self.suffix)
    }

    /// Destination of the generated unit for `input`.
    ///
    /// `relative` is the input's path relative to the root it was discovered from; it is only used
    /// with an output directory, where the input layout is mirrored under `out_dir`.
    pub fn output_path(&self, input: &Path, relative: &Path) -> PathBuf {
        if let Some(dir) = &self.out_dir {
            return dir.join(relative);
        }
        let stem = input
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_suffix(".ts"))
            .unwrap_or_default();
        input.with_file_name(format!("{stem}{}", self.suffix))
    }
}
