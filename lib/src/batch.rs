use std::error::Error;
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::converter::convert_str;
use crate::{ConvertError, Settings};

/// How source files are found and output files are named
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// Prepended to every drawable name
    pub prefix: String,
    /// Source file extension, without the dot
    pub extension: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            prefix: "logo_".to_string(),
            extension: "svg".to_string(),
        }
    }
}

/// Outcome of a batch run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Source file names that converted cleanly
    pub succeeded: Vec<String>,
    /// Source file names that could not be converted
    pub failed: Vec<String>,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Logs and tallies the result of converting `file_name`
    pub fn record(&mut self, file_name: String, outcome: Result<(), ConvertError>) {
        match outcome {
            Ok(()) => {
                info!("Successfully converted {file_name}");
                self.succeeded.push(file_name);
            }
            Err(err) => {
                warn!("Failed to convert {file_name}: {}", describe(&err));
                self.failed.push(file_name);
            }
        }
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(50);
        writeln!(f, "{rule}")?;
        writeln!(f, "CONVERSION SUMMARY")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Total SVG files processed: {}", self.processed())?;
        writeln!(f, "Successfully converted: {}", self.succeeded.len())?;
        writeln!(f, "Failed to convert: {}", self.failed.len())?;
        if !self.failed.is_empty() {
            writeln!(f, "Failed files: {}", self.failed.join(", "))?;
        }
        write!(f, "{rule}")
    }
}

/// Resource name for a source file stem: lowercased, with dashes and spaces
/// turned into underscores
pub fn drawable_name(stem: &str, prefix: &str) -> String {
    format!("{prefix}{}", stem.to_lowercase().replace(&['-', ' '][..], "_"))
}

/// Files in `dir` whose name ends in `.{extension}`, sorted by path
pub fn list_svgs(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ConvertError> {
    let read_dir_error = |source| ConvertError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let suffix = format!(".{extension}");

    let mut files = vec![];
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        let matches = path
            .file_name()
            .and_then(OsStr::to_str)
            .is_some_and(|name| name.ends_with(&suffix));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Converts one SVG file into a drawable file.
///
/// The drawable is fully built in memory before `dst` is touched, so a source
/// that fails to parse never leaves a file behind.
pub fn convert_file(src: &Path, dst: &Path, settings: &Settings) -> Result<(), ConvertError> {
    let svg = fs::read_to_string(src).map_err(|source| ConvertError::Read {
        path: src.to_path_buf(),
        source,
    })?;
    let xml = convert_str(&svg, settings)?;

    if let Err(source) = fs::write(dst, xml) {
        // Don't leave a truncated drawable around
        let _ = fs::remove_file(dst);
        return Err(ConvertError::Write {
            path: dst.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// Converts every SVG in `src_dir` into `dst_dir`.
///
/// Failures on individual files are recorded in the report and never stop the
/// batch. Only an unreadable source directory or an uncreatable destination
/// directory is an error.
pub fn convert_dir(
    src_dir: &Path,
    dst_dir: &Path,
    settings: &Settings,
) -> Result<BatchReport, ConvertError> {
    fs::create_dir_all(dst_dir).map_err(|source| ConvertError::CreateDir {
        path: dst_dir.to_path_buf(),
        source,
    })?;

    let files = list_svgs(src_dir, &settings.batch.extension)?;
    info!("Found {} SVG files to convert", files.len());

    let mut report = BatchReport::default();
    for src in files {
        let file_name = lossy(src.file_name());
        let name = drawable_name(&lossy(src.file_stem()), &settings.batch.prefix);
        let dst = dst_dir.join(format!("{name}.xml"));

        info!("Converting {file_name} to {name}.xml");
        report.record(file_name, convert_file(&src, &dst, settings));
    }
    Ok(report)
}

fn lossy(name: Option<&OsStr>) -> String {
    name.map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// An error followed by its chain of sources
fn describe(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message += ": ";
        message += &cause.to_string();
        source = cause.source();
    }
    message
}
