use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::codec::decode_image;
use crate::encode::alpha::has_alpha;
use crate::encode::pipeline::{EncodeOptions, encode_raster};
use crate::encode::svg::SvgDocument;
use crate::foundation::error::{ZorroError, ZorroResult};

/// One input file as handed over by the surrounding build pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    /// Path of the file, used for extension matching and error reporting.
    pub path: PathBuf,
    /// File bytes; `None` for entries without content (e.g. directories).
    pub contents: Option<Vec<u8>>,
}

impl SourceFile {
    /// File with contents.
    pub fn new(path: impl Into<PathBuf>, contents: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            contents: Some(contents),
        }
    }

    /// Entry without contents.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contents: None,
        }
    }

    /// Read a file from disk.
    pub fn read(path: impl Into<PathBuf>) -> ZorroResult<Self> {
        let path = path.into();
        let contents = std::fs::read(&path).map_err(|e| ZorroError::Io(e).in_file(&path))?;
        Ok(Self {
            path,
            contents: Some(contents),
        })
    }
}

/// Options for batch processing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct BatchOptions {
    /// Extensions (without the dot, case-insensitive) that get encoded; others pass through.
    pub extensions: Vec<String>,
    /// Encoder options applied to every file.
    pub encode: EncodeOptions,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["png".to_string()],
            encode: EncodeOptions::default(),
        }
    }
}

impl BatchOptions {
    /// Return `true` when `path` has one of the configured extensions.
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
    }
}

/// Result of processing one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    /// The input was not encoded and is handed back unchanged.
    Passthrough(SourceFile),
    /// The input was encoded.
    Encoded {
        /// Input path.
        source: PathBuf,
        /// Output path (`source` with an `svg` extension).
        path: PathBuf,
        /// Generated document.
        svg: SvgDocument,
    },
}

/// `foo.png` -> `foo.svg`.
pub fn output_path(source: &Path) -> PathBuf {
    source.with_extension("svg")
}

/// Encode one file, or pass it through when it is not a supported raster.
pub fn process_file(file: SourceFile, opts: &BatchOptions) -> ZorroResult<FileOutcome> {
    let Some(contents) = file.contents.as_deref() else {
        return Ok(FileOutcome::Passthrough(file));
    };
    if !opts.accepts(&file.path) {
        tracing::debug!(file = %file.path.display(), "skipping unsupported image");
        return Ok(FileOutcome::Passthrough(file));
    }

    let raster = decode_image(contents).map_err(|e| e.in_file(&file.path))?;
    if !has_alpha(&raster) {
        tracing::warn!(
            file = %file.path.display(),
            "image has no alpha channel; encoding with an opaque mask"
        );
    }
    let svg = encode_raster(raster, &opts.encode).map_err(|e| e.in_file(&file.path))?;

    let path = output_path(&file.path);
    tracing::debug!("✔ {} -> {}", file.path.display(), path.display());
    Ok(FileOutcome::Encoded {
        source: file.path,
        path,
        svg,
    })
}

/// Per-file results of a batch run, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One entry per input file.
    pub outcomes: Vec<ZorroResult<FileOutcome>>,
}

impl BatchReport {
    /// Number of generated documents.
    pub fn encoded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Ok(FileOutcome::Encoded { .. })))
            .count()
    }

    /// Number of passthrough files.
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Ok(FileOutcome::Passthrough(_))))
            .count()
    }

    /// Number of failed files.
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_err()).count()
    }

    /// Iterate over the failures.
    pub fn errors(&self) -> impl Iterator<Item = &ZorroError> {
        self.outcomes.iter().filter_map(|o| o.as_ref().err())
    }

    /// `"Generated N alpha mask(s)."`
    pub fn summary(&self) -> String {
        let n = self.encoded();
        format!("Generated {n} alpha {}.", if n == 1 { "mask" } else { "masks" })
    }
}

/// Process files in parallel; a failing file never stops the others.
pub fn run_batch(files: Vec<SourceFile>, opts: &BatchOptions) -> BatchReport {
    let outcomes: Vec<_> = files
        .into_par_iter()
        .map(|file| process_file(file, opts))
        .collect();

    let report = BatchReport { outcomes };
    for err in report.errors() {
        tracing::error!("✘ {err}");
    }
    tracing::info!(
        encoded = report.encoded(),
        skipped = report.skipped(),
        failed = report.failed(),
        "{}",
        report.summary()
    );
    report
}

#[cfg(test)]
#[path = "../tests/unit/batch.rs"]
mod tests;
