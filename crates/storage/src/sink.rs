use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use analytics::AnalysisReport;
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::error::StorageError;

/// Write-side adapter: persists the analysis artifact.
#[derive(Debug, Clone)]
pub struct ReportStore {
    path: PathBuf,
}

impl ReportStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Persists the report as 4-space-indented JSON.
    ///
    /// The full-precision values are written here; display rounding happens
    /// only in the console rendering.
    pub fn save(&self, report: &AnalysisReport) -> Result<(), StorageError> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut writer, formatter);
        report.serialize(&mut serializer)?;

        writer.write_all(b"\n")?;
        writer.flush()?;

        info!(path = %self.path.display(), "analysis report written");
        Ok(())
    }
}
