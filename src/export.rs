use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::MatchFeatures;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    Csv,
    Json,
}

impl DatasetFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            DatasetFormat::Csv => "csv",
            DatasetFormat::Json => "json",
        }
    }
}

/// Write feature rows to `writer`; returns the number of rows written
pub fn export_features<W: Write>(
    rows: &[MatchFeatures],
    format: DatasetFormat,
    mut writer: W,
) -> Result<usize> {
    match format {
        DatasetFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for row in rows {
                csv_writer.serialize(row)?;
            }
            csv_writer.flush()?;
        }
        DatasetFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, rows)?;
            writer.flush()?;
        }
    }

    tracing::info!(
        "Exported {} feature rows as {}",
        rows.len(),
        format.extension()
    );
    Ok(rows.len())
}
