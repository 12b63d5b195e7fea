//! CSV export of the mention table and the ranked summary.

use std::path::Path;

use csv::Writer;

use crate::report::BrandScore;
use crate::types::Mention;
use crate::AnalysisError;

/// Write the raw mention table: one row per mention.
///
/// # Errors
///
/// Returns [`AnalysisError::Csv`] or [`AnalysisError::Io`] if the file
/// cannot be created or written.
pub fn write_raw_csv(path: &Path, mentions: &[Mention]) -> Result<(), AnalysisError> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record([
        "brand",
        "source",
        "text",
        "sentiment",
        "engagement",
        "wess_score",
    ])?;

    for mention in mentions {
        writer.write_record([
            mention.brand.clone(),
            mention.source.to_string(),
            mention.text.clone(),
            mention.sentiment.to_string(),
            mention.engagement.to_string(),
            mention.wess_score.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the ranked summary: one row per brand that had at least one
/// mention, descending by total score.
///
/// # Errors
///
/// Returns [`AnalysisError::Csv`] or [`AnalysisError::Io`] if the file
/// cannot be created or written.
pub fn write_summary_csv(path: &Path, report: &[BrandScore]) -> Result<(), AnalysisError> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(["brand", "wess_score"])?;

    for total in report {
        writer.write_record([total.brand.clone(), total.wess_score.to_string()])?;
    }

    writer.flush()?;
    Ok(())
}
