//! Pipeline configuration.
//!
//! Every field has a default tuned for the NYC postings dataset; an external
//! JSON config can override any subset of them. Column names refer to the
//! post-mapping (snake_case) schema.

use serde::{Deserialize, Serialize};

use crate::error::{EtlError, Result};
use crate::schema;

/// Configuration for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Free-text columns stripped of special characters.
    pub text_columns: Vec<String>,
    /// Columns converted to title case.
    pub title_case_columns: Vec<String>,
    /// Columns coerced to integers.
    pub integer_columns: Vec<String>,
    /// Columns coerced to decimals (2 places).
    pub decimal_columns: Vec<String>,
    /// Columns coerced to timestamps.
    pub datetime_columns: Vec<String>,
    /// Columns defining logical record identity for deduplication.
    pub dedup_keys: Vec<String>,
    /// Columns ranking duplicate rows to pick the survivor.
    pub order_keys: Vec<String>,
    /// Order duplicates descending (keep the greatest order-key value).
    pub dedup_descending: bool,
    /// Free-text column scanned for degree keywords.
    pub qualification_column: String,
    /// Case-insensitive keywords that mark a degree requirement.
    pub degree_keywords: Vec<String>,
    /// Columns removed before export.
    pub drop_columns: Vec<String>,
    /// File name of the cleaned CSV inside the output directory.
    pub export_file_name: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            text_columns: strings(&[
                schema::PREFERRED_SKILLS,
                schema::MIN_QUALIFY_REQUIREMENTS,
                schema::JOB_DESCRIPTION,
            ]),
            title_case_columns: strings(&[schema::BUSINESS_TITLE, schema::CIVIL_SERVICE_TITLE]),
            integer_columns: strings(&[schema::NUMBER_OF_POSITIONS]),
            decimal_columns: strings(&[schema::SALARY_MIN_RANGE, schema::SALARY_MAX_RANGE]),
            datetime_columns: strings(&[
                schema::POSTING_DATE,
                schema::POSTING_UPDATED,
                schema::PROCESS_DATE,
            ]),
            dedup_keys: strings(&[schema::JOB_ID]),
            order_keys: strings(&[schema::POSTING_UPDATED]),
            dedup_descending: true,
            qualification_column: schema::MIN_QUALIFY_REQUIREMENTS.to_string(),
            degree_keywords: strings(&[
                "bachelor",
                "master",
                "phd",
                "doctorate",
                "graduate",
                "degree",
                "graduation",
            ]),
            drop_columns: strings(&["to_apply", "recruitment_contact", "post_until"]),
            export_file_name: "job_postings_clean.csv".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.dedup_keys.iter().all(|key| key.trim().is_empty()) {
            return Err(EtlError::Config(
                "dedup_keys must name at least one column".to_string(),
            ));
        }
        if self.order_keys.iter().all(|key| key.trim().is_empty()) {
            return Err(EtlError::Config(
                "order_keys must name at least one column".to_string(),
            ));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(EtlError::Config(
                "export_file_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}
