//! Categorical value types carried by a posting record.

use serde::{Deserialize, Serialize};

/// Hours worked in a year of full-time employment.
pub const HOURS_PER_YEAR: f64 = 2080.0;
/// Working days in a year of full-time employment.
pub const DAYS_PER_YEAR: f64 = 260.0;

/// Whether a posting is listed internally or to the public.
///
/// The raw dataset carries both variants of the same job opening; the dedupe
/// stage collapses them to one row per job identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostingType {
    Internal,
    External,
}

impl PostingType {
    /// Parse a raw cell value, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "internal" => Some(PostingType::Internal),
            "external" => Some(PostingType::External),
            _ => None,
        }
    }
}

/// Pay frequency of the advertised salary range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryFrequency {
    Annual,
    Hourly,
    Daily,
}

impl SalaryFrequency {
    /// Parse a raw cell value, ignoring case and surrounding whitespace.
    ///
    /// Values outside the enumerated set return `None`; the annualizer
    /// treats those as a data-quality problem rather than defaulting the
    /// multiplier.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "annual" => Some(SalaryFrequency::Annual),
            "hourly" => Some(SalaryFrequency::Hourly),
            "daily" => Some(SalaryFrequency::Daily),
            _ => None,
        }
    }

    /// Multiplier that converts a rate at this frequency to a yearly figure.
    pub fn annual_multiplier(self) -> f64 {
        match self {
            SalaryFrequency::Annual => 1.0,
            SalaryFrequency::Hourly => HOURS_PER_YEAR,
            SalaryFrequency::Daily => DAYS_PER_YEAR,
        }
    }
}
