//! Salary annualization.

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};
use tracing::warn;

use jobs_model::{SalaryFrequency, schema};

use crate::data_utils::{any_to_f64, any_to_string};
use crate::numeric::round2;

/// Outcome of [`annualize_salary`].
pub struct AnnualizedSalary {
    pub data: DataFrame,
    /// Rows whose non-empty frequency fell outside the enumerated set.
    pub unknown_frequencies: usize,
}

/// Add `avg_salary` and the three annualized salary columns.
///
/// The multiplier is fixed per frequency: Annual ×1, Hourly ×2080, Daily
/// ×260. A frequency outside that set (or an empty one) leaves the
/// annualized cells null — never a silent ×1 — and non-empty unknown values
/// are counted and logged as a data-quality warning.
pub fn annualize_salary(df: &DataFrame) -> Result<AnnualizedSalary> {
    let min_col = df
        .column(schema::SALARY_MIN_RANGE)
        .context("salary range column")?;
    let max_col = df
        .column(schema::SALARY_MAX_RANGE)
        .context("salary range column")?;
    let freq_col = df
        .column(schema::SALARY_FREQUENCY)
        .context("salary frequency column")?;

    let row_count = df.height();
    let mut avg = Vec::with_capacity(row_count);
    let mut annual_min = Vec::with_capacity(row_count);
    let mut annual_max = Vec::with_capacity(row_count);
    let mut annual_avg = Vec::with_capacity(row_count);
    let mut unknown = 0usize;

    for idx in 0..row_count {
        let min = any_to_f64(min_col.get(idx).unwrap_or(AnyValue::Null));
        let max = any_to_f64(max_col.get(idx).unwrap_or(AnyValue::Null));
        let freq_raw = any_to_string(freq_col.get(idx).unwrap_or(AnyValue::Null));

        let avg_value = match (min, max) {
            (Some(lo), Some(hi)) => Some(round2((lo + hi) / 2.0)),
            _ => None,
        };
        avg.push(avg_value);

        match SalaryFrequency::parse(&freq_raw) {
            Some(frequency) => {
                let multiplier = frequency.annual_multiplier();
                annual_min.push(min.map(|v| round2(v * multiplier)));
                annual_max.push(max.map(|v| round2(v * multiplier)));
                annual_avg.push(avg_value.map(|v| round2(v * multiplier)));
            }
            None => {
                if !freq_raw.trim().is_empty() {
                    unknown += 1;
                }
                annual_min.push(None);
                annual_max.push(None);
                annual_avg.push(None);
            }
        }
    }

    let mut data = df.clone();
    data.with_column(Series::new(schema::AVG_SALARY.into(), avg))?;
    data.with_column(Series::new(schema::ANNUALIZED_SALARY_MIN_RANGE.into(), annual_min))?;
    data.with_column(Series::new(schema::ANNUALIZED_SALARY_MAX_RANGE.into(), annual_max))?;
    data.with_column(Series::new(schema::ANNUALIZED_SALARY_AVG_RANGE.into(), annual_avg))?;

    if unknown > 0 {
        warn!(
            unknown_frequencies = unknown,
            "salary frequency outside Annual/Hourly/Daily; rows left unannualized"
        );
    }

    Ok(AnnualizedSalary {
        data,
        unknown_frequencies: unknown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(min: Vec<Option<f64>>, max: Vec<Option<f64>>, freq: Vec<&str>) -> DataFrame {
        DataFrame::new(vec![
            Series::new(schema::SALARY_MIN_RANGE.into(), min).into(),
            Series::new(schema::SALARY_MAX_RANGE.into(), max).into(),
            Series::new(schema::SALARY_FREQUENCY.into(), freq).into(),
        ])
        .unwrap()
    }

    #[test]
    fn applies_fixed_multipliers() {
        let df = frame(
            vec![Some(1000.0), Some(10.0), Some(100.0)],
            vec![Some(2000.0), Some(20.0), Some(200.0)],
            vec!["Annual", "Hourly", "Daily"],
        );
        let result = annualize_salary(&df).unwrap();
        assert_eq!(result.unknown_frequencies, 0);

        let annual_min = result
            .data
            .column(schema::ANNUALIZED_SALARY_MIN_RANGE)
            .unwrap()
            .f64()
            .unwrap();
        assert_eq!(annual_min.get(0), Some(1000.0));
        assert_eq!(annual_min.get(1), Some(20800.0));
        assert_eq!(annual_min.get(2), Some(26000.0));

        let annual_max = result
            .data
            .column(schema::ANNUALIZED_SALARY_MAX_RANGE)
            .unwrap()
            .f64()
            .unwrap();
        assert_eq!(annual_max.get(1), Some(41600.0));

        let avg = result.data.column(schema::AVG_SALARY).unwrap().f64().unwrap();
        assert_eq!(avg.get(0), Some(1500.0));
        let annual_avg = result
            .data
            .column(schema::ANNUALIZED_SALARY_AVG_RANGE)
            .unwrap()
            .f64()
            .unwrap();
        assert_eq!(annual_avg.get(1), Some(31200.0));
    }

    #[test]
    fn unknown_frequency_yields_null_not_identity() {
        let df = frame(
            vec![Some(500.0)],
            vec![Some(700.0)],
            vec!["Weekly"],
        );
        let result = annualize_salary(&df).unwrap();
        assert_eq!(result.unknown_frequencies, 1);

        let annual_min = result
            .data
            .column(schema::ANNUALIZED_SALARY_MIN_RANGE)
            .unwrap()
            .f64()
            .unwrap();
        assert_eq!(annual_min.get(0), None);
        // The plain average is still derived.
        let avg = result.data.column(schema::AVG_SALARY).unwrap().f64().unwrap();
        assert_eq!(avg.get(0), Some(600.0));
    }

    #[test]
    fn null_salary_cells_stay_null() {
        let df = frame(vec![None], vec![Some(700.0)], vec!["Annual"]);
        let result = annualize_salary(&df).unwrap();
        let avg = result.data.column(schema::AVG_SALARY).unwrap().f64().unwrap();
        assert_eq!(avg.get(0), None);
        let annual_max = result
            .data
            .column(schema::ANNUALIZED_SALARY_MAX_RANGE)
            .unwrap()
            .f64()
            .unwrap();
        assert_eq!(annual_max.get(0), Some(700.0));
    }
}
