//! The fixed analytical query set over the cleaned table.
//!
//! Each query is a lazy group-by/sort over the post-pipeline schema and
//! returns a small frame ready for display.

use anyhow::{Context, Result};
use polars::prelude::{
    DataFrame, IdxSize, IntoLazy, SortMultipleOptions, col,
};

use jobs_model::schema;

/// Agencies ranked by mean annualized average salary.
pub fn top_agencies_by_salary(df: &DataFrame, limit: usize) -> Result<DataFrame> {
    let out = df
        .clone()
        .lazy()
        .group_by([col(schema::AGENCY)])
        .agg([
            col(schema::ANNUALIZED_SALARY_AVG_RANGE)
                .mean()
                .alias("mean_annualized_salary"),
            col(schema::JOB_ID).count().alias("postings"),
        ])
        .sort(
            ["mean_annualized_salary"],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_nulls_last(true),
        )
        .limit(limit as IdxSize)
        .collect()
        .context("top agencies query")?;
    Ok(out)
}

/// Posting counts per job category, most common first.
pub fn postings_per_category(df: &DataFrame, limit: usize) -> Result<DataFrame> {
    let out = df
        .clone()
        .lazy()
        .group_by([col(schema::JOB_CATEGORY)])
        .agg([col(schema::JOB_ID).count().alias("postings")])
        .sort(
            ["postings"],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .limit(limit as IdxSize)
        .collect()
        .context("postings per category query")?;
    Ok(out)
}

/// Highest-paid postings by annualized maximum salary.
pub fn highest_paid_postings(df: &DataFrame, limit: usize) -> Result<DataFrame> {
    let out = df
        .clone()
        .lazy()
        .select([
            col(schema::JOB_ID),
            col(schema::BUSINESS_TITLE),
            col(schema::AGENCY),
            col(schema::ANNUALIZED_SALARY_MAX_RANGE),
        ])
        .sort(
            [schema::ANNUALIZED_SALARY_MAX_RANGE],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_nulls_last(true),
        )
        .limit(limit as IdxSize)
        .collect()
        .context("highest paid postings query")?;
    Ok(out)
}

/// Posting counts per posting type (post-dedup this shows which variant
/// survived per job).
pub fn postings_per_type(df: &DataFrame) -> Result<DataFrame> {
    let out = df
        .clone()
        .lazy()
        .group_by([col(schema::POSTING_TYPE)])
        .agg([col(schema::JOB_ID).count().alias("postings")])
        .sort(
            ["postings"],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .collect()
        .context("postings per type query")?;
    Ok(out)
}

/// How many postings require a degree.
#[derive(Debug, Clone, Copy)]
pub struct DegreeShare {
    pub flagged: usize,
    pub total: usize,
    pub ratio: f64,
}

pub fn degree_requirement_share(df: &DataFrame) -> Result<DegreeShare> {
    let flags = df
        .column(schema::IS_DEGREE_REQ)
        .context("degree flag column")?
        .i32()
        .context("degree flag column is not an integer column")?;
    let flagged = flags.into_iter().flatten().filter(|flag| *flag == 1).count();
    let total = df.height();
    let ratio = if total == 0 {
        0.0
    } else {
        flagged as f64 / total as f64
    };
    Ok(DegreeShare {
        flagged,
        total,
        ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    fn cleaned_frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new(schema::JOB_ID.into(), vec![1i64, 2, 3, 4]).into(),
            Series::new(schema::AGENCY.into(), vec!["NYPD", "NYPD", "DOE", "DOE"]).into(),
            Series::new(
                schema::JOB_CATEGORY.into(),
                vec!["Public Safety", "Public Safety", "Education", "Education"],
            )
            .into(),
            Series::new(
                schema::BUSINESS_TITLE.into(),
                vec!["Officer", "Sergeant", "Teacher", "Principal"],
            )
            .into(),
            Series::new(schema::POSTING_TYPE.into(), vec!["External", "Internal", "External", "External"]).into(),
            Series::new(
                schema::ANNUALIZED_SALARY_AVG_RANGE.into(),
                vec![Some(50000.0), Some(70000.0), Some(90000.0), None],
            )
            .into(),
            Series::new(
                schema::ANNUALIZED_SALARY_MAX_RANGE.into(),
                vec![Some(60000.0), Some(80000.0), Some(100000.0), None],
            )
            .into(),
            Series::new(schema::IS_DEGREE_REQ.into(), vec![0i32, 0, 1, 1]).into(),
        ])
        .unwrap()
    }

    #[test]
    fn ranks_agencies_by_mean_salary() {
        let out = top_agencies_by_salary(&cleaned_frame(), 10).unwrap();
        assert_eq!(out.height(), 2);
        let agencies = out.column(schema::AGENCY).unwrap().str().unwrap();
        // DOE mean 90000 (null skipped) beats NYPD mean 60000.
        assert_eq!(agencies.get(0), Some("DOE"));
        assert_eq!(agencies.get(1), Some("NYPD"));
    }

    #[test]
    fn highest_paid_sorts_nulls_last() {
        let out = highest_paid_postings(&cleaned_frame(), 4).unwrap();
        let max = out
            .column(schema::ANNUALIZED_SALARY_MAX_RANGE)
            .unwrap()
            .f64()
            .unwrap();
        assert_eq!(max.get(0), Some(100000.0));
        assert_eq!(max.get(3), None);
    }

    #[test]
    fn degree_share_counts_flags() {
        let share = degree_requirement_share(&cleaned_frame()).unwrap();
        assert_eq!(share.flagged, 2);
        assert_eq!(share.total, 4);
        assert!((share.ratio - 0.5).abs() < 1e-9);
    }

    #[test]
    fn category_counts_descend() {
        let out = postings_per_category(&cleaned_frame(), 1).unwrap();
        assert_eq!(out.height(), 1);
        let postings = out.column("postings").unwrap().u32().unwrap();
        assert_eq!(postings.get(0), Some(2));
    }
}
