//! Column renaming and pruning.

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::debug;

use jobs_model::ColumnMapping;

fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|col| col.as_str() == name)
}

/// Apply the old→new rename table.
///
/// Mapping keys without a matching column are ignored; columns without an
/// entry pass through unchanged. A rename that would collide with an
/// existing column name is an error.
pub fn rename_columns(df: &DataFrame, mapping: &ColumnMapping) -> Result<DataFrame> {
    let mut out = df.clone();
    let mut renamed = 0usize;
    for (old, new) in mapping.iter() {
        if !has_column(&out, old) {
            continue;
        }
        out.rename(old, new.into())
            .with_context(|| format!("rename column {old} -> {new}"))?;
        renamed += 1;
    }
    debug!(renamed, total = mapping.len(), "column mapping applied");
    Ok(out)
}

/// Remove the named columns. Dropping a name that is not present is a no-op,
/// so the prune stage stays idempotent.
pub fn drop_columns(df: &DataFrame, names: &[String]) -> Result<DataFrame> {
    let mut out = df.clone();
    for name in names {
        if !has_column(&out, name) {
            debug!(column = %name, "drop skipped, column not present");
            continue;
        }
        out = out
            .drop(name)
            .with_context(|| format!("drop column {name}"))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};
    use std::collections::BTreeMap;

    fn mapping(pairs: &[(&str, &str)]) -> ColumnMapping {
        let entries: BTreeMap<String, String> = pairs
            .iter()
            .map(|(old, new)| ((*old).to_string(), (*new).to_string()))
            .collect();
        ColumnMapping::new(entries)
    }

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("old_col1".into(), vec![1i64, 2]).into(),
            Series::new("old_col2".into(), vec!["a", "b"]).into(),
            Series::new("untouched".into(), vec![true, false]).into(),
        ])
        .unwrap()
    }

    #[test]
    fn renames_mapped_columns_and_passes_others_through() {
        let out = rename_columns(
            &frame(),
            &mapping(&[("old_col1", "new_col1"), ("old_col2", "new_col2")]),
        )
        .unwrap();
        let names: Vec<String> = out
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert!(names.contains(&"new_col1".to_string()));
        assert!(names.contains(&"new_col2".to_string()));
        assert!(names.contains(&"untouched".to_string()));
        assert!(!names.contains(&"old_col1".to_string()));
        assert!(!names.contains(&"old_col2".to_string()));
    }

    #[test]
    fn absent_mapping_keys_are_ignored() {
        let out = rename_columns(&frame(), &mapping(&[("missing", "renamed")])).unwrap();
        assert_eq!(out.width(), 3);
    }

    #[test]
    fn empty_mapping_twice_is_a_no_op() {
        let empty = mapping(&[]);
        let once = rename_columns(&frame(), &empty).unwrap();
        let twice = rename_columns(&once, &empty).unwrap();
        assert_eq!(twice.get_column_names(), frame().get_column_names());
    }

    #[test]
    fn drops_present_columns_only() {
        let df = DataFrame::new(vec![
            Series::new("id".into(), vec![1i64]).into(),
            Series::new("name".into(), vec!["a"]).into(),
            Series::new("title".into(), vec!["t"]).into(),
            Series::new("salary".into(), vec![10i64]).into(),
        ])
        .unwrap();
        let out =
            drop_columns(&df, &["title".to_string(), "salary".to_string()]).unwrap();
        assert_eq!(out.width(), 2);
        let names: Vec<String> = out
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["id", "name"]);

        // Re-dropping the now-absent names is a no-op.
        let again = drop_columns(&out, &["title".to_string()]).unwrap();
        assert_eq!(again.width(), 2);
    }
}
