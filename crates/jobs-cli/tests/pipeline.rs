//! End-to-end pipeline test over a synthetic postings fixture.

use std::fs;
use std::path::Path;

use jobs_cli::cli::RunArgs;
use jobs_cli::commands::run_pipeline;

fn write_fixture(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let input = dir.join("postings.csv");
    fs::write(
        &input,
        "Job ID,Agency,Posting Type,Business Title,Job Category,Salary Range From,Salary Range To,Salary Frequency,Minimum Qual Requirements,Posting Updated\n\
         87990,NYPD,Internal,SENIOR POLICE ANALYST,Public Safety,$42000,$65000,Annual,\"Bachelor's degree required, plus two years of experience.\",2019-12-01T00:00:00.000\n\
         87990,NYPD,External,SENIOR POLICE ANALYST,Public Safety,$42000,$65000,Annual,\"Bachelor's degree required, plus two years of experience.\",2019-12-08T00:00:00.000\n\
         96548,DOE,Internal,school aide,Education,$15.50,$22.75,Hourly,High school diploma.,2020-02-02T00:00:00.000\n\
         96548,DOE,External,school aide,Education,$15.50,$22.75,Hourly,High school diploma.,2020-01-01T00:00:00.000\n",
    )
    .expect("write fixture csv");

    let mapping = dir.join("mapping.json");
    fs::write(
        &mapping,
        r#"{
  "Job ID": "job_id",
  "Agency": "agency",
  "Posting Type": "posting_type",
  "Business Title": "business_title",
  "Job Category": "job_category",
  "Salary Range From": "salary_min_range",
  "Salary Range To": "salary_max_range",
  "Salary Frequency": "salary_frequency",
  "Minimum Qual Requirements": "min_qualify_requirements",
  "Posting Updated": "posting_updated"
}"#,
    )
    .expect("write mapping json");
    (input, mapping)
}

#[test]
fn full_pipeline_collapses_duplicates_and_exports() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (input, mapping) = write_fixture(dir.path());
    let output_dir = dir.path().join("out");

    let args = RunArgs {
        input,
        mapping,
        config: None,
        output_dir: Some(output_dir.clone()),
        dry_run: false,
        top: 5,
    };
    let result = run_pipeline(&args).expect("pipeline run");

    // One row per distinct job id, never more rows than went in.
    assert_eq!(result.raw_rows, 4);
    assert_eq!(result.final_rows, 2);
    assert_eq!(result.unknown_frequencies, 0);

    // Degree flag: the analyst posting requires a bachelor's, the aide does not.
    assert_eq!(result.analysis.degree.flagged, 1);
    assert_eq!(result.analysis.degree.total, 2);

    // Cleaned CSV on disk: header plus one line per surviving row.
    let output = result.output.expect("export path");
    assert_eq!(output, output_dir.join("job_postings_clean.csv"));
    let content = fs::read_to_string(&output).expect("read export");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1 + result.final_rows);
    let header = lines[0];
    assert!(header.contains("annualized_salary_min_range"));
    assert!(header.contains("annualized_salary_avg_range"));
    assert!(header.contains("is_degree_req"));

    // The hourly salary annualized at 2080 hours shows up in the export.
    assert!(content.contains("32240"));
    // Title casing applied to business titles.
    assert!(content.contains("Senior Police Analyst"));
    assert!(content.contains("School Aide"));
}

#[test]
fn dry_run_skips_the_export() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (input, mapping) = write_fixture(dir.path());

    let args = RunArgs {
        input,
        mapping,
        config: None,
        output_dir: Some(dir.path().join("out")),
        dry_run: true,
        top: 5,
    };
    let result = run_pipeline(&args).expect("pipeline run");
    assert!(result.output.is_none());
    assert_eq!(result.final_rows, 2);
    assert!(!dir.path().join("out").exists());
}

#[test]
fn missing_mapping_file_fails_before_transforming() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (input, _) = write_fixture(dir.path());

    let args = RunArgs {
        input,
        mapping: dir.path().join("absent.json"),
        config: None,
        output_dir: None,
        dry_run: true,
        top: 5,
    };
    let error = run_pipeline(&args).expect_err("should fail");
    assert!(format!("{error:#}").contains("column mapping"));
}
