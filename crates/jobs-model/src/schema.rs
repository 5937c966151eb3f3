//! Canonical column names for the cleaned postings table.
//!
//! The raw CSV carries the source headers ("Job ID", "Salary Range From",
//! ...); the map stage renames them to these snake_case names, and every
//! downstream transform addresses columns through these constants.

/// Number of columns in the raw postings CSV.
pub const RAW_COLUMN_COUNT: usize = 28;

pub const JOB_ID: &str = "job_id";
pub const AGENCY: &str = "agency";
pub const POSTING_TYPE: &str = "posting_type";
pub const NUMBER_OF_POSITIONS: &str = "number_of_positions";
pub const BUSINESS_TITLE: &str = "business_title";
pub const CIVIL_SERVICE_TITLE: &str = "civil_service_title";
pub const JOB_CATEGORY: &str = "job_category";
pub const SALARY_MIN_RANGE: &str = "salary_min_range";
pub const SALARY_MAX_RANGE: &str = "salary_max_range";
pub const SALARY_FREQUENCY: &str = "salary_frequency";
pub const JOB_DESCRIPTION: &str = "job_description";
pub const MIN_QUALIFY_REQUIREMENTS: &str = "min_qualify_requirements";
pub const PREFERRED_SKILLS: &str = "preferred_skills";
pub const POSTING_DATE: &str = "posting_date";
pub const POSTING_UPDATED: &str = "posting_updated";
pub const PROCESS_DATE: &str = "process_date";

// Derived by the pipeline.
pub const AVG_SALARY: &str = "avg_salary";
pub const ANNUALIZED_SALARY_MIN_RANGE: &str = "annualized_salary_min_range";
pub const ANNUALIZED_SALARY_MAX_RANGE: &str = "annualized_salary_max_range";
pub const ANNUALIZED_SALARY_AVG_RANGE: &str = "annualized_salary_avg_range";
pub const IS_DEGREE_REQ: &str = "is_degree_req";
