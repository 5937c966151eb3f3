//! Reporting over the cleaned postings table: CSV export and the fixed
//! analytical query set.

pub mod export;
pub mod queries;

pub use export::export_csv;
pub use queries::{
    DegreeShare, degree_requirement_share, highest_paid_postings, postings_per_category,
    postings_per_type, top_agencies_by_salary,
};
