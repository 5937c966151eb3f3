//! Pure table transforms for the postings pipeline.
//!
//! Every function here takes a `DataFrame` reference and returns a new
//! frame; the input is never mutated. The stages compose in a fixed order in
//! the CLI orchestrator, but each stands alone for testing:
//!
//! - **text**: special-character stripping and title casing
//! - **numeric**: extraction of numbers embedded in formatted strings
//! - **datetime**: ISO 8601 parsing with row-level failure isolation
//! - **schema_ops**: column renaming and pruning
//! - **dedupe**: partition + order + take-first duplicate collapse
//! - **salary**: annualization onto a yearly scale
//! - **qualification**: keyword-based degree flagging

pub mod data_utils;
pub mod datetime;
pub mod dedupe;
pub mod numeric;
pub mod qualification;
pub mod salary;
pub mod schema_ops;
pub mod text;

pub use data_utils::{any_to_f64, any_to_string, any_to_string_for_output, format_numeric, parse_f64};
pub use datetime::{convert_to_datetime, parse_datetime};
pub use dedupe::deduplicate;
pub use numeric::{convert_to_decimal, convert_to_integer, extract_decimal, extract_integer};
pub use qualification::flag_degree_requirement;
pub use salary::{AnnualizedSalary, annualize_salary};
pub use schema_ops::{drop_columns, rename_columns};
pub use text::{remove_special_characters, strip_special_characters, title_case, to_title_case};
