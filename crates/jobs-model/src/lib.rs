pub mod config;
pub mod error;
pub mod mapping;
pub mod posting;
pub mod profile;
pub mod schema;

pub use config::PipelineConfig;
pub use error::{EtlError, Result};
pub use mapping::ColumnMapping;
pub use posting::{DAYS_PER_YEAR, HOURS_PER_YEAR, PostingType, SalaryFrequency};
pub use profile::ColumnProfile;
