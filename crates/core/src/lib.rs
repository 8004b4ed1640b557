//! Core types for the admissions knowledge base search system
//!
//! This crate provides the foundational pieces shared by the query compiler,
//! the graph store client and the search service:
//!
//! - **Criteria**: raw and validated search criteria, plus the validators
//! - **Records**: domain records returned to callers
//! - **Ontology**: the canonical table of predicates and query variables
//! - **Configuration**: system configuration management
//! - **Error handling**: unified error types

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod config;
pub mod criteria;
pub mod error;
pub mod ontology;
pub mod records;

// Re-export main types for convenience
pub use config::{Config, GraphStoreConfig, ServerConfig};
pub use criteria::{
    validate_course_search, validate_university_search, CourseSearchCriteria, RawCourseSearch,
    RawGrade, RawUniversitySearch, SearchCriteria, SearchMode, UniversitySearchCriteria,
    ValidationError,
};
pub use error::{Error, Result, ResultExt};
pub use records::{CourseMatch, DomainRecord, InstitutionMatch};

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
