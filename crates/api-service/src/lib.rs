//! Service layer for admissions search operations
//!
//! This crate contains the business logic for the two search modes,
//! providing a clean interface for the REST API server and the CLI.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod error;
pub mod mapper;
mod search;

pub use error::{failure_message, Fault, SearchError};
pub use mapper::{map_course_row, map_row, map_university_row, MappingError};
pub use search::SearchService;
