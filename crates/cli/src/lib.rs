//! Library interface for the unisearch CLI
//!
//! Argument types and command bodies live here so integration tests can run
//! them without spawning the binary.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;
use unisearch_api_service::SearchService;
use unisearch_core::{
    validate_course_search, validate_university_search, RawCourseSearch, RawGrade,
    RawUniversitySearch,
};
use unisearch_query::{compile_course_query, compile_university_query};

// Re-export commonly needed types for tests
pub use unisearch_core::config::Config;

/// Criteria for a university search
#[derive(Args, Debug, Clone)]
pub struct UniversityArgs {
    /// Course name, e.g. "Engenharia Informática"
    #[arg(long)]
    pub course: String,

    /// District the institution is located in
    #[arg(long)]
    pub district: Option<String>,

    /// Candidate grade; only courses with a last admitted grade at or below it match
    #[arg(long)]
    pub grade: Option<String>,
}

/// Criteria for a course search
#[derive(Args, Debug, Clone)]
pub struct CourseArgs {
    /// Exact institution name
    #[arg(long)]
    pub university: Option<String>,

    /// Scientific area, matched by containment
    #[arg(long)]
    pub scientific_area: Option<String>,

    /// Candidate grade; only courses with a last admitted grade at or below it match
    #[arg(long)]
    pub grade: Option<String>,
}

impl From<&UniversityArgs> for RawUniversitySearch {
    fn from(args: &UniversityArgs) -> Self {
        RawUniversitySearch {
            course: Some(args.course.clone()),
            district: args.district.clone(),
            grade: args.grade.as_deref().map(RawGrade::from),
        }
    }
}

impl From<&CourseArgs> for RawCourseSearch {
    fn from(args: &CourseArgs) -> Self {
        RawCourseSearch {
            university: args.university.clone(),
            scientific_area: args.scientific_area.clone(),
            grade: args.grade.as_deref().map(RawGrade::from),
        }
    }
}

/// Load and validate configuration from `config_path` or the global file
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Compiled query text for a university search, without touching the network
pub fn explain_university(args: &UniversityArgs) -> Result<String> {
    let criteria = validate_university_search(&args.into())?;
    Ok(compile_university_query(&criteria).text().to_string())
}

/// Compiled query text for a course search, without touching the network
pub fn explain_course(args: &CourseArgs) -> Result<String> {
    let criteria = validate_course_search(&args.into())?;
    Ok(compile_course_query(&criteria).text().to_string())
}

/// Run a university search and render the records as pretty JSON
pub async fn search_university(service: &SearchService, args: &UniversityArgs) -> Result<String> {
    let records = service
        .search_university(&args.into())
        .await
        .context("University search failed")?;
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Run a course search and render the records as pretty JSON
pub async fn search_course(service: &SearchService, args: &CourseArgs) -> Result<String> {
    let records = service
        .search_course(&args.into())
        .await
        .context("Course search failed")?;
    Ok(serde_json::to_string_pretty(&records)?)
}
