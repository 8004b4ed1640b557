//! Projection of binding rows into domain records

use thiserror::Error;
use unisearch_core::ontology::var;
use unisearch_core::{CourseMatch, DomainRecord, InstitutionMatch, SearchMode};
use unisearch_store::BindingRow;

/// A row lacked a variable the graph pattern always binds
///
/// This means the store's data no longer matches the ontology table, so it is
/// never defaulted over.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("missing required field {field}")]
    MissingField { field: String },
}

fn required(row: &BindingRow, variable: &str) -> Result<String, MappingError> {
    row.get(variable)
        .map(str::to_string)
        .ok_or_else(|| MappingError::MissingField {
            field: variable.to_string(),
        })
}

/// Map one university search row
pub fn map_university_row(row: &BindingRow) -> Result<InstitutionMatch, MappingError> {
    Ok(InstitutionMatch {
        code: required(row, var::INSTITUTION_CODE)?,
        name: required(row, var::INSTITUTION_NAME)?,
        grade: required(row, var::GRADE)?,
        course_code: required(row, var::COURSE_CODE)?,
        course_name: required(row, var::COURSE_NAME)?,
    })
}

/// Map one course search row
pub fn map_course_row(row: &BindingRow) -> Result<CourseMatch, MappingError> {
    Ok(CourseMatch {
        institution_name: required(row, var::INSTITUTION_NAME)?,
        course_name: required(row, var::COURSE_NAME)?,
        grade: required(row, var::GRADE)?,
        scientific_area: required(row, var::SCIENTIFIC_AREA)?,
        degree: required(row, var::DEGREE)?,
    })
}

/// Map a row for the given mode
pub fn map_row(mode: SearchMode, row: &BindingRow) -> Result<DomainRecord, MappingError> {
    match mode {
        SearchMode::University => map_university_row(row).map(DomainRecord::from),
        SearchMode::Course => map_course_row(row).map(DomainRecord::from),
    }
}
