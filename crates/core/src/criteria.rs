//! Search criteria and their validation
//!
//! Raw criteria arrive straight from callers (request bodies, CLI flags) and
//! are loosely typed. The only way to obtain a [`UniversitySearchCriteria`] or
//! [`CourseSearchCriteria`] is through the validators in this module, so every
//! criteria value seen downstream is fully valid.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// The two supported search modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Find institutions and courses matching a course, district and grade
    University,
    /// Find courses matching a university or scientific area and grade
    Course,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::University => write!(f, "university"),
            Self::Course => write!(f, "course"),
        }
    }
}

/// Validation failures, rendered as short stable messages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("course required")]
    CourseRequired,

    #[error("university or scientific area required")]
    UniversityOrAreaRequired,

    #[error("grade must be numeric")]
    GradeNotNumeric { value: String },
}

/// A grade as supplied by the caller
///
/// Any JSON value is accepted here so that booleans, arrays and numbers
/// outside the `f64` range reach the validator instead of failing in serde.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawGrade {
    Number(f64),
    Text(String),
    Other(Value),
}

impl<'de> Deserialize<'de> for RawGrade {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => match n.as_f64() {
                Some(value) => Self::Number(value),
                // Out of range; the validator rejects the literal
                None => Self::Text(n.to_string()),
            },
            Value::String(text) => Self::Text(text),
            other => Self::Other(other),
        })
    }
}

impl From<&str> for RawGrade {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for RawGrade {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Unvalidated input for a university search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUniversitySearch {
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub grade: Option<RawGrade>,
}

/// Unvalidated input for a course search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCourseSearch {
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub scientific_area: Option<String>,
    #[serde(default)]
    pub grade: Option<RawGrade>,
}

/// Validated university search criteria
#[derive(Debug, Clone, PartialEq)]
pub struct UniversitySearchCriteria {
    course: String,
    district: Option<String>,
    grade: Option<f64>,
}

impl UniversitySearchCriteria {
    /// Course identifier, with whitespace runs already folded to `_`
    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    pub fn grade(&self) -> Option<f64> {
        self.grade
    }
}

/// Validated course search criteria
///
/// At least one of `university` and `scientific_area` is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSearchCriteria {
    university: Option<String>,
    scientific_area: Option<String>,
    grade: Option<f64>,
}

impl CourseSearchCriteria {
    pub fn university(&self) -> Option<&str> {
        self.university.as_deref()
    }

    pub fn scientific_area(&self) -> Option<&str> {
        self.scientific_area.as_deref()
    }

    pub fn grade(&self) -> Option<f64> {
        self.grade
    }
}

/// Validated criteria for either search mode
#[derive(Debug, Clone, PartialEq)]
pub enum SearchCriteria {
    University(UniversitySearchCriteria),
    Course(CourseSearchCriteria),
}

impl SearchCriteria {
    pub fn mode(&self) -> SearchMode {
        match self {
            Self::University(_) => SearchMode::University,
            Self::Course(_) => SearchMode::Course,
        }
    }
}

impl From<UniversitySearchCriteria> for SearchCriteria {
    fn from(criteria: UniversitySearchCriteria) -> Self {
        Self::University(criteria)
    }
}

impl From<CourseSearchCriteria> for SearchCriteria {
    fn from(criteria: CourseSearchCriteria) -> Self {
        Self::Course(criteria)
    }
}

/// Validate and normalize a university search
pub fn validate_university_search(
    raw: &RawUniversitySearch,
) -> Result<UniversitySearchCriteria, ValidationError> {
    let course = present(raw.course.as_deref())
        .map(|course| normalize_course(&course))
        .ok_or(ValidationError::CourseRequired)?;
    let district = present(raw.district.as_deref());
    let grade = parse_grade(raw.grade.as_ref())?;

    Ok(UniversitySearchCriteria {
        course,
        district,
        grade,
    })
}

/// Validate and normalize a course search
pub fn validate_course_search(
    raw: &RawCourseSearch,
) -> Result<CourseSearchCriteria, ValidationError> {
    let university = present(raw.university.as_deref());
    let scientific_area = present(raw.scientific_area.as_deref());
    if university.is_none() && scientific_area.is_none() {
        return Err(ValidationError::UniversityOrAreaRequired);
    }
    let grade = parse_grade(raw.grade.as_ref())?;

    Ok(CourseSearchCriteria {
        university,
        scientific_area,
        grade,
    })
}

impl TryFrom<&RawUniversitySearch> for UniversitySearchCriteria {
    type Error = ValidationError;

    fn try_from(raw: &RawUniversitySearch) -> Result<Self, Self::Error> {
        validate_university_search(raw)
    }
}

impl TryFrom<&RawCourseSearch> for CourseSearchCriteria {
    type Error = ValidationError;

    fn try_from(raw: &RawCourseSearch) -> Result<Self, Self::Error> {
        validate_course_search(raw)
    }
}

/// Trimmed value, or `None` when absent or blank
fn present(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Course identifiers in the ontology use `_` in place of spaces
fn normalize_course(course: &str) -> String {
    course.split_whitespace().collect::<Vec<_>>().join("_")
}

fn parse_grade(raw: Option<&RawGrade>) -> Result<Option<f64>, ValidationError> {
    let value = match raw {
        None => return Ok(None),
        Some(RawGrade::Number(n)) => *n,
        Some(RawGrade::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<f64>()
                .map_err(|_| ValidationError::GradeNotNumeric {
                    value: text.to_string(),
                })?
        }
        Some(RawGrade::Other(other)) => {
            return Err(ValidationError::GradeNotNumeric {
                value: other.to_string(),
            })
        }
    };

    if value.is_finite() {
        Ok(Some(value))
    } else {
        Err(ValidationError::GradeNotNumeric {
            value: value.to_string(),
        })
    }
}
