//! Filter clauses derived from optional criteria fields

use crate::escape::{numeric_literal, string_literal};
use unisearch_core::ontology::var;
use unisearch_core::{CourseSearchCriteria, UniversitySearchCriteria};

/// How a bound variable is compared against a literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateKind {
    /// Case-insensitive substring match
    ContainsIgnoreCase,
    /// Case-insensitive substring match on the part of an IRI after `#`
    LocalNameContainsIgnoreCase,
    /// Case-insensitive exact match
    EqualsIgnoreCase,
    /// Numeric `<=`
    AtMost,
}

/// Right-hand side of a filter clause
#[derive(Debug, Clone, PartialEq)]
pub enum FilterLiteral {
    Text(String),
    Number(f64),
}

/// Ends the `edu:` namespace; everything after it is the local name
const LOCAL_NAME_SEPARATOR: &str = "#";

/// One `FILTER(...)` constraint on a single query variable
#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    pub variable: &'static str,
    pub kind: PredicateKind,
    pub literal: FilterLiteral,
}

impl FilterClause {
    fn text(variable: &'static str, kind: PredicateKind, value: &str) -> Self {
        Self {
            variable,
            kind,
            literal: FilterLiteral::Text(value.to_string()),
        }
    }

    fn at_most(variable: &'static str, value: f64) -> Self {
        Self {
            variable,
            kind: PredicateKind::AtMost,
            literal: FilterLiteral::Number(value),
        }
    }

    /// Render the clause as query text, escaping the literal
    pub fn render(&self) -> String {
        let literal = match &self.literal {
            FilterLiteral::Text(text) => string_literal(text),
            FilterLiteral::Number(n) => numeric_literal(*n),
        };
        let v = self.variable;
        match self.kind {
            PredicateKind::ContainsIgnoreCase => {
                format!("FILTER(CONTAINS(LCASE(STR(?{v})), LCASE({literal})))")
            }
            PredicateKind::LocalNameContainsIgnoreCase => {
                let separator = string_literal(LOCAL_NAME_SEPARATOR);
                format!(
                    "FILTER(CONTAINS(LCASE(STRAFTER(STR(?{v}), {separator})), LCASE({literal})))"
                )
            }
            PredicateKind::EqualsIgnoreCase => {
                format!("FILTER(LCASE(STR(?{v})) = LCASE({literal}))")
            }
            PredicateKind::AtMost => format!("FILTER(xsd:float(?{v}) <= {literal})"),
        }
    }
}

/// Filters for a university search, in `course, district, grade` order
///
/// The course is matched against the local name of the course-type IRI,
/// which is the `_`-joined identifier the validator produces. The namespace
/// is excluded so that text such as `education` cannot match every course.
pub fn university_filters(criteria: &UniversitySearchCriteria) -> Vec<FilterClause> {
    let mut filters = vec![FilterClause::text(
        var::COURSE_TYPE,
        PredicateKind::LocalNameContainsIgnoreCase,
        criteria.course(),
    )];
    if let Some(district) = criteria.district() {
        filters.push(FilterClause::text(
            var::DISTRICT_NAME,
            PredicateKind::ContainsIgnoreCase,
            district,
        ));
    }
    if let Some(grade) = criteria.grade() {
        filters.push(FilterClause::at_most(var::GRADE, grade));
    }
    filters
}

/// Filters for a course search, in `university, scientific area, grade` order
pub fn course_filters(criteria: &CourseSearchCriteria) -> Vec<FilterClause> {
    let mut filters = Vec::with_capacity(3);
    if let Some(university) = criteria.university() {
        filters.push(FilterClause::text(
            var::INSTITUTION_NAME,
            PredicateKind::EqualsIgnoreCase,
            university,
        ));
    }
    if let Some(area) = criteria.scientific_area() {
        filters.push(FilterClause::text(
            var::SCIENTIFIC_AREA,
            PredicateKind::ContainsIgnoreCase,
            area,
        ));
    }
    if let Some(grade) = criteria.grade() {
        filters.push(FilterClause::at_most(var::GRADE, grade));
    }
    filters
}
