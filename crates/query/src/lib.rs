//! Criteria-to-SPARQL query compiler
//!
//! Turns validated search criteria into query text against the canonical
//! ontology: prefix declarations, a projection, the fixed graph pattern of the
//! search mode, one filter clause per present field and a row limit.
//! Compilation is pure and deterministic.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod escape;
pub mod filter;
pub mod template;

pub use filter::{FilterClause, FilterLiteral, PredicateKind};
pub use template::Template;

use std::fmt;
use std::fmt::Write as _;
use unisearch_core::ontology::PREFIXES;
use unisearch_core::{CourseSearchCriteria, SearchCriteria, SearchMode, UniversitySearchCriteria};

/// Maximum rows requested from the graph store per search
pub const ROW_LIMIT: usize = 10;

/// Compiled query text plus the structure it was rendered from
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    mode: SearchMode,
    filters: Vec<FilterClause>,
    text: String,
}

impl CompiledQuery {
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Filter clauses, in render order
    pub fn filters(&self) -> &[FilterClause] {
        &self.filters
    }

    /// Variables in the `SELECT` list
    pub fn projection(&self) -> &'static [&'static str] {
        Template::for_mode(self.mode).projection
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for CompiledQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Compile a university search
pub fn compile_university_query(criteria: &UniversitySearchCriteria) -> CompiledQuery {
    build(
        Template::for_mode(SearchMode::University),
        filter::university_filters(criteria),
    )
}

/// Compile a course search
pub fn compile_course_query(criteria: &CourseSearchCriteria) -> CompiledQuery {
    build(
        Template::for_mode(SearchMode::Course),
        filter::course_filters(criteria),
    )
}

/// Compile criteria of either mode
pub fn compile(criteria: &SearchCriteria) -> CompiledQuery {
    match criteria {
        SearchCriteria::University(c) => compile_university_query(c),
        SearchCriteria::Course(c) => compile_course_query(c),
    }
}

fn build(template: &'static Template, filters: Vec<FilterClause>) -> CompiledQuery {
    debug_assert!(filters.iter().all(|f| template.binds(f.variable)));

    let text = render(template, &filters);
    tracing::trace!(mode = %template.mode, filters = filters.len(), "Compiled query");

    CompiledQuery {
        mode: template.mode,
        filters,
        text,
    }
}

fn render(template: &Template, filters: &[FilterClause]) -> String {
    let mut text = String::new();

    // Writing into a String cannot fail
    for prefix in PREFIXES {
        let _ = writeln!(text, "PREFIX {}: <{}>", prefix.label, prefix.iri);
    }
    text.push('\n');

    let select = if template.distinct {
        "SELECT DISTINCT"
    } else {
        "SELECT"
    };
    let projection = template
        .projection
        .iter()
        .map(|v| format!("?{v}"))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(text, "{select} {projection}");

    text.push_str("WHERE {\n");
    for triple in template.pattern {
        let _ = writeln!(text, "  {}", triple.render());
    }
    for clause in filters {
        let _ = writeln!(text, "  {}", clause.render());
    }
    text.push_str("}\n");
    let _ = writeln!(text, "LIMIT {ROW_LIMIT}");

    text
}
