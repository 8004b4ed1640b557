//! Fixed graph-pattern templates, one per search mode

use unisearch_core::ontology::{class, predicate, var};
use unisearch_core::SearchMode;

/// Subject or object position in a triple pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Var(&'static str),
    Iri(&'static str),
}

impl Term {
    fn render(&self) -> String {
        match self {
            Term::Var(name) => format!("?{name}"),
            Term::Iri(iri) => (*iri).to_string(),
        }
    }
}

/// A single `subject predicate object` pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triple {
    pub subject: Term,
    pub predicate: &'static str,
    pub object: Term,
}

impl Triple {
    pub(crate) fn render(&self) -> String {
        format!(
            "{} {} {} .",
            self.subject.render(),
            self.predicate,
            self.object.render()
        )
    }

    fn mentions(&self, variable: &str) -> bool {
        [self.subject, self.object]
            .iter()
            .any(|term| matches!(term, Term::Var(name) if *name == variable))
    }
}

/// The constant part of a query: projection plus graph pattern
#[derive(Debug)]
pub struct Template {
    pub mode: SearchMode,
    pub distinct: bool,
    pub projection: &'static [&'static str],
    pub pattern: &'static [Triple],
}

impl Template {
    /// Template for the given search mode
    pub fn for_mode(mode: SearchMode) -> &'static Template {
        match mode {
            SearchMode::University => &UNIVERSITY_TEMPLATE,
            SearchMode::Course => &COURSE_TEMPLATE,
        }
    }

    /// Whether the graph pattern binds `variable`
    pub fn binds(&self, variable: &str) -> bool {
        self.pattern.iter().any(|t| t.mentions(variable))
    }
}

const fn triple(subject: Term, predicate: &'static str, object: Term) -> Triple {
    Triple {
        subject,
        predicate,
        object,
    }
}

use Term::{Iri, Var};

/// institution → district, institution → course → course type
pub static UNIVERSITY_TEMPLATE: Template = Template {
    mode: SearchMode::University,
    distinct: false,
    projection: &[
        var::INSTITUTION_CODE,
        var::INSTITUTION_NAME,
        var::GRADE,
        var::COURSE_CODE,
        var::COURSE_NAME,
    ],
    pattern: &[
        triple(Var(var::INSTITUTION), predicate::RDF_TYPE, Iri(class::INSTITUTION)),
        triple(Var(var::INSTITUTION), predicate::INSTITUTION_CODE, Var(var::INSTITUTION_CODE)),
        triple(Var(var::INSTITUTION), predicate::INSTITUTION_NAME, Var(var::INSTITUTION_NAME)),
        triple(Var(var::INSTITUTION), predicate::LOCATED_IN_DISTRICT, Var(var::LOCATION)),
        triple(Var(var::INSTITUTION), predicate::HAS_COURSE, Var(var::COURSE)),
        triple(Var(var::LOCATION), predicate::DISTRICT_NAME, Var(var::DISTRICT_NAME)),
        triple(Var(var::COURSE), predicate::RDF_TYPE, Var(var::COURSE_TYPE)),
        triple(Var(var::COURSE), predicate::LAST_ADMITTED_GRADE, Var(var::GRADE)),
        triple(Var(var::COURSE_TYPE), predicate::COURSE_NAME, Var(var::COURSE_NAME)),
        triple(Var(var::COURSE_TYPE), predicate::COURSE_CODE, Var(var::COURSE_CODE)),
    ],
};

/// institution → course → course type → degree / scientific area
pub static COURSE_TEMPLATE: Template = Template {
    mode: SearchMode::Course,
    distinct: true,
    projection: &[
        var::INSTITUTION_NAME,
        var::COURSE_NAME,
        var::GRADE,
        var::SCIENTIFIC_AREA,
        var::DEGREE,
    ],
    pattern: &[
        triple(Var(var::INSTITUTION), predicate::RDF_TYPE, Iri(class::INSTITUTION)),
        triple(Var(var::INSTITUTION), predicate::INSTITUTION_NAME, Var(var::INSTITUTION_NAME)),
        triple(Var(var::INSTITUTION), predicate::HAS_COURSE, Var(var::COURSE)),
        triple(Var(var::COURSE), predicate::LAST_ADMITTED_GRADE, Var(var::GRADE)),
        triple(Var(var::COURSE), predicate::RDF_TYPE, Var(var::COURSE_TYPE)),
        triple(Var(var::COURSE_TYPE), predicate::COURSE_NAME, Var(var::COURSE_NAME)),
        triple(Var(var::COURSE_TYPE), predicate::AWARDS_DEGREE, Var(var::DEGREE_TYPE)),
        triple(Var(var::COURSE_TYPE), predicate::HAS_SCIENTIFIC_AREA, Var(var::AREA)),
        triple(Var(var::DEGREE_TYPE), predicate::DEGREE_NAME, Var(var::DEGREE)),
        triple(Var(var::AREA), predicate::SCIENTIFIC_AREA_NAME, Var(var::SCIENTIFIC_AREA)),
    ],
};
