//! Canonical ontology mapping for the admissions knowledge base
//!
//! This is the one table of prefixes, classes, predicates and query variables
//! that both the query compiler and the result mapper read from. Bump
//! [`ONTOLOGY_VERSION`] whenever a name here changes, since stores loaded with
//! an older export will stop binding the renamed variables.

/// Version of this mapping
pub const ONTOLOGY_VERSION: u32 = 1;

/// A prefix declaration rendered at the top of every query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix {
    pub label: &'static str,
    pub iri: &'static str,
}

pub const RDF: Prefix = Prefix {
    label: "rdf",
    iri: "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
};

pub const XSD: Prefix = Prefix {
    label: "xsd",
    iri: "http://www.w3.org/2001/XMLSchema#",
};

pub const EDU: Prefix = Prefix {
    label: "edu",
    iri: "http://example.org/education#",
};

/// All prefixes, in declaration order
pub const PREFIXES: [Prefix; 3] = [RDF, XSD, EDU];

/// Ontology classes
pub mod class {
    pub const INSTITUTION: &str = "edu:Institution";
}

/// Ontology predicates
pub mod predicate {
    pub const RDF_TYPE: &str = "rdf:type";
    pub const INSTITUTION_CODE: &str = "edu:institutionCode";
    pub const INSTITUTION_NAME: &str = "edu:institutionName";
    pub const LOCATED_IN_DISTRICT: &str = "edu:locatedInDistrict";
    pub const DISTRICT_NAME: &str = "edu:districtName";
    pub const HAS_COURSE: &str = "edu:hasCourse";
    pub const LAST_ADMITTED_GRADE: &str = "edu:lastAdmittedGrade";
    pub const COURSE_NAME: &str = "edu:courseName";
    pub const COURSE_CODE: &str = "edu:courseCode";
    pub const AWARDS_DEGREE: &str = "edu:awardsDegree";
    pub const DEGREE_NAME: &str = "edu:degreeName";
    pub const HAS_SCIENTIFIC_AREA: &str = "edu:hasScientificArea";
    pub const SCIENTIFIC_AREA_NAME: &str = "edu:scientificAreaName";
}

/// Query variable names (without the leading `?`)
pub mod var {
    pub const INSTITUTION: &str = "institution";
    pub const INSTITUTION_CODE: &str = "institutionCode";
    pub const INSTITUTION_NAME: &str = "institutionName";
    pub const LOCATION: &str = "location";
    pub const DISTRICT_NAME: &str = "districtName";
    pub const COURSE: &str = "course";
    pub const COURSE_TYPE: &str = "courseType";
    pub const COURSE_NAME: &str = "courseName";
    pub const COURSE_CODE: &str = "courseCode";
    pub const GRADE: &str = "grade";
    pub const DEGREE_TYPE: &str = "degreeType";
    pub const DEGREE: &str = "degree";
    pub const AREA: &str = "area";
    pub const SCIENTIFIC_AREA: &str = "scientificArea";
}
