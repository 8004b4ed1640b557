//! Domain records produced from graph store results

use serde::{Deserialize, Serialize};

/// An institution offering a course that matched a university search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionMatch {
    pub code: String,
    pub name: String,
    /// Last admitted grade, as the literal the store returned
    pub grade: String,
    pub course_code: String,
    pub course_name: String,
}

/// A course that matched a course search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseMatch {
    pub institution_name: String,
    pub course_name: String,
    /// Last admitted grade, as the literal the store returned
    pub grade: String,
    pub scientific_area: String,
    pub degree: String,
}

impl InstitutionMatch {
    /// Grade parsed on demand; `None` if the store returned a non-numeric literal
    pub fn grade_value(&self) -> Option<f64> {
        self.grade.trim().parse().ok()
    }
}

impl CourseMatch {
    /// Grade parsed on demand; `None` if the store returned a non-numeric literal
    pub fn grade_value(&self) -> Option<f64> {
        self.grade.trim().parse().ok()
    }
}

/// A record of either search mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DomainRecord {
    Institution(InstitutionMatch),
    Course(CourseMatch),
}

impl From<InstitutionMatch> for DomainRecord {
    fn from(record: InstitutionMatch) -> Self {
        Self::Institution(record)
    }
}

impl From<CourseMatch> for DomainRecord {
    fn from(record: CourseMatch) -> Self {
        Self::Course(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_serialize_with_camel_case_keys() {
        let record = InstitutionMatch {
            code: "0300".into(),
            name: "Universidade de Coimbra".into(),
            grade: "140.5".into(),
            course_code: "9119".into(),
            course_name: "Engenharia Informática".into(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["courseCode"], "9119");
        assert_eq!(json["courseName"], "Engenharia Informática");
        assert_eq!(record.grade_value(), Some(140.5));
    }

    #[test]
    fn test_grade_value_keeps_unparseable_literal() {
        let record = CourseMatch {
            institution_name: "ISCTE".into(),
            course_name: "Gestão".into(),
            grade: "---".into(),
            scientific_area: "Ciências Empresariais".into(),
            degree: "Licenciatura".into(),
        };

        assert_eq!(record.grade_value(), None);
        assert_eq!(record.grade, "---");

        let json = serde_json::to_value(DomainRecord::from(record)).unwrap();
        assert_eq!(json["scientificArea"], "Ciências Empresariais");
    }
}
