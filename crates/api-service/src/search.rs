//! Search orchestration: validate, compile, execute, map

use crate::error::SearchError;
use crate::mapper::{map_course_row, map_university_row, MappingError};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};
use unisearch_core::{
    validate_course_search, validate_university_search, CourseMatch, InstitutionMatch,
    RawCourseSearch, RawUniversitySearch,
};
use unisearch_query::{compile_course_query, compile_university_query, CompiledQuery};
use unisearch_store::{BindingRow, BindingRowSet, GraphStore};

/// Runs searches against one graph store
///
/// Holds no per-request state; concurrent searches share only the store client.
pub struct SearchService {
    store: Arc<dyn GraphStore>,
}

impl SearchService {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn GraphStore> {
        &self.store
    }

    /// Find institutions offering a course, optionally narrowed by district and grade
    pub async fn search_university(
        &self,
        raw: &RawUniversitySearch,
    ) -> Result<Vec<InstitutionMatch>, SearchError> {
        let start_time = Instant::now();

        let criteria = validate_university_search(raw).inspect_err(|e| {
            debug!("Rejected university search: {e}");
        })?;
        let query = compile_university_query(&criteria);
        let rows = self.execute(&query).await?;
        let records = map_all(&query, &rows, map_university_row)?;

        info!(
            "University search returned {} records in {}ms",
            records.len(),
            start_time.elapsed().as_millis()
        );
        Ok(records)
    }

    /// Find courses at a university or in a scientific area, optionally narrowed by grade
    pub async fn search_course(
        &self,
        raw: &RawCourseSearch,
    ) -> Result<Vec<CourseMatch>, SearchError> {
        let start_time = Instant::now();

        let criteria = validate_course_search(raw).inspect_err(|e| {
            debug!("Rejected course search: {e}");
        })?;
        let query = compile_course_query(&criteria);
        let rows = self.execute(&query).await?;
        let records = map_all(&query, &rows, map_course_row)?;

        info!(
            "Course search returned {} records in {}ms",
            records.len(),
            start_time.elapsed().as_millis()
        );
        Ok(records)
    }

    async fn execute(&self, query: &CompiledQuery) -> Result<BindingRowSet, SearchError> {
        debug!("Executing {} query:\n{}", query.mode(), query.text());

        self.store.select(query).await.map_err(|e| {
            error!(
                kind = ?e.kind(),
                "Graph store query failed: {e}\nQuery:\n{}",
                query.text()
            );
            SearchError::from(e)
        })
    }
}

/// Map every row, rejecting the whole result on the first bad row
fn map_all<T>(
    query: &CompiledQuery,
    rows: &[BindingRow],
    map: fn(&BindingRow) -> Result<T, MappingError>,
) -> Result<Vec<T>, SearchError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            map(row).map_err(|e| {
                error!(
                    target: "unisearch::schema_drift",
                    "Row {index} of {} search does not match the ontology: {e}\nQuery:\n{}",
                    query.mode(),
                    query.text()
                );
                SearchError::from(e)
            })
        })
        .collect()
}
