//! The corpus store: per-category loading with built-in fallback

use crate::builtin;
use crate::CorpusError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use veridex_domain::{AffidavitTemplate, CorpusRecord};

const CASE_LAW_FILE: &str = "case_law.json";
const STATUTES_FILE: &str = "statutes.json";
const CONSTITUTION_FILE: &str = "constitution.json";
const AFFIDAVITS_FILE: &str = "affidavits.json";

/// Read-only, immutable collection of legal-authority records
///
/// Loaded once at startup; safe to share across sessions without locking.
pub struct CorpusStore {
    cases: Vec<CorpusRecord>,
    statutes: Vec<CorpusRecord>,
    provisions: Vec<CorpusRecord>,
    affidavits: Vec<AffidavitTemplate>,
}

impl CorpusStore {
    /// Load the corpus from a directory of per-category JSON files
    ///
    /// Each category file holds a JSON array of records. A missing or
    /// unparseable file degrades to the built-in records for that
    /// category; loading never fails.
    pub fn load(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();

        let cases = load_category(dir, CASE_LAW_FILE, builtin::case_law)
            .into_iter()
            .map(CorpusRecord::CaseLaw)
            .collect::<Vec<_>>();
        let statutes = load_category(dir, STATUTES_FILE, builtin::statutes)
            .into_iter()
            .map(CorpusRecord::Statute)
            .collect::<Vec<_>>();
        let provisions = load_category(dir, CONSTITUTION_FILE, builtin::constitutional_provisions)
            .into_iter()
            .map(CorpusRecord::Constitutional)
            .collect::<Vec<_>>();
        let affidavits = load_category(dir, AFFIDAVITS_FILE, builtin::affidavits);

        let store = Self {
            cases,
            statutes,
            provisions,
            affidavits,
        };
        info!(
            cases = store.cases.len(),
            statutes = store.statutes.len(),
            provisions = store.provisions.len(),
            affidavits = store.affidavits.len(),
            "corpus loaded"
        );
        store
    }

    /// Build a store from the built-in fallback records only
    pub fn builtin() -> Self {
        Self {
            cases: builtin::case_law()
                .into_iter()
                .map(CorpusRecord::CaseLaw)
                .collect(),
            statutes: builtin::statutes()
                .into_iter()
                .map(CorpusRecord::Statute)
                .collect(),
            provisions: builtin::constitutional_provisions()
                .into_iter()
                .map(CorpusRecord::Constitutional)
                .collect(),
            affidavits: builtin::affidavits(),
        }
    }

    /// Case-law records in load order
    pub fn cases(&self) -> &[CorpusRecord] {
        &self.cases
    }

    /// Statute records in load order
    pub fn statutes(&self) -> &[CorpusRecord] {
        &self.statutes
    }

    /// Constitutional-provision records in load order
    pub fn provisions(&self) -> &[CorpusRecord] {
        &self.provisions
    }

    /// Model affidavit templates in load order
    pub fn affidavits(&self) -> &[AffidavitTemplate] {
        &self.affidavits
    }

    /// Total record count across all categories
    pub fn len(&self) -> usize {
        self.cases.len() + self.statutes.len() + self.provisions.len() + self.affidavits.len()
    }

    /// True when no records are loaded in any category
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn load_category<T: DeserializeOwned>(
    dir: &Path,
    file: &str,
    fallback: fn() -> Vec<T>,
) -> Vec<T> {
    match read_records(&dir.join(file)) {
        Ok(records) => records,
        Err(e) => {
            warn!(file, error = %e, "corpus category unavailable, using built-in records");
            fallback()
        }
    }
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CorpusError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_category_counts() {
        let store = CorpusStore::builtin();
        assert_eq!(store.cases().len(), 4);
        assert_eq!(store.statutes().len(), 4);
        assert_eq!(store.provisions().len(), 4);
        assert_eq!(store.affidavits().len(), 2);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_missing_directory_degrades_to_builtin() {
        let store = CorpusStore::load("/nonexistent/corpus/dir");
        assert_eq!(store.len(), CorpusStore::builtin().len());
    }
}
