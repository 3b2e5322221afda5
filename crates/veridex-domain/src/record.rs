//! Corpus records - immutable legal-authority data
//!
//! Records are owned exclusively by the corpus store, loaded once at
//! startup, and never mutated for the remainder of the process lifetime.

use serde::{Deserialize, Serialize};

/// A court decision with its holding and key principles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseLaw {
    /// Case name, e.g. "Hale v. Henkel"
    pub case_name: String,
    /// Reporter citation
    pub citation: String,
    /// Year decided
    #[serde(default)]
    pub year: u16,
    /// Jurisdiction tag ("supreme_court", "federal", "state", ...)
    #[serde(default)]
    pub jurisdiction: String,
    /// The holding text searched by the relevance engine
    #[serde(default)]
    pub holding: String,
    /// Remedy-type tags this case supports
    #[serde(default)]
    pub remedy_types: Vec<String>,
    /// Key legal principles established by the case
    #[serde(default)]
    pub key_principles: Vec<String>,
}

/// A statute or code section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statute {
    /// Statute name, e.g. "UCC 1-207 - Reservation of Rights"
    pub statute_name: String,
    /// Formal citation
    pub citation: String,
    /// Code family ("UCC", "USC", "CFR", "State")
    #[serde(default)]
    pub code_type: String,
    /// Section number within the code
    #[serde(default)]
    pub section: String,
    /// Statutory text searched by the relevance engine
    #[serde(default)]
    pub text: String,
    /// How the statute is typically applied
    #[serde(default)]
    pub application: String,
    /// Key provisions within the statute
    #[serde(default)]
    pub key_provisions: Vec<String>,
}

/// A constitutional article, section, or amendment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstitutionalProvision {
    /// Provision name, e.g. "Fourth Amendment - Unreasonable Searches"
    pub provision: String,
    /// Article or amendment number
    #[serde(default)]
    pub article: String,
    /// Section within the article
    #[serde(default)]
    pub section: String,
    /// Provision text searched by the relevance engine
    #[serde(default)]
    pub text: String,
    /// How the provision is typically applied
    #[serde(default)]
    pub application: String,
}

/// A model affidavit template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffidavitTemplate {
    /// Template title
    pub title: String,
    /// Template kind ("status_correction", "jurisdiction", ...)
    #[serde(default)]
    pub kind: String,
    /// What the affidavit accomplishes
    #[serde(default)]
    pub description: String,
    /// The template body with placeholder fields
    #[serde(default)]
    pub template_text: String,
    /// Elements the affidavit must contain to be effective
    #[serde(default)]
    pub required_elements: Vec<String>,
    /// Jurisdiction the template is written for
    #[serde(default)]
    pub jurisdiction: String,
    /// Usage guidance
    #[serde(default)]
    pub usage_notes: String,
}

/// One legal-authority record of any category
///
/// The uniform view the relevance engine scores against: every record
/// exposes a title, a citation, and a searchable body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum CorpusRecord {
    /// A court decision
    CaseLaw(CaseLaw),
    /// A statute or code section
    Statute(Statute),
    /// A constitutional provision
    Constitutional(ConstitutionalProvision),
    /// A model affidavit template
    Affidavit(AffidavitTemplate),
}

impl CorpusRecord {
    /// Title used for citation-bonus scoring
    pub fn title(&self) -> &str {
        match self {
            CorpusRecord::CaseLaw(c) => &c.case_name,
            CorpusRecord::Statute(s) => &s.statute_name,
            CorpusRecord::Constitutional(p) => &p.provision,
            CorpusRecord::Affidavit(a) => &a.title,
        }
    }

    /// Formal citation, where the category has one
    pub fn citation(&self) -> &str {
        match self {
            CorpusRecord::CaseLaw(c) => &c.citation,
            CorpusRecord::Statute(s) => &s.citation,
            CorpusRecord::Constitutional(p) => &p.provision,
            CorpusRecord::Affidavit(a) => &a.title,
        }
    }

    /// Jurisdiction tag used for filtering, where the category has one
    pub fn jurisdiction(&self) -> Option<&str> {
        match self {
            CorpusRecord::CaseLaw(c) => Some(&c.jurisdiction),
            CorpusRecord::Affidavit(a) => Some(&a.jurisdiction),
            _ => None,
        }
    }

    /// Remedy/category tags used for filtering
    pub fn remedy_types(&self) -> &[String] {
        match self {
            CorpusRecord::CaseLaw(c) => &c.remedy_types,
            _ => &[],
        }
    }

    /// Primary body text (the quote-extraction source)
    pub fn body(&self) -> &str {
        match self {
            CorpusRecord::CaseLaw(c) => &c.holding,
            CorpusRecord::Statute(s) => &s.text,
            CorpusRecord::Constitutional(p) => &p.text,
            CorpusRecord::Affidavit(a) => &a.template_text,
        }
    }

    /// Lowercased searchable text: body plus key principles/provisions
    pub fn searchable_text(&self) -> String {
        let mut text = String::from(self.body());
        let tags: &[String] = match self {
            CorpusRecord::CaseLaw(c) => &c.key_principles,
            CorpusRecord::Statute(s) => &s.key_provisions,
            _ => &[],
        };
        for tag in tags {
            text.push(' ');
            text.push_str(tag);
        }
        text.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_case() -> CorpusRecord {
        CorpusRecord::CaseLaw(CaseLaw {
            case_name: "Hale v. Henkel".to_string(),
            citation: "201 U.S. 43 (1906)".to_string(),
            year: 1906,
            jurisdiction: "supreme_court".to_string(),
            holding: "The individual may stand upon his constitutional rights.".to_string(),
            remedy_types: vec!["sovereignty".to_string()],
            key_principles: vec!["sovereign immunity".to_string()],
        })
    }

    #[test]
    fn test_searchable_text_includes_principles() {
        let record = sample_case();
        let text = record.searchable_text();
        assert!(text.contains("constitutional rights"));
        assert!(text.contains("sovereign immunity"));
        assert_eq!(text, text.to_lowercase());
    }

    #[test]
    fn test_record_with_empty_body_scores_nothing() {
        let record = CorpusRecord::Statute(Statute {
            statute_name: "Empty".to_string(),
            citation: "none".to_string(),
            code_type: String::new(),
            section: String::new(),
            text: String::new(),
            application: String::new(),
            key_provisions: Vec::new(),
        });
        assert!(record.searchable_text().is_empty());
    }
}
