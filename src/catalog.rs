//! Component catalog: the expected sections of a proposal and how to find them.
//!
//! The catalog is plain data. Adding, removing or reordering components
//! changes the table, never the detection code. Catalog order doubles as the
//! tie-break order when two variable components score equally on one page.

use crate::error::{Error, Result};
use crate::section::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A structural placement rule for a component that is found without text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedRule {
    /// Page index the component starts on (0-based)
    pub start_page: usize,

    /// Number of pages the component is known to occupy, if known
    pub page_span: Option<usize>,

    /// Whether the document must be long enough to hold the component
    pub required: bool,
}

impl FixedRule {
    /// A required component starting at `start_page` and spanning `span` pages.
    pub const fn span(start_page: usize, span: usize) -> Self {
        Self {
            start_page,
            page_span: Some(span),
            required: true,
        }
    }

    /// A component that starts at `start_page` if the document reaches it.
    pub const fn optional_at(start_page: usize) -> Self {
        Self {
            start_page,
            page_span: None,
            required: false,
        }
    }

    /// Pages claimed by this rule in a document of `page_count` pages.
    pub fn claimed(&self, page_count: usize) -> std::ops::Range<usize> {
        let end = self.start_page + self.page_span.unwrap_or(1);
        self.start_page.min(page_count)..end.min(page_count)
    }

    /// Minimum page count the rule demands (0 for optional rules).
    pub fn min_pages(&self) -> usize {
        if self.required {
            self.start_page + self.page_span.unwrap_or(1)
        } else {
            0
        }
    }
}

/// How a catalog entry is located in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Detection {
    /// Placed by document structure
    Fixed(FixedRule),
    /// Found by fuzzy-matching page headers against the name
    Variable,
}

/// One expected component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name, also used for matching and output naming
    pub name: String,

    /// Detection rule
    pub detection: Detection,
}

impl CatalogEntry {
    /// Create a fixed-position entry.
    pub fn fixed(name: impl Into<String>, rule: FixedRule) -> Self {
        Self {
            name: name.into(),
            detection: Detection::Fixed(rule),
        }
    }

    /// Create a text-matched entry.
    pub fn variable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detection: Detection::Variable,
        }
    }

    /// The fixed rule, if this entry has one.
    pub fn fixed_rule(&self) -> Option<&FixedRule> {
        match &self.detection {
            Detection::Fixed(rule) => Some(rule),
            Detection::Variable => None,
        }
    }

    /// Check if the entry is located by text.
    pub fn is_variable(&self) -> bool {
        matches!(self.detection, Detection::Variable)
    }
}

/// Components of a standard research proposal, in catalog order.
const PROPOSAL_COMPONENTS: &[(&str, Detection)] = &[
    ("Project Summary", Detection::Fixed(FixedRule::span(0, 1))),
    ("Project Description", Detection::Fixed(FixedRule::span(1, 15))),
    ("References Cited", Detection::Fixed(FixedRule::optional_at(16))),
    ("Data Management and Sharing Plan", Detection::Variable),
    ("Mentoring Plan", Detection::Variable),
    ("Project Personnel and Partner Organizations", Detection::Variable),
    ("Facilities, Equipment and Other Resources", Detection::Variable),
    ("Synergistic Activities", Detection::Variable),
];

/// An ordered, validated set of catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names and clashing fixed starts.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut names = HashSet::new();
        let mut fixed_starts = HashSet::new();

        for entry in &entries {
            let key = normalize(&entry.name);
            if key.is_empty() {
                return Err(Error::InvalidCatalog("empty component name".to_string()));
            }
            if !names.insert(key) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate component name '{}'",
                    entry.name
                )));
            }
            if let Some(rule) = entry.fixed_rule() {
                if rule.page_span == Some(0) {
                    return Err(Error::InvalidCatalog(format!(
                        "'{}' has a zero page span",
                        entry.name
                    )));
                }
                if !fixed_starts.insert(rule.start_page) {
                    return Err(Error::InvalidCatalog(format!(
                        "'{}' shares fixed start page {} with another component",
                        entry.name, rule.start_page
                    )));
                }
            }
        }

        Ok(Self { entries })
    }

    /// The built-in research-proposal catalog.
    pub fn proposal() -> Self {
        let entries = PROPOSAL_COMPONENTS
            .iter()
            .map(|(name, detection)| CatalogEntry {
                name: (*name).to_string(),
                detection: *detection,
            })
            .collect();
        // The static table is known to be valid.
        Self { entries }
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Fixed entries with their rules, in catalog order.
    pub fn fixed(&self) -> impl Iterator<Item = (&CatalogEntry, &FixedRule)> {
        self.entries
            .iter()
            .filter_map(|e| e.fixed_rule().map(|rule| (e, rule)))
    }

    /// Variable entries, in catalog order.
    pub fn variable(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|e| e.is_variable())
    }

    /// Look up an entry by exact name.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Minimum page count demanded by the required fixed rules.
    pub fn min_pages(&self) -> usize {
        self.fixed()
            .map(|(_, rule)| rule.min_pages())
            .max()
            .unwrap_or(0)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::proposal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposal_catalog_is_valid() {
        let catalog = Catalog::proposal();
        assert_eq!(catalog.len(), 8);
        assert!(Catalog::new(catalog.entries().to_vec()).is_ok());
    }

    #[test]
    fn test_proposal_min_pages() {
        assert_eq!(Catalog::proposal().min_pages(), 16);
    }

    #[test]
    fn test_fixed_and_variable_split() {
        let catalog = Catalog::proposal();
        let fixed: Vec<_> = catalog.fixed().map(|(e, _)| e.name.as_str()).collect();
        assert_eq!(
            fixed,
            ["Project Summary", "Project Description", "References Cited"]
        );
        assert_eq!(catalog.variable().count(), 5);
        assert_eq!(
            catalog.variable().next().map(|e| e.name.as_str()),
            Some("Data Management and Sharing Plan")
        );
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Catalog::new(vec![
            CatalogEntry::variable("Mentoring Plan"),
            CatalogEntry::variable("mentoring  plan"),
        ]);
        assert!(matches!(result, Err(Error::InvalidCatalog(_))));
    }

    #[test]
    fn test_clashing_fixed_starts_rejected() {
        let result = Catalog::new(vec![
            CatalogEntry::fixed("Cover", FixedRule::span(0, 1)),
            CatalogEntry::fixed("Abstract", FixedRule::optional_at(0)),
        ]);
        assert!(matches!(result, Err(Error::InvalidCatalog(_))));
    }

    #[test]
    fn test_zero_span_rejected() {
        let result = Catalog::new(vec![CatalogEntry::fixed("Cover", FixedRule::span(0, 0))]);
        assert!(matches!(result, Err(Error::InvalidCatalog(_))));
    }

    #[test]
    fn test_rule_claimed_pages() {
        let rule = FixedRule::span(1, 15);
        assert_eq!(rule.claimed(20), 1..16);
        assert_eq!(rule.claimed(10), 1..10);
        assert_eq!(rule.min_pages(), 16);

        let optional = FixedRule::optional_at(16);
        assert_eq!(optional.claimed(20), 16..17);
        assert_eq!(optional.claimed(16), 16..16);
        assert_eq!(optional.min_pages(), 0);
    }
}
