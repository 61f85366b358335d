//! Fixed-position resolution: boundaries implied by document structure.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::model::Boundary;

/// Emit the boundaries of every fixed component without reading page text.
///
/// Fails with [`Error::Structure`] when the document is shorter than the
/// required fixed rules allow. Optional rules whose start page lies past
/// the end of the document are skipped.
pub fn resolve_fixed(page_count: usize, catalog: &Catalog) -> Result<Vec<Boundary>> {
    let required = catalog.min_pages();
    if page_count < required {
        return Err(Error::Structure {
            required,
            actual: page_count,
        });
    }

    let boundaries = catalog
        .fixed()
        .filter_map(|(entry, rule)| {
            if rule.start_page < page_count {
                Some(Boundary::fixed(entry.name.clone(), rule.start_page))
            } else {
                log::debug!(
                    "'{}' would start on page {} but the document has {} pages",
                    entry.name,
                    rule.start_page + 1,
                    page_count
                );
                None
            }
        })
        .collect();

    Ok(boundaries)
}

/// Mark the pages covered by fixed rules.
///
/// The returned vector has one flag per page; `true` pages are never
/// scanned for variable components.
pub fn claimed_pages(catalog: &Catalog, page_count: usize) -> Vec<bool> {
    let mut claimed = vec![false; page_count];
    for (_, rule) in catalog.fixed() {
        for page in rule.claimed(page_count) {
            claimed[page] = true;
        }
    }
    claimed
}

/// First page after every fixed claim; variable scanning starts here.
pub fn scan_start(catalog: &Catalog, page_count: usize) -> usize {
    catalog
        .fixed()
        .map(|(_, rule)| rule.claimed(page_count).end)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntry, FixedRule};

    #[test]
    fn test_proposal_fixed_boundaries() {
        let boundaries = resolve_fixed(20, &Catalog::proposal()).unwrap();
        let starts: Vec<_> = boundaries
            .iter()
            .map(|b| (b.component_name.as_str(), b.start_page))
            .collect();
        assert_eq!(
            starts,
            [
                ("Project Summary", 0),
                ("Project Description", 1),
                ("References Cited", 16)
            ]
        );
        assert!(boundaries.iter().all(|b| b.is_fixed()));
    }

    #[test]
    fn test_optional_rule_skipped_when_document_ends() {
        let boundaries = resolve_fixed(16, &Catalog::proposal()).unwrap();
        assert_eq!(boundaries.len(), 2);
        assert!(boundaries
            .iter()
            .all(|b| b.component_name != "References Cited"));
    }

    #[test]
    fn test_short_document_is_structural_error() {
        let result = resolve_fixed(3, &Catalog::proposal());
        assert!(matches!(
            result,
            Err(Error::Structure {
                required: 16,
                actual: 3
            })
        ));
        assert!(resolve_fixed(0, &Catalog::proposal()).is_err());
    }

    #[test]
    fn test_claimed_pages_and_scan_start() {
        let catalog = Catalog::proposal();
        let claimed = claimed_pages(&catalog, 20);
        assert!(claimed[..17].iter().all(|&c| c));
        assert!(claimed[17..].iter().all(|&c| !c));
        assert_eq!(scan_start(&catalog, 20), 17);
        assert_eq!(scan_start(&catalog, 16), 16);
    }

    #[test]
    fn test_no_fixed_rules() {
        let catalog = Catalog::new(vec![CatalogEntry::variable("Mentoring Plan")]).unwrap();
        assert!(resolve_fixed(0, &catalog).unwrap().is_empty());
        assert_eq!(scan_start(&catalog, 4), 0);
        assert_eq!(claimed_pages(&catalog, 4), vec![false; 4]);
    }

    #[test]
    fn test_gap_between_fixed_rules_is_claimed_only_where_covered() {
        let catalog = Catalog::new(vec![
            CatalogEntry::fixed("Cover", FixedRule::span(0, 1)),
            CatalogEntry::fixed("Appendix", FixedRule::optional_at(5)),
        ])
        .unwrap();
        let claimed = claimed_pages(&catalog, 8);
        assert_eq!(
            claimed,
            vec![true, false, false, false, false, true, false, false]
        );
        assert_eq!(scan_start(&catalog, 8), 6);
    }
}
