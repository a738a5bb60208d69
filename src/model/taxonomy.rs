use super::ResourceSystem;
use serde::Serialize;

/// A taxonomy group with its term tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxonomyGroup {
    pub system: ResourceSystem,
    pub terms: Vec<TaxonomyTerm>,
}

impl TaxonomyGroup {
    pub fn codename(&self) -> &str {
        &self.system.codename
    }

    /// Depth-first search through the whole term tree.
    pub fn find_term(&self, codename: &str) -> Option<&TaxonomyTerm> {
        fn search<'a>(terms: &'a [TaxonomyTerm], codename: &str) -> Option<&'a TaxonomyTerm> {
            terms.iter().find_map(|term| {
                if term.codename == codename {
                    Some(term)
                } else {
                    search(&term.terms, codename)
                }
            })
        }
        search(&self.terms, codename)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxonomyTerm {
    pub name: String,
    pub codename: String,
    pub terms: Vec<TaxonomyTerm>,
}
