//! ID and title lookup tables

use std::collections::HashMap;

use crate::error::ApiError;
use crate::graphql::wire::ProblemReference;

/// Lowercases and collapses whitespace so lookups ignore spacing and case.
pub fn normalize_title(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

// == Identifier Index ==
/// ID to slug and normalized title to slug, plus the catalog size they were
/// built against. Rebuilt wholesale, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierIndex {
    by_id: HashMap<u32, String>,
    by_title: HashMap<String, String>,
    total: usize,
}

impl IdentifierIndex {
    /// Builds both tables from a catalog listing taken at size `total`.
    pub fn from_references(
        references: impl IntoIterator<Item = ProblemReference>,
        total: usize,
    ) -> Result<Self, ApiError> {
        let mut index = Self {
            total,
            ..Self::default()
        };

        for reference in references {
            let id = reference.id.trim().parse::<u32>().map_err(|_| {
                ApiError::Validation(format!(
                    "invalid id string for {}: {}",
                    reference.title_slug, reference.id
                ))
            })?;
            index
                .by_title
                .insert(normalize_title(&reference.title), reference.title_slug.clone());
            index.by_id.insert(id, reference.title_slug);
        }

        Ok(index)
    }

    pub fn slug_for_id(&self, id: u32) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }

    pub fn slug_for_title(&self, title: &str) -> Option<&str> {
        self.by_title.get(&normalize_title(title)).map(String::as_str)
    }

    /// Catalog size observed when the index was built.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
