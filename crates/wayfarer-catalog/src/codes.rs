//! Editorial product-code rankings per category.
//!
//! Ranking is positional, not scored: each category carries one ordered list
//! of partner product codes, and presentation slices it into "top picks" and
//! "more options" at a constant boundary. The boundary belongs to callers,
//! never to the data.

use std::collections::HashMap;

use crate::error::CatalogError;
use crate::ids::{CategorySlug, ProductCode};

/// How many tours the category page shows as "top picks".
pub const DEFAULT_TOP_PICKS: usize = 4;

/// How many tours follow under "more options".
pub const DEFAULT_MORE_OPTIONS: usize = 6;

/// Ordered product-code lists per category.
///
/// A code belongs to exactly one category; reuse across categories is an
/// authoring fault. An empty list is valid: newly added pillars wait for
/// content with zero codes.
#[derive(Debug, Clone)]
pub struct CodeBook {
    by_category: HashMap<CategorySlug, Vec<ProductCode>>,
    owner: HashMap<ProductCode, CategorySlug>,
}

impl CodeBook {
    /// Build the code book, enforcing uniqueness within and across
    /// categories.
    pub fn new(
        entries: impl IntoIterator<Item = (CategorySlug, Vec<ProductCode>)>,
    ) -> Result<Self, CatalogError> {
        let mut by_category: HashMap<CategorySlug, Vec<ProductCode>> = HashMap::new();
        let mut owner: HashMap<ProductCode, CategorySlug> = HashMap::new();

        for (category, codes) in entries {
            if by_category.contains_key(&category) {
                return Err(CatalogError::DuplicateCategory(category));
            }

            for code in &codes {
                match owner.get(code) {
                    Some(first) if *first == category => {
                        return Err(CatalogError::DuplicateRankedCode {
                            category,
                            code: code.clone(),
                        });
                    }
                    Some(first) => {
                        return Err(CatalogError::CodeInTwoCategories {
                            code: code.clone(),
                            first: first.clone(),
                            second: category,
                        });
                    }
                    None => {
                        owner.insert(code.clone(), category.clone());
                    }
                }
            }

            by_category.insert(category, codes);
        }

        Ok(Self { by_category, owner })
    }

    /// The full ordered code list for a category. Empty for unknown
    /// categories and for pillars awaiting content.
    pub fn codes_for(&self, category: &CategorySlug) -> &[ProductCode] {
        self.by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Which category ranks a code, if any.
    pub fn category_of(&self, code: &ProductCode) -> Option<&CategorySlug> {
        self.owner.get(code)
    }

    /// Total number of ranked codes across all categories.
    pub fn total_codes(&self) -> usize {
        self.owner.len()
    }
}
