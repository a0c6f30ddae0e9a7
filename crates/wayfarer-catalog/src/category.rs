//! Pillar categories and the category registry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::ids::CategorySlug;

/// Metadata for one top-level marketing category ("pillar").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// URL slug, unique across the site.
    pub slug: CategorySlug,
    /// Display title for the pillar page and navigation.
    pub title: String,
    /// One-paragraph pitch shown at the top of the pillar page.
    pub blurb: String,
    /// Hero image URL, when one has been sourced.
    pub hero_image: Option<String>,
    /// Related-category links as authored. Directional: A linking to B does
    /// not imply B links back to A.
    pub related: Vec<CategorySlug>,
}

impl Category {
    /// Create a category with the required metadata.
    pub fn new(
        slug: impl Into<CategorySlug>,
        title: impl Into<String>,
        blurb: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            blurb: blurb.into(),
            hero_image: None,
            related: Vec::new(),
        }
    }

    /// Set the hero image URL.
    pub fn with_hero_image(mut self, url: impl Into<String>) -> Self {
        self.hero_image = Some(url.into());
        self
    }

    /// Set the related-category links, in display order.
    pub fn with_related(mut self, slugs: Vec<&str>) -> Self {
        self.related = slugs.into_iter().map(CategorySlug::from).collect();
        self
    }
}

/// The ordered pillar list, validated at load.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    ordered: Vec<Category>,
    index: HashMap<CategorySlug, usize>,
}

impl CategoryRegistry {
    /// Build the registry. Duplicate slugs and related-links pointing at
    /// categories that do not exist are authoring faults and fail the load.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut index = HashMap::new();
        for (position, category) in categories.iter().enumerate() {
            if index.insert(category.slug.clone(), position).is_some() {
                return Err(CatalogError::DuplicateCategory(category.slug.clone()));
            }
        }

        for category in &categories {
            for related in &category.related {
                if !index.contains_key(related) {
                    return Err(CatalogError::UnknownRelatedCategory {
                        category: category.slug.clone(),
                        related: related.clone(),
                    });
                }
            }
        }

        Ok(Self {
            ordered: categories,
            index,
        })
    }

    /// All categories in navigation order.
    pub fn categories(&self) -> &[Category] {
        &self.ordered
    }

    /// Look up a category by slug.
    pub fn get(&self, slug: &CategorySlug) -> Option<&Category> {
        self.index.get(slug).map(|&position| &self.ordered[position])
    }

    /// Whether a slug names a registered category.
    pub fn is_valid(&self, slug: &CategorySlug) -> bool {
        self.index.contains_key(slug)
    }

    /// Related categories in authored order. Empty when the slug is unknown
    /// or the category has no related links.
    pub fn related_categories(&self, slug: &CategorySlug) -> Vec<&Category> {
        let Some(category) = self.get(slug) else {
            return Vec::new();
        };
        // new() guarantees every related slug resolves.
        category
            .related
            .iter()
            .filter_map(|related| self.get(related))
            .collect()
    }
}
