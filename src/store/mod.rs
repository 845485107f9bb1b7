//! Domain records and the persistence boundary.
//!
//! The storage layer is a collaborator, not part of this crate's core: the
//! sync pipeline consumes the [`SyncStore`] trait and assumes the
//! implementation serializes its own writes. [`memory::MemoryStore`] backs
//! the CLI and the test suite.

mod memory;

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::extraction::ExtractedRecipe;
use crate::sync::{JobStatus, SyncJob};

pub use memory::MemoryStore;

/// A recipe in the household cookbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub preparation_time_minutes: u32,
    pub cooking_time_minutes: u32,
    /// Path to the source document this recipe was captured from.
    /// `None` means the recipe is not eligible for metadata sync.
    pub source_document_path: Option<PathBuf>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Recipe {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            preparation_time_minutes: 0,
            cooking_time_minutes: 0,
            source_document_path: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Merge extracted metadata into this recipe in place.
    ///
    /// Only a non-empty extracted title overwrites the existing one;
    /// description and cook time always take the extracted values.
    /// `updated_at` is refreshed on every merge.
    pub fn merge_extracted(&mut self, extracted: &ExtractedRecipe) {
        if !extracted.title.is_empty() {
            self.title = extracted.title.clone();
        }
        self.description = extracted.description.clone();
        self.cooking_time_minutes = extracted.cook_time;
        self.updated_at = Some(Utc::now());
    }
}

/// A pantry ingredient, always measured in a [`Unit`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u64,
    pub name: String,
    pub unit: Unit,
    pub amount: f64,
}

/// A measurement unit (grams, pieces, tablespoons...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: u64,
    pub name: String,
}

/// Persistence operations consumed by the sync pipeline.
#[async_trait]
pub trait SyncStore: Send + Sync {
    /// Create a durable job record with the given initial status.
    async fn create_job(&self, status: JobStatus) -> Result<SyncJob>;

    /// Persist the job's current status and timestamps.
    async fn update_job(&self, job: &SyncJob) -> Result<SyncJob>;

    /// Look up a job by id.
    async fn get_job(&self, id: Uuid) -> Result<Option<SyncJob>>;

    /// Load the entire recipe corpus, unpaged. The pipeline intentionally
    /// processes every recipe per run.
    async fn load_all_recipes(&self) -> Result<Vec<Recipe>>;

    /// Insert or replace a recipe row.
    async fn upsert_recipe(&self, recipe: &Recipe) -> Result<Recipe>;
}

/// Persistence operations consumed by the recipe listing service.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Load one page of recipes, optionally filtered by a title search term.
    async fn list_recipes(
        &self,
        page: usize,
        page_size: usize,
        search_term: &str,
    ) -> Result<Vec<Recipe>>;
}

/// Persistence operations consumed by the pantry service.
#[async_trait]
pub trait PantryStore: Send + Sync {
    async fn load_ingredients(&self) -> Result<Vec<Ingredient>>;
    async fn load_units(&self) -> Result<Vec<Unit>>;
    async fn save_ingredient(&self, ingredient: &Ingredient) -> Result<Ingredient>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::NutritionInfo;

    fn extracted() -> ExtractedRecipe {
        ExtractedRecipe {
            title: "Extracted Title".into(),
            sub_title: String::new(),
            description: "Extracted description.".into(),
            cook_time: 35,
            nutrition_info: NutritionInfo::default(),
        }
    }

    #[test]
    fn merge_overwrites_description_and_cook_time() {
        let mut recipe = Recipe::new(1, "Original");
        recipe.description = "Old description.".into();
        recipe.cooking_time_minutes = 10;

        recipe.merge_extracted(&extracted());

        assert_eq!(recipe.title, "Extracted Title");
        assert_eq!(recipe.description, "Extracted description.");
        assert_eq!(recipe.cooking_time_minutes, 35);
        assert!(recipe.updated_at.is_some());
    }

    #[test]
    fn merge_keeps_title_when_extracted_title_is_empty() {
        let mut recipe = Recipe::new(2, "Keep Me");
        let mut details = extracted();
        details.title = String::new();

        recipe.merge_extracted(&details);

        assert_eq!(recipe.title, "Keep Me");
        assert_eq!(recipe.description, "Extracted description.");
    }

    #[test]
    fn merge_is_idempotent_excluding_timestamp() {
        let details = extracted();
        let base = Recipe::new(3, "Base");

        let mut once = base.clone();
        once.merge_extracted(&details);

        let mut twice = base.clone();
        twice.merge_extracted(&details);
        twice.merge_extracted(&details);

        assert_eq!(once.title, twice.title);
        assert_eq!(once.description, twice.description);
        assert_eq!(once.cooking_time_minutes, twice.cooking_time_minutes);
        assert_eq!(once.preparation_time_minutes, twice.preparation_time_minutes);
    }

    #[test]
    fn new_recipe_is_not_syncable() {
        let recipe = Recipe::new(4, "No Document");
        assert!(recipe.source_document_path.is_none());
        assert!(recipe.updated_at.is_none());
    }
}
