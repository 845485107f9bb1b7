//! In-memory store used by the CLI and the test suite.

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::sync::{JobStatus, SyncJob};

use super::{Ingredient, PantryStore, Recipe, RecipeStore, SyncStore, Unit};

/// Thread-safe in-memory implementation of every store trait.
///
/// Writes are serialized by the interior locks, which is all the sync
/// pipeline assumes of a store implementation.
pub struct MemoryStore {
    jobs: RwLock<HashMap<Uuid, SyncJob>>,
    recipes: RwLock<HashMap<u64, Recipe>>,
    ingredients: RwLock<HashMap<u64, Ingredient>>,
    units: RwLock<Vec<Unit>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
            recipes: RwLock::new(HashMap::new()),
            ingredients: RwLock::new(HashMap::new()),
            units: RwLock::new(Vec::new()),
        }
    }

    /// A store pre-populated with a small cookbook, for the CLI.
    pub fn with_sample_data() -> Self {
        let store = Self::new();
        {
            let mut recipes = store.recipes.write().unwrap_or_else(|e| e.into_inner());
            for (id, title, document) in [
                (1, "Feijoada", Some("data/recipes/feijoada.pdf")),
                (2, "Moqueca Baiana", Some("data/recipes/moqueca.pdf")),
                (3, "Pão de Queijo", Some("data/recipes/pao-de-queijo.pdf")),
                (4, "Grandma's Soup", None),
            ] {
                let mut recipe = Recipe::new(id, title);
                recipe.source_document_path = document.map(Into::into);
                recipes.insert(id, recipe);
            }
        }
        {
            let gram = Unit {
                id: 1,
                name: "gram".into(),
            };
            let piece = Unit {
                id: 2,
                name: "piece".into(),
            };
            let mut ingredients = store.ingredients.write().unwrap_or_else(|e| e.into_inner());
            ingredients.insert(
                1,
                Ingredient {
                    id: 1,
                    name: "black beans".into(),
                    unit: gram.clone(),
                    amount: 500.0,
                },
            );
            ingredients.insert(
                2,
                Ingredient {
                    id: 2,
                    name: "lime".into(),
                    unit: piece.clone(),
                    amount: 3.0,
                },
            );
            *store.units.write().unwrap_or_else(|e| e.into_inner()) = vec![gram, piece];
        }
        store
    }

    /// Insert a recipe directly, bypassing the trait. Test and seed helper.
    pub fn insert_recipe(&self, recipe: Recipe) {
        self.recipes
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(recipe.id, recipe);
    }

    /// Snapshot of a single recipe by id.
    pub fn recipe(&self, id: u64) -> Option<Recipe> {
        self.recipes
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
    }
}

#[async_trait]
impl SyncStore for MemoryStore {
    async fn create_job(&self, status: JobStatus) -> Result<SyncJob> {
        let job = SyncJob::new(status);
        self.jobs
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(job.id, job.clone());
        Ok(job)
    }

    async fn update_job(&self, job: &SyncJob) -> Result<SyncJob> {
        let mut updated = job.clone();
        updated.updated_at = Some(Utc::now());
        self.jobs
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(updated.id, updated.clone());
        Ok(updated)
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<SyncJob>> {
        Ok(self
            .jobs
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned())
    }

    async fn load_all_recipes(&self) -> Result<Vec<Recipe>> {
        let mut recipes: Vec<Recipe> = self
            .recipes
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect();
        recipes.sort_by_key(|r| r.id);
        Ok(recipes)
    }

    async fn upsert_recipe(&self, recipe: &Recipe) -> Result<Recipe> {
        self.recipes
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(recipe.id, recipe.clone());
        Ok(recipe.clone())
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn list_recipes(
        &self,
        page: usize,
        page_size: usize,
        search_term: &str,
    ) -> Result<Vec<Recipe>> {
        let needle = search_term.to_lowercase();
        let mut recipes: Vec<Recipe> = self
            .recipes
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .filter(|r| needle.is_empty() || r.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        recipes.sort_by_key(|r| r.id);

        let offset = page.saturating_sub(1).saturating_mul(page_size);
        Ok(recipes.into_iter().skip(offset).take(page_size).collect())
    }
}

#[async_trait]
impl PantryStore for MemoryStore {
    async fn load_ingredients(&self) -> Result<Vec<Ingredient>> {
        let mut ingredients: Vec<Ingredient> = self
            .ingredients
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect();
        ingredients.sort_by_key(|i| i.id);
        Ok(ingredients)
    }

    async fn load_units(&self) -> Result<Vec<Unit>> {
        Ok(self.units.read().unwrap_or_else(|e| e.into_inner()).clone())
    }

    async fn save_ingredient(&self, ingredient: &Ingredient) -> Result<Ingredient> {
        self.ingredients
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(ingredient.id, ingredient.clone());
        Ok(ingredient.clone())
    }
}
