//! Recipe browsing service.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::store::{Recipe, RecipeStore};

/// One page of the cookbook, together with the query that produced it.
#[derive(Debug, Clone)]
pub struct RecipePage {
    pub recipes: Vec<Recipe>,
    pub page: usize,
    pub page_size: usize,
    pub search_term: String,
}

/// Loads recipes for browsing. Mutations go through the sync pipeline, not
/// through here.
pub struct Chef {
    store: Arc<dyn RecipeStore>,
}

impl Chef {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    pub async fn recipes(
        &self,
        page: usize,
        page_size: usize,
        search_term: &str,
    ) -> Result<RecipePage> {
        let recipes = self.store.list_recipes(page, page_size, search_term).await?;
        info!(page, page_size, search_term, count = recipes.len(), "recipes loaded");

        Ok(RecipePage {
            recipes,
            page,
            page_size,
            search_term: search_term.to_string(),
        })
    }
}
