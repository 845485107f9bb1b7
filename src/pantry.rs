//! Pantry management service.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::store::{Ingredient, PantryStore, Unit};

/// Loads and saves pantry ingredients and their units.
pub struct Pantry {
    store: Arc<dyn PantryStore>,
}

impl Pantry {
    pub fn new(store: Arc<dyn PantryStore>) -> Self {
        Self { store }
    }

    pub async fn ingredients(&self) -> Result<Vec<Ingredient>> {
        let ingredients = self.store.load_ingredients().await?;
        info!(count = ingredients.len(), "ingredients loaded");
        Ok(ingredients)
    }

    pub async fn units(&self) -> Result<Vec<Unit>> {
        let units = self.store.load_units().await?;
        info!(count = units.len(), "units loaded");
        Ok(units)
    }

    pub async fn save_ingredient(&self, ingredient: &Ingredient) -> Result<Ingredient> {
        let saved = self.store.save_ingredient(ingredient).await?;
        info!(id = saved.id, name = %saved.name, "ingredient saved");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn lists_sample_ingredients_and_units() {
        let pantry = Pantry::new(Arc::new(MemoryStore::with_sample_data()));

        assert_eq!(pantry.ingredients().await.unwrap().len(), 2);
        assert_eq!(pantry.units().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn save_ingredient_roundtrip() {
        let pantry = Pantry::new(Arc::new(MemoryStore::new()));

        let ingredient = Ingredient {
            id: 1,
            name: "coconut milk".into(),
            unit: Unit {
                id: 1,
                name: "milliliter".into(),
            },
            amount: 400.0,
        };
        pantry.save_ingredient(&ingredient).await.unwrap();

        let ingredients = pantry.ingredients().await.unwrap();
        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].name, "coconut milk");
    }
}
