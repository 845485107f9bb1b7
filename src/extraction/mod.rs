pub mod client;
pub mod error;
pub mod types;

pub use client::{ExtractionClient, Extractor};
pub use error::ExtractionError;
pub use types::{ExtractedRecipe, NutritionInfo};
