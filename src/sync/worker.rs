use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

use crate::extraction::{ExtractionError, Extractor};
use crate::store::Recipe;

/// Why a single recipe could not be synced. Item-level only: none of these
/// fail the job or the sibling workers.
#[derive(Debug, Error)]
pub enum SyncItemError {
    #[error("failed to read source document {path}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),
}

/// The single report every launched worker produces, success or not.
#[derive(Debug)]
pub enum Outcome {
    /// The recipe with extracted metadata merged in, ready to persist.
    Updated(Recipe),
    /// The recipe was left untouched.
    Failed { recipe_id: u64, error: SyncItemError },
}

/// Sync one recipe end-to-end: read its source document, call the extraction
/// service, merge the result into a copy of the recipe.
///
/// Returns exactly one [`Outcome`] on every path; the caller is responsible
/// for forwarding it to the collection channel. Never retries.
pub async fn sync_one(recipe: Recipe, extractor: &dyn Extractor) -> Outcome {
    let recipe_id = recipe.id;
    match run(recipe, extractor).await {
        Ok(updated) => Outcome::Updated(updated),
        Err(error) => {
            warn!(recipe_id, "recipe sync failed: {error}");
            Outcome::Failed { recipe_id, error }
        }
    }
}

async fn run(recipe: Recipe, extractor: &dyn Extractor) -> Result<Recipe, SyncItemError> {
    // Eligibility is checked at launch; an absent path here reads as an
    // unreadable document rather than panicking.
    let path = recipe.source_document_path.clone().unwrap_or_default();

    let document = tokio::fs::read(&path)
        .await
        .map_err(|source| SyncItemError::Document {
            path: path.clone(),
            source,
        })?;

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| format!("recipe-{}.pdf", recipe.id));

    let extracted = extractor.extract(document, &filename).await?;

    let mut updated = recipe;
    updated.merge_extracted(&extracted);
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use async_trait::async_trait;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::extraction::ExtractedRecipe;

    struct StubExtractor {
        response: fn() -> Result<ExtractedRecipe, ExtractionError>,
    }

    #[async_trait]
    impl Extractor for StubExtractor {
        async fn extract(
            &self,
            _document: Vec<u8>,
            _filename: &str,
        ) -> Result<ExtractedRecipe, ExtractionError> {
            (self.response)()
        }
    }

    fn recipe_with_document(id: u64, path: PathBuf) -> Recipe {
        let mut recipe = Recipe::new(id, "Pending Title");
        recipe.source_document_path = Some(path);
        recipe
    }

    #[tokio::test]
    async fn missing_document_yields_failed_outcome() {
        let extractor = StubExtractor {
            response: || Ok(ExtractedRecipe::default()),
        };
        let recipe = recipe_with_document(1, PathBuf::from("/does/not/exist.pdf"));

        let outcome = sync_one(recipe, &extractor).await;

        match outcome {
            Outcome::Failed { recipe_id, error } => {
                assert_eq!(recipe_id, 1);
                assert!(matches!(error, SyncItemError::Document { .. }));
            }
            Outcome::Updated(_) => panic!("expected failure for missing document"),
        }
    }

    #[tokio::test]
    async fn extraction_error_yields_failed_outcome() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"%PDF-1.4 stub").unwrap();

        let extractor = StubExtractor {
            response: || Err(ExtractionError::UnexpectedStatus { status: 500 }),
        };
        let recipe = recipe_with_document(2, file.path().to_path_buf());

        let outcome = sync_one(recipe, &extractor).await;

        match outcome {
            Outcome::Failed { recipe_id, error } => {
                assert_eq!(recipe_id, 2);
                assert!(matches!(
                    error,
                    SyncItemError::Extraction(ExtractionError::UnexpectedStatus { status: 500 })
                ));
            }
            Outcome::Updated(_) => panic!("expected extraction failure"),
        }
    }

    #[tokio::test]
    async fn success_merges_extracted_metadata_into_a_copy() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"%PDF-1.4 stub").unwrap();

        let extractor = StubExtractor {
            response: || {
                Ok(ExtractedRecipe {
                    title: "Synced Title".into(),
                    description: "Synced description.".into(),
                    cook_time: 55,
                    ..Default::default()
                })
            },
        };
        let recipe = recipe_with_document(3, file.path().to_path_buf());

        let outcome = sync_one(recipe, &extractor).await;

        match outcome {
            Outcome::Updated(updated) => {
                assert_eq!(updated.id, 3);
                assert_eq!(updated.title, "Synced Title");
                assert_eq!(updated.cooking_time_minutes, 55);
                assert!(updated.updated_at.is_some());
            }
            Outcome::Failed { error, .. } => panic!("expected success, got {error}"),
        }
    }
}
