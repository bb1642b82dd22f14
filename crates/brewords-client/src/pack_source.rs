//! Offline data source backed by a TOML content pack.

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use brewords_core::error::DataSourceError;
use brewords_core::model::{Category, FlashCard, GuessQuestion, UnscrambleQuestion};
use brewords_core::pack::{parse_pack, ContentPack, PackCategory};
use brewords_core::traits::DataSource;
use brewords_core::vocabulary::VocabularyWord;

/// Serves categories and game content from a parsed [`ContentPack`].
#[derive(Debug, Clone)]
pub struct PackSource {
    pack: ContentPack,
}

impl PackSource {
    pub fn new(pack: ContentPack) -> Self {
        Self { pack }
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(parse_pack(path)?))
    }

    pub fn pack(&self) -> &ContentPack {
        &self.pack
    }

    fn category(&self, id: &str) -> Result<&PackCategory, DataSourceError> {
        self.pack
            .category(id)
            .ok_or_else(|| DataSourceError::NotFound(format!("category {id}")))
    }
}

#[async_trait]
impl DataSource for PackSource {
    fn name(&self) -> &str {
        "pack"
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, DataSourceError> {
        Ok(self
            .pack
            .categories
            .iter()
            .map(|c| c.category.clone())
            .collect())
    }

    async fn fetch_flash_cards(
        &self,
        category_id: &str,
    ) -> Result<Vec<FlashCard>, DataSourceError> {
        Ok(self.category(category_id)?.flash_cards.clone())
    }

    async fn fetch_guess_questions(
        &self,
        category_id: &str,
    ) -> Result<Vec<GuessQuestion>, DataSourceError> {
        Ok(self.category(category_id)?.guess.clone())
    }

    async fn fetch_unscramble_questions(
        &self,
        category_id: &str,
    ) -> Result<Vec<UnscrambleQuestion>, DataSourceError> {
        Ok(self.category(category_id)?.unscramble.clone())
    }

    async fn fetch_vocabulary(&self) -> Result<Vec<VocabularyWord>, DataSourceError> {
        Ok(self.pack.vocabulary.clone())
    }
}
