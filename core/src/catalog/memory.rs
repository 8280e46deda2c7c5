use super::{ComicOrder, DataService, PageRequest};
use crate::error::ServiceError;
use crate::types::{Chapter, ChapterSummary, Comic, ComicId, SearchableRecord, Slug};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk catalog snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub comics: Vec<Comic>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// Data service over an in-memory snapshot of the catalog.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    comics: Vec<Comic>,
    chapters: Vec<Chapter>,
}

impl MemoryCatalog {
    pub fn new(comics: Vec<Comic>, chapters: Vec<Chapter>) -> Self {
        Self { comics, chapters }
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ServiceError> {
        let content = std::fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&content)?;
        tracing::debug!(
            comics = file.comics.len(),
            chapters = file.chapters.len(),
            path = %path.display(),
            "loaded catalog"
        );
        Ok(Self::new(file.comics, file.chapters))
    }

    pub fn all_comics(&self) -> &[Comic] {
        &self.comics
    }
}

impl DataService for MemoryCatalog {
    fn searchable_records(&self) -> Result<Vec<SearchableRecord>, ServiceError> {
        Ok(self.comics.iter().map(SearchableRecord::from).collect())
    }

    fn comics(&self, page: PageRequest, order: ComicOrder) -> Result<Vec<Comic>, ServiceError> {
        let mut sorted: Vec<&Comic> = self.comics.iter().collect();
        match order {
            ComicOrder::Latest => sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
            ComicOrder::Views => sorted.sort_by_key(|c| std::cmp::Reverse(c.views.unwrap_or(0))),
            ComicOrder::Title => sorted.sort_by_key(|c| c.title.to_lowercase()),
        }

        Ok(sorted
            .into_iter()
            .skip(page.offset)
            .take(page.limit)
            .cloned()
            .collect())
    }

    fn search_titles(&self, needle: &str, limit: usize) -> Result<Vec<Comic>, ServiceError> {
        let needle = needle.trim().to_lowercase();
        Ok(self
            .comics
            .iter()
            .filter(|c| c.title.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect())
    }

    fn comic_by_slug(&self, slug: &Slug) -> Result<Option<Comic>, ServiceError> {
        Ok(self.comics.iter().find(|c| &c.slug == slug).cloned())
    }

    fn chapters(&self, comic: ComicId) -> Result<Vec<ChapterSummary>, ServiceError> {
        let mut chapters: Vec<ChapterSummary> = self
            .chapters
            .iter()
            .filter(|c| c.comic_id == comic)
            .map(ChapterSummary::from)
            .collect();
        chapters.sort_by_key(|c| c.id);
        Ok(chapters)
    }

    fn chapter(&self, comic: &Slug, chapter: &Slug) -> Result<Option<Chapter>, ServiceError> {
        let Some(comic) = self.comics.iter().find(|c| &c.slug == comic) else {
            return Ok(None);
        };
        Ok(self
            .chapters
            .iter()
            .find(|c| c.comic_id == comic.id && &c.slug == chapter)
            .cloned())
    }
}
