//! Read-only boundary to the hosted comic data service.

use crate::error::ServiceError;
use crate::types::{Chapter, ChapterSummary, Comic, ComicId, SearchableRecord, Slug};

mod memory;

pub use memory::{CatalogFile, MemoryCatalog};

/// Page of results by `limit`/`offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
}

impl PageRequest {
    /// Zero-based page index.
    pub fn page(index: usize, per_page: usize) -> Self {
        Self {
            limit: per_page,
            offset: index.saturating_mul(per_page),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ComicOrder {
    /// Most recently updated first.
    #[default]
    Latest,
    /// Most viewed first.
    Views,
    /// Alphabetical by title.
    Title,
}

/// Queries the site issues against the data service.
///
/// Implementations are constructed once at startup and passed to whatever
/// needs them.
pub trait DataService {
    /// Full projection of the catalog for the search index.
    fn searchable_records(&self) -> Result<Vec<SearchableRecord>, ServiceError>;

    fn comics(&self, page: PageRequest, order: ComicOrder) -> Result<Vec<Comic>, ServiceError>;

    /// Case-insensitive substring match on title.
    fn search_titles(&self, needle: &str, limit: usize) -> Result<Vec<Comic>, ServiceError>;

    fn comic_by_slug(&self, slug: &Slug) -> Result<Option<Comic>, ServiceError>;

    /// Chapters of a comic in reading order (ascending id).
    fn chapters(&self, comic: ComicId) -> Result<Vec<ChapterSummary>, ServiceError>;

    fn chapter(&self, comic: &Slug, chapter: &Slug) -> Result<Option<Chapter>, ServiceError>;
}

/// Previous/next links for the chapter reader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterNeighbors {
    pub prev: Option<Slug>,
    pub next: Option<Slug>,
}

impl ChapterNeighbors {
    /// `chapters` must be in reading order. Unknown ids yield no neighbors.
    pub fn locate(chapters: &[ChapterSummary], current: u64) -> Self {
        let Some(index) = chapters.iter().position(|c| c.id == current) else {
            return Self::default();
        };

        Self {
            prev: index.checked_sub(1).map(|i| chapters[i].slug.clone()),
            next: chapters.get(index + 1).map(|c| c.slug.clone()),
        }
    }
}
