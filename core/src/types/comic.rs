//! Catalog records as served by the data service.

use crate::types::Slug;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ComicId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComicStatus {
    Ongoing,
    Completed,
    Dropped,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comic {
    pub id: ComicId,
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub thumbnail: String,
    pub author: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub views: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: Option<ComicStatus>,
    pub description: Option<String>,
    pub rating: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: u64,
    pub title: String,
    pub slug: Slug,
    pub comic_id: ComicId,
    #[serde(default)]
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Chapter listing entry, without the image payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSummary {
    pub id: u64,
    pub slug: Slug,
    pub title: String,
}

impl From<&Chapter> for ChapterSummary {
    fn from(chapter: &Chapter) -> Self {
        Self {
            id: chapter.id,
            slug: chapter.slug.clone(),
            title: chapter.title.clone(),
        }
    }
}

/// Denormalized projection of a comic used by the search overlay.
///
/// Fetched once per search session and never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchableRecord {
    pub id: ComicId,
    pub title: String,
    pub slug: Slug,
    pub thumbnail: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Comic> for SearchableRecord {
    fn from(comic: &Comic) -> Self {
        Self {
            id: comic.id,
            title: comic.title.clone(),
            slug: comic.slug.clone(),
            thumbnail: comic.thumbnail.clone(),
            author: comic.author.clone(),
            description: comic.description.clone(),
            tags: comic.tags.clone(),
            updated_at: comic.updated_at,
        }
    }
}
