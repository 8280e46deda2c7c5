//! Deterministic "for you" ranking.
//!
//! A comic is reduced to a [`FeatureVector`] against the reader's profile and
//! scored with a fixed [`WeightTable`]. There is no randomness, so the same
//! profile and catalog always produce the same ordering.

use crate::prefs::UserProfile;
use crate::types::{Comic, ComicStatus};
use chrono::{DateTime, Utc};
use std::cmp::Reverse;

/// Highest score a comic can receive.
pub const MAX_SCORE: u32 = 99;

/// Comics updated within this many days earn freshness.
const FRESHNESS_WINDOW_DAYS: f64 = 30.0;

const TAB_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    /// Sum of the reader's affinity for each of the comic's tags.
    pub tag_affinity: f64,
    /// Share of the catalog's top view count, in `[0, 1]`.
    pub popularity: f64,
    /// 1.0 for a comic updated now, falling linearly to 0.0 at the window edge.
    pub freshness: f64,
}

impl FeatureVector {
    pub fn extract(
        comic: &Comic,
        profile: &UserProfile,
        max_views: u64,
        now: DateTime<Utc>,
    ) -> Self {
        let tag_affinity = comic
            .tags
            .iter()
            .map(|tag| f64::from(profile.tag_affinity(tag)))
            .sum();

        let popularity = if max_views == 0 {
            0.0
        } else {
            comic.views.unwrap_or(0) as f64 / max_views as f64
        };

        let age_days = (now - comic.updated_at).num_seconds().max(0) as f64 / 86_400.0;
        let freshness = (1.0 - age_days / FRESHNESS_WINDOW_DAYS).clamp(0.0, 1.0);

        Self {
            tag_affinity,
            popularity,
            freshness,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTable {
    pub per_tag_point: f64,
    pub popularity: f64,
    pub freshness: f64,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            per_tag_point: 10.0,
            popularity: 15.0,
            freshness: 30.0,
        }
    }
}

impl WeightTable {
    pub fn score(&self, features: &FeatureVector) -> u32 {
        let raw = features.tag_affinity * self.per_tag_point
            + features.popularity * self.popularity
            + features.freshness * self.freshness;
        (raw.round().max(0.0) as u32).min(MAX_SCORE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchReason {
    StrongMatch,
    Trending,
    BecauseYouLike(String),
    RecentlyUpdated,
}

impl MatchReason {
    fn explain(score: u32, comic: &Comic, profile: &UserProfile) -> Self {
        if score > 80 {
            return MatchReason::StrongMatch;
        }
        if score > 60 {
            return MatchReason::Trending;
        }
        match comic.tags.iter().find(|tag| profile.tag_affinity(tag) > 5) {
            Some(tag) => MatchReason::BecauseYouLike(tag.clone()),
            None => MatchReason::RecentlyUpdated,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub comic: Comic,
    pub score: u32,
    pub reason: MatchReason,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    ForYou,
    Trending,
    Completed,
    HiddenGems,
}

pub struct Recommender {
    weights: WeightTable,
}

impl Recommender {
    pub fn new(weights: WeightTable) -> Self {
        Self { weights }
    }

    /// Scores every comic and orders them for `tab`.
    pub fn rank(
        &self,
        comics: &[Comic],
        profile: &UserProfile,
        tab: Tab,
        now: DateTime<Utc>,
    ) -> Vec<Recommendation> {
        let max_views = comics.iter().filter_map(|c| c.views).max().unwrap_or(0);

        let mut scored: Vec<Recommendation> = comics
            .iter()
            .map(|comic| {
                let features = FeatureVector::extract(comic, profile, max_views, now);
                let score = self.weights.score(&features);
                Recommendation {
                    reason: MatchReason::explain(score, comic, profile),
                    comic: comic.clone(),
                    score,
                }
            })
            .collect();

        match tab {
            Tab::ForYou => scored.sort_by_key(|r| Reverse(r.score)),
            Tab::Trending => {
                scored.sort_by_key(|r| Reverse(r.comic.updated_at));
                scored.truncate(TAB_LIMIT);
            }
            Tab::Completed => {
                scored.retain(|r| r.comic.status == Some(ComicStatus::Completed));
                scored.truncate(TAB_LIMIT);
            }
            Tab::HiddenGems => {
                let median = median_views(comics);
                scored.retain(|r| r.comic.views.unwrap_or(0) < median);
                scored.sort_by(|a, b| {
                    let a = a.comic.rating.unwrap_or(0.0);
                    let b = b.comic.rating.unwrap_or(0.0);
                    b.total_cmp(&a)
                });
            }
        }

        scored
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(WeightTable::default())
    }
}

fn median_views(comics: &[Comic]) -> u64 {
    let mut views: Vec<u64> = comics.iter().map(|c| c.views.unwrap_or(0)).collect();
    if views.is_empty() {
        return 0;
    }
    views.sort_unstable();
    views[views.len() / 2]
}

#[cfg(test)]
mod tests;
