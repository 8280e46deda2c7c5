use super::USER_PROFILE_KEY;
use crate::error::StorageError;
use crate::storage::{LocalStorage, read_json, write_json};
use crate::types::ComicId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reader preferences learned from interactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub favorite_tags: BTreeMap<String, u32>,
    #[serde(default)]
    pub viewed_comics: Vec<ComicId>,
    #[serde(default)]
    pub interaction_score: BTreeMap<ComicId, f64>,
}

impl Default for UserProfile {
    /// New readers start with a mild lean towards action manhwa.
    fn default() -> Self {
        Self {
            favorite_tags: BTreeMap::from([("Action".to_string(), 5), ("Manhwa".to_string(), 3)]),
            viewed_comics: Vec::new(),
            interaction_score: BTreeMap::new(),
        }
    }
}

impl UserProfile {
    pub fn tag_affinity(&self, tag: &str) -> u32 {
        self.favorite_tags.get(tag).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Click,
    View,
    Hover,
}

impl Interaction {
    pub fn weight(self) -> f64 {
        match self {
            Interaction::Click => 5.0,
            Interaction::View => 1.0,
            Interaction::Hover => 0.5,
        }
    }
}

pub struct ProfileStore<S> {
    storage: S,
    profile: UserProfile,
}

impl<S: LocalStorage> ProfileStore<S> {
    pub fn load(storage: S) -> Result<Self, StorageError> {
        let profile = read_json(&storage, USER_PROFILE_KEY)?.unwrap_or_default();
        Ok(Self { storage, profile })
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn learn(&mut self, comic: ComicId, interaction: Interaction) -> Result<(), StorageError> {
        *self.profile.interaction_score.entry(comic).or_insert(0.0) += interaction.weight();

        if interaction == Interaction::Click && !self.profile.viewed_comics.contains(&comic) {
            self.profile.viewed_comics.push(comic);
        }

        self.persist()
    }

    pub fn like_tag(&mut self, tag: &str) -> Result<(), StorageError> {
        *self.profile.favorite_tags.entry(tag.to_string()).or_insert(0) += 1;
        self.persist()
    }

    fn persist(&self) -> Result<(), StorageError> {
        write_json(&self.storage, USER_PROFILE_KEY, &self.profile)
    }
}
