//! # Favourite hotel ids
//!
//! [`FavoriteSet`] is the pure value behind the favourites store: a set of
//! hotel-id strings with a single mutating operation, [`FavoriteSet::toggle`].
//! Toggling is self-inverse, so toggling the same id twice always restores the
//! original membership.
//!
//! The set serialises as a plain JSON array (`["12","42"]`). Ids are kept
//! sorted so the stored form is deterministic; order carries no meaning.
//! Duplicate ids in stored data collapse on load.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Set of favourite hotel ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: BTreeSet<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present.
    /// Returns whether the id is a favourite afterwards.
    pub fn toggle(&mut self, hotel_id: &str) -> bool {
        if self.ids.remove(hotel_id) {
            false
        } else {
            self.ids.insert(hotel_id.to_string());
            true
        }
    }

    pub fn contains(&self, hotel_id: &str) -> bool {
        self.ids.contains(hotel_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
