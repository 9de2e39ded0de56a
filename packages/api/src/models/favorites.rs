use serde::{Deserialize, Serialize};

/// Body for `POST /favorite_hotel`: the visitor's full favourite set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoritesPayload {
    pub favorites: Vec<String>,
}
