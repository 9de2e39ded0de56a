use api::Hotel;
use dioxus::prelude::*;
use ui::{use_favorites, use_session, FavoriteButton};

use super::hotels::HotelRow;

/// The visitor's favourite hotels. Ids whose hotel can no longer be fetched
/// are still listed so they can be removed.
#[component]
pub fn Favorites() -> Element {
    let session = use_session();
    let favorites = use_favorites();
    let ids = favorites.favorites();

    let hotels = use_resource(move || {
        let session = session.clone();
        async move {
            match session.client().list::<Hotel>().await {
                Ok(hotels) => hotels,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load hotels for favourites");
                    session.report_error(&e).await;
                    Vec::new()
                }
            }
        }
    });

    if ids.is_empty() {
        return rsx! {
            p { class: "favorites__empty", "No favourites yet. Tap the heart on a hotel to save it here." }
        };
    }

    let known = hotels.read().clone().unwrap_or_default();
    let rows: Vec<(String, Option<Hotel>)> = ids
        .into_iter()
        .map(|id| {
            let hotel = known.iter().find(|h| h.favorite_id() == id).cloned();
            (id, hotel)
        })
        .collect();

    rsx! {
        ul {
            class: "hotels",
            for (id, hotel) in rows {
                if let Some(hotel) = hotel {
                    HotelRow { key: "{id}", hotel }
                } else {
                    li {
                        key: "{id}",
                        class: "hotel-row hotel-row--missing",
                        span { class: "hotel-row__name", "Hotel #{id}" }
                        FavoriteButton { hotel_id: id.clone() }
                    }
                }
            }
        }
    }
}
