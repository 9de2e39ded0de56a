use api::Hotel;
use dioxus::prelude::*;
use ui::{use_session, FavoriteButton};

/// All active hotels, each with a favourite toggle.
#[component]
pub fn Hotels() -> Element {
    let session = use_session();

    let hotels = use_resource(move || {
        let session = session.clone();
        async move {
            match session.client().list::<Hotel>().await {
                Ok(hotels) => Ok(hotels),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load hotels");
                    session.report_error(&e).await;
                    Err(e.to_string())
                }
            }
        }
    });

    let view = match &*hotels.read() {
        None => rsx! { p { class: "hotels__status", "Loading hotels..." } },
        Some(Err(message)) => rsx! { p { class: "hotels__status hotels__status--error", "{message}" } },
        Some(Ok(list)) => rsx! {
            ul {
                class: "hotels",
                for hotel in list.iter().filter(|h| h.is_active) {
                    HotelRow { key: "{hotel.id}", hotel: hotel.clone() }
                }
            }
        },
    };
    view
}

#[component]
pub(crate) fn HotelRow(hotel: Hotel) -> Element {
    let location = if hotel.city.is_empty() {
        hotel.location.clone()
    } else {
        hotel.city.clone()
    };
    let price = format!("{:.0} / night", hotel.price_per_night);

    rsx! {
        li {
            class: "hotel-row",
            div {
                class: "hotel-row__text",
                span { class: "hotel-row__name", "{hotel.name}" }
                span { class: "hotel-row__location", "{location}" }
                span { class: "hotel-row__price", "{price}" }
            }
            FavoriteButton { hotel_id: hotel.favorite_id() }
        }
    }
}
