use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_regular_icons::FaHeart as FaHeartOutline;

use crate::auth::use_favorites;
use crate::icons::FaHeart;
use crate::Icon;

/// Heart toggle for one hotel. Works signed out; signed-in changes are
/// pushed to the backend in the background.
#[component]
pub fn FavoriteButton(
    hotel_id: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let favorites = use_favorites();
    let is_favorite = favorites.is_favorite(&hotel_id);

    let onclick = move |evt: MouseEvent| {
        evt.stop_propagation();
        let hotel_id = hotel_id.clone();
        async move {
            favorites.toggle(&hotel_id).await;
        }
    };

    let (modifier, title) = if is_favorite {
        ("favorite-btn--on", "Remove from favourites")
    } else {
        ("favorite-btn--off", "Add to favourites")
    };

    rsx! {
        button {
            class: "favorite-btn {modifier} {class}",
            title: title,
            disabled: !favorites.is_loaded(),
            onclick: onclick,
            if is_favorite {
                Icon { icon: FaHeart, width: 16, height: 16 }
            } else {
                Icon { icon: FaHeartOutline, width: 16, height: 16 }
            }
        }
    }
}
