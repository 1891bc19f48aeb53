use leptos::prelude::*;

const BACKGROUND_IMAGE: &str = "/assets/photos/hero.jpg";

/// Full-bleed photo with a dark overlay behind the navbar and hero.
#[component]
pub fn Backdrop(children: Children) -> impl IntoView {
    view! {
        <div
            class="backdrop"
            style:background-image=format!("url({})", BACKGROUND_IMAGE)
        >
            <div class="backdrop-overlay"></div>
            {children()}
        </div>
    }
}
