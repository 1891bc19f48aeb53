use leptos::prelude::*;

use crate::modal_context::QuoteModalContext;

#[component]
pub fn BookButton() -> impl IntoView {
    let modal = expect_context::<QuoteModalContext>();

    view! {
        <button
            type="button"
            class="btn btn-primary btn-lg"
            on:click=move |_| {
                modal.open();
            }
        >
            "Get a Quote"
        </button>
    }
}
