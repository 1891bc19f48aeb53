//! Overlay dialog shell. Closes on Escape, on the close button, and on a
//! click outside the dialog. Stays mounted while hidden.

use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] description: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && is_open.get_untracked() {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div
            class="modal-overlay"
            class:open=move || is_open.get()
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |_| on_close.run(())
        >
            <div
                class="modal-dialog"
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <p class="modal-description">{move || description.get()}</p>
                    <button
                        type="button"
                        class="modal-close"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
