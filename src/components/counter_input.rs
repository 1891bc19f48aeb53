use instaclean_booking::Counter;
use leptos::prelude::*;

#[component]
pub fn CounterInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<u32>,
    #[prop(into)] on_change: Callback<u32>,
) -> impl IntoView {
    let decrement = move |_| {
        let mut counter = Counter::new(value.get_untracked());
        on_change.run(counter.decrement());
    };
    let increment = move |_| {
        let mut counter = Counter::new(value.get_untracked());
        on_change.run(counter.increment());
    };

    view! {
        <div class="counter-row">
            <span class="counter-label">{label}</span>
            <div class="counter">
                <button
                    type="button"
                    class="counter-btn"
                    on:click=decrement
                    disabled=move || !Counter::new(value.get()).can_decrement()
                >
                    "-"
                </button>
                <span class="counter-value">{move || value.get()}</span>
                <button type="button" class="counter-btn" on:click=increment>
                    "+"
                </button>
            </div>
        </div>
    }
}
