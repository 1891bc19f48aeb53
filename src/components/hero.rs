use instaclean_booking::{Service, SiteConfig};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::book_button::BookButton;

#[component]
pub fn Hero() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (services, set_services) = signal(Vec::<Service>::new());

    // Empty means nothing to show; no retry.
    Effect::new(move |_| {
        let config = config.clone();
        spawn_local(async move {
            set_services.set(api::list_services(config, None).await);
        });
    });

    view! {
        <section class="hero">
            <h1 class="hero-title">"Cleaning done right."</h1>
            <p class="hero-subtitle">
                "All of your Home, Office, Airbnb, and Post construction cleaning needs under one roof."
            </p>
            <Show when=move || !services.get().is_empty()>
                <ul class="service-list">
                    <For
                        each=move || services.get()
                        key=|service| service.id.clone()
                        children=|service| {
                            view! {
                                <li class="service-chip">
                                    <span class="service-name">{service.name}</span>
                                    <span class="service-price">{format!("${}", service.price)}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
            <div class="hero-actions">
                <BookButton />
                <button type="button" class="btn btn-ghost btn-lg">"Talk To Us"</button>
            </div>
        </section>
    }
}
