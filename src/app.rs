use instaclean_booking::SiteConfig;
use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::modal_context::{LastBooking, QuoteModalContext};
use crate::pages::home::HomePage;
use crate::pages::order::OrderPage;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_context(config);
    provide_context(QuoteModalContext::new());
    provide_context(LastBooking(RwSignal::new(None)));

    view! {
        <Router>
            <main class="site">
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/order") view=OrderPage />
                </Routes>
            </main>
        </Router>
    }
}
