use leptos::prelude::*;

use crate::components::backdrop::Backdrop;
use crate::components::hero::Hero;
use crate::components::how_it_works::HowItWorks;
use crate::components::navbar::Navbar;
use crate::components::quote_modal::QuoteModal;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <Backdrop>
                <Navbar />
                <Hero />
            </Backdrop>
            <HowItWorks />
            <QuoteModal />
        </div>
    }
}
