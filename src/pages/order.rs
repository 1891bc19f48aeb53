//! Confirmation page the wizard routes to after a booking is committed.

use leptos::prelude::*;

use crate::components::order_summary::OrderSummary;
use crate::modal_context::LastBooking;

#[component]
pub fn OrderPage() -> impl IntoView {
    let last_booking = expect_context::<LastBooking>();

    view! {
        <div class="page order-page">
            {move || match last_booking.0.get() {
                Some(request) => view! {
                    <h2>"Thanks, your quote request is in"</h2>
                    <p class="page-description">
                        "A nearby expert will pick up the job. Here is what you asked for:"
                    </p>
                    <OrderSummary request=request />
                    <a href="/" class="btn btn-primary">"Back to home"</a>
                }
                .into_any(),
                None => view! {
                    <h2>"No booking yet"</h2>
                    <p class="page-description">"Start a quote from the home page."</p>
                    <a href="/" class="btn btn-primary">"Go to home"</a>
                }
                .into_any(),
            }}
        </div>
    }
}
