use instaclean_booking::BookingRequest;
use leptos::prelude::*;

#[component]
pub fn OrderSummary(request: BookingRequest) -> impl IntoView {
    view! {
        <dl class="order-summary">
            {request
                .summary_lines()
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="summary-row">
                            <dt class="summary-label">{label}</dt>
                            <dd class="summary-value">{value}</dd>
                        </div>
                    }
                })
                .collect_view()}
        </dl>
    }
}
