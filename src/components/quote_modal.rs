//! The quote wizard, hosted in a modal.
//!
//! Widget values live in `form`; the wizard only sees them on "Next", when
//! the current step is validated and merged into its draft.

use instaclean_booking::{Advance, SiteConfig, Step, SubmitMode, ValidationErrors, Wizard};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use tracing::warn;

use crate::api;
use crate::components::address_form::AddressForm;
use crate::components::details_step::DetailsStep;
use crate::components::modal::Modal;
use crate::components::order_summary::OrderSummary;
use crate::components::schedule_step::ScheduleStep;
use crate::components::service_type_picker::ServiceTypePicker;
use crate::form::{default_form, today};
use crate::modal_context::{LastBooking, QuoteModalContext};

#[component]
pub fn QuoteModal() -> impl IntoView {
    let modal = expect_context::<QuoteModalContext>();
    let config = expect_context::<SiteConfig>();
    let last_booking = expect_context::<LastBooking>();
    let navigate = use_navigate();

    let mode = config.submit_mode;
    let wizard = RwSignal::new(Wizard::new(mode));
    let form = RwSignal::new(default_form(today()));
    let errors = RwSignal::new(ValidationErrors::new());

    let step = Memo::new(move |_| wizard.with(|w| w.step()));
    let summary = Memo::new(move |_| wizard.with(|w| w.pending_summary().cloned()));
    let service = Memo::new(move |_| wizard.with(|w| w.draft().service_type()));

    let close = move || {
        modal.close();
        wizard.update(Wizard::reset);
        form.set(default_form(today()));
        errors.set(ValidationErrors::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = form.get_untracked();
        let Some(outcome) = wizard.try_update(|w| w.advance(&input, today())) else {
            return;
        };
        match outcome {
            Ok(Advance::Submitted(request)) => {
                if let Err(e) = api::submit_booking(&request) {
                    warn!("Could not record booking: {}", e);
                }
                last_booking.0.set(Some(request));
                close();
                navigate("/order", Default::default());
            }
            Ok(_) => errors.set(ValidationErrors::new()),
            Err(e) => errors.set(e),
        }
    };

    let go_back = move |_| {
        wizard.update(|w| {
            w.retreat();
        });
        errors.set(ValidationErrors::new());
    };

    let title = Signal::derive(move || match summary.get() {
        Some(_) => "Review your order".to_string(),
        None => step.get().title().to_string(),
    });
    let description = Signal::derive(move || match summary.get() {
        Some(_) => "Check the details below, then request your quote.".to_string(),
        None => step.get().description().to_string(),
    });

    let submit_label = move || match (step.get(), summary.get()) {
        (_, Some(_)) => "Request Quote",
        (Step::Address, None) if mode == SubmitMode::ConfirmSummary => "Review Order",
        (Step::Address, None) => "Request Quote",
        _ => "Next",
    };

    let body = move || match (step.get(), summary.get()) {
        (_, Some(request)) => view! { <OrderSummary request=request /> }.into_any(),
        (Step::ServiceType, None) => {
            view! { <ServiceTypePicker form=form errors=errors /> }.into_any()
        }
        (Step::Details, None) => {
            view! { <DetailsStep service=service.get() form=form errors=errors /> }.into_any()
        }
        (Step::Schedule, None) => {
            view! { <ScheduleStep wizard=wizard form=form errors=errors /> }.into_any()
        }
        (Step::Address, None) => view! { <AddressForm form=form errors=errors /> }.into_any(),
    };

    view! {
        <Modal
            is_open=modal.is_open
            title=title
            description=description
            on_close=move |_| close()
        >
            <form class="quote-form" on:submit=on_submit novalidate>
                <p class="step-indicator">
                    {move || format!("Step {} of {}", step.get().index(), Step::COUNT)}
                </p>
                {body}
                <div class="form-actions">
                    <Show when=move || step.get() != Step::ServiceType || summary.get().is_some()>
                        <button type="button" class="btn btn-ghost" on:click=go_back>
                            "Back"
                        </button>
                    </Show>
                    <button type="submit" class="btn btn-primary">
                        {submit_label}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
