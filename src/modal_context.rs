use leptos::prelude::*;

/// Open/closed state of the quote modal, shared by every "Get a Quote"
/// button and the modal itself.
#[derive(Clone, Copy)]
pub struct QuoteModalContext {
    pub is_open: ReadSignal<bool>,
    pub set_open: WriteSignal<bool>,
}

impl QuoteModalContext {
    pub fn new() -> Self {
        let (is_open, set_open) = signal(false);
        Self { is_open, set_open }
    }

    /// Open the modal unless it is already open, so repeated clicks never
    /// stack a second wizard. Returns whether this call opened it.
    pub fn open(&self) -> bool {
        if self.is_open.get_untracked() {
            return false;
        }
        self.set_open.set(true);
        true
    }

    pub fn close(&self) {
        self.set_open.set(false);
    }
}

/// Where the wizard hands a committed booking for the confirmation page.
#[derive(Clone, Copy)]
pub struct LastBooking(pub RwSignal<Option<instaclean_booking::BookingRequest>>);
