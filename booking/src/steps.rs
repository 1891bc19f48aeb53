//! Step sequencer for the quote wizard.
//!
//! The wizard walks four steps. Each advance validates the current step's
//! field subset and merges it into the draft all-or-nothing. The terminal
//! step either commits immediately or first shows an order summary and
//! commits on the following advance, depending on [`SubmitMode`].

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::draft::Draft;
use crate::error::ValidationErrors;
use crate::request::BookingRequest;
use crate::schema::{validate_field, Field, FieldValue, ServiceType, SERVICE_TYPE_REQUIRED};
use crate::time_slot::{SlotGroup, TimeSlot, TimeSlotPicker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    ServiceType,
    Details,
    Schedule,
    Address,
}

impl Step {
    pub const FINAL: Step = Step::Address;
    pub const COUNT: u8 = 4;

    /// 1-based position.
    pub fn index(self) -> u8 {
        match self {
            Step::ServiceType => 1,
            Step::Details => 2,
            Step::Schedule => 3,
            Step::Address => 4,
        }
    }

    pub fn next(self) -> Step {
        match self {
            Step::ServiceType => Step::Details,
            Step::Details => Step::Schedule,
            Step::Schedule | Step::Address => Step::Address,
        }
    }

    pub fn prev(self) -> Step {
        match self {
            Step::ServiceType | Step::Details => Step::ServiceType,
            Step::Schedule => Step::Details,
            Step::Address => Step::Schedule,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::ServiceType => "What kind of services can we help with",
            Step::Details => "Tell us about the space",
            Step::Schedule => "What day and time works best for you",
            Step::Address => "What address do you want us to come to",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Step::ServiceType => "What kind of location do you want us to serve?",
            Step::Details => "What service can we help with",
            Step::Schedule => "Bookings start from tomorrow",
            Step::Address => "We are currently operating in the GTA only",
        }
    }

    /// Fields this step collects. Only the details step depends on the
    /// service type; without one it collects nothing.
    pub fn fields(self, service: Option<ServiceType>) -> &'static [Field] {
        match self {
            Step::ServiceType => &[Field::ServiceType],
            Step::Details => service.map(ServiceType::detail_fields).unwrap_or(&[]),
            Step::Schedule => &[Field::Date, Field::Time],
            Step::Address => &[Field::Address],
        }
    }
}

/// How the final step commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitMode {
    /// Commit on the first advance from the final step.
    Immediate,
    /// Show an order summary first, commit on the next advance.
    #[default]
    ConfirmSummary,
}

/// Values entered on the current screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInput {
    values: BTreeMap<Field, FieldValue>,
}

impl StepInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: FieldValue) -> Self {
        self.values.insert(field, value);
        self
    }

    pub fn set(&mut self, field: Field, value: FieldValue) {
        self.values.insert(field, value);
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.values.get(&field)
    }
}

/// Outcome of a successful advance.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Moved on to the given step.
    Moved(Step),
    /// Final step validated; the summary is on screen and nothing was sent.
    Summary(BookingRequest),
    /// Booking committed. The wizard has been reset.
    Submitted(BookingRequest),
}

/// State owned by one open quote modal.
#[derive(Debug, Clone)]
pub struct Wizard {
    step: Step,
    draft: Draft,
    picker: TimeSlotPicker,
    mode: SubmitMode,
    summary: Option<BookingRequest>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(SubmitMode::default())
    }
}

impl Wizard {
    pub fn new(mode: SubmitMode) -> Self {
        Self {
            step: Step::ServiceType,
            draft: Draft::new(),
            picker: TimeSlotPicker::new(),
            mode,
            summary: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn picker(&self) -> &TimeSlotPicker {
        &self.picker
    }

    /// Summary awaiting confirmation, if the final step has been validated.
    pub fn pending_summary(&self) -> Option<&BookingRequest> {
        self.summary.as_ref()
    }

    /// Fields the current step collects.
    pub fn current_fields(&self) -> &'static [Field] {
        self.step.fields(self.draft.service_type())
    }

    /// Record a time slot. Writes straight into the draft's time field.
    pub fn select_time_slot(&mut self, slot: TimeSlot) {
        self.picker.select(slot);
        self.draft.set(Field::Time, FieldValue::text(slot.label()));
    }

    pub fn show_slot_group(&mut self, group: SlotGroup) {
        self.picker.show_group(group);
    }

    /// Validate the current step and move on.
    ///
    /// Each field's value comes from `input`, falling back to the draft. On
    /// failure nothing changes. On the final step this hands back the
    /// booking instead of moving.
    pub fn advance(
        &mut self,
        input: &StepInput,
        today: NaiveDate,
    ) -> Result<Advance, ValidationErrors> {
        if let Some(request) = self.summary.take() {
            return Ok(self.commit(request));
        }

        let service = match self.step {
            Step::Details => match self.draft.service_type() {
                Some(service) => Some(service),
                None => {
                    let mut errors = ValidationErrors::new();
                    errors.push(Field::ServiceType.key(), SERVICE_TYPE_REQUIRED);
                    return Err(errors);
                }
            },
            _ => self.draft.service_type(),
        };

        let mut errors = ValidationErrors::new();
        let mut accepted = Vec::new();
        for &field in self.step.fields(service) {
            let value = input.get(field).or_else(|| self.draft.get(field));
            if let Some(valid) = validate_field(field, value, today, &mut errors) {
                accepted.push((field, valid));
            }
        }

        if !errors.is_empty() {
            debug!(
                "Step {} rejected: {} error(s)",
                self.step.index(),
                errors.len()
            );
            return Err(errors);
        }

        self.draft.merge(accepted);

        if self.step != Step::FINAL {
            self.step = self.step.next();
            debug!("Advanced to step {}", self.step.index());
            return Ok(Advance::Moved(self.step));
        }

        let request = BookingRequest::from_draft(&self.draft)?;
        match self.mode {
            SubmitMode::Immediate => Ok(self.commit(request)),
            SubmitMode::ConfirmSummary => {
                debug!("Showing order summary");
                self.summary = Some(request.clone());
                Ok(Advance::Summary(request))
            }
        }
    }

    /// Go back one step, keeping every answer. From the summary this returns
    /// to editing the final step.
    pub fn retreat(&mut self) -> Step {
        if self.summary.take().is_none() {
            self.step = self.step.prev();
        }
        self.step
    }

    /// Discard the draft and start over.
    pub fn reset(&mut self) {
        self.step = Step::ServiceType;
        self.draft.clear();
        self.picker = TimeSlotPicker::new();
        self.summary = None;
    }

    fn commit(&mut self, request: BookingRequest) -> Advance {
        info!(
            "Booking submitted: {} on {} at {}",
            request.service_type().label(),
            request.date,
            request.time
        );
        self.reset();
        Advance::Submitted(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Address;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn tomorrow() -> NaiveDate {
        today().succ_opt().unwrap()
    }

    fn one(field: Field, value: FieldValue) -> StepInput {
        StepInput::new().with(field, value)
    }

    fn slot(label: &str) -> TimeSlot {
        TimeSlot::parse(label).unwrap()
    }

    fn address() -> FieldValue {
        FieldValue::Address(Address {
            apartment_number: None,
            street: "100 King St".to_string(),
            city: "Toronto".to_string(),
            postal_code: "M5H 1A1".to_string(),
        })
    }

    fn at_address_step(mode: SubmitMode) -> Wizard {
        let mut wizard = Wizard::new(mode);
        wizard
            .advance(&one(Field::ServiceType, FieldValue::text("home")), today())
            .unwrap();
        wizard
            .advance(
                &StepInput::new()
                    .with(Field::Rooms, FieldValue::Count(2))
                    .with(Field::Bathrooms, FieldValue::Count(1)),
                today(),
            )
            .unwrap();
        wizard.select_time_slot(slot("09:00 AM"));
        wizard
            .advance(&one(Field::Date, FieldValue::Date(tomorrow())), today())
            .unwrap();
        assert_eq!(wizard.step(), Step::Address);
        wizard
    }

    #[test]
    fn test_step_navigation_bounds() {
        assert_eq!(Step::ServiceType.prev(), Step::ServiceType);
        assert_eq!(Step::Address.next(), Step::Address);
        assert_eq!(Step::FINAL.index(), Step::COUNT);
    }

    #[test]
    fn test_retreat_at_first_step_is_noop() {
        let mut wizard = Wizard::default();
        assert_eq!(wizard.retreat(), Step::ServiceType);
    }

    #[test]
    fn test_invalid_step_leaves_state_untouched() {
        let mut wizard = Wizard::default();
        let before = wizard.draft().clone();

        let errors = wizard
            .advance(&one(Field::ServiceType, FieldValue::text("castle")), today())
            .unwrap_err();

        assert!(errors.has("type"));
        assert_eq!(wizard.step(), Step::ServiceType);
        assert_eq!(wizard.draft(), &before);
    }

    #[test]
    fn test_no_partial_merge() {
        let mut wizard = Wizard::default();
        wizard
            .advance(&one(Field::ServiceType, FieldValue::text("home")), today())
            .unwrap();

        let errors = wizard
            .advance(
                &StepInput::new()
                    .with(Field::Rooms, FieldValue::Count(3))
                    .with(Field::Bathrooms, FieldValue::Count(0)),
                today(),
            )
            .unwrap_err();

        assert!(errors.has("bathrooms"));
        assert!(!errors.has("rooms"));
        assert!(!wizard.draft().contains(Field::Rooms));
        assert_eq!(wizard.step(), Step::Details);
    }

    #[test]
    fn test_details_subset_follows_service_type() {
        let mut wizard = Wizard::default();
        wizard
            .advance(&one(Field::ServiceType, FieldValue::text("business")), today())
            .unwrap();
        assert!(wizard.current_fields().contains(&Field::BusinessType));

        let errors = wizard.advance(&StepInput::new(), today()).unwrap_err();
        assert!(errors.has("officeSquareFootage"));
        assert!(errors.has("washroomStalls"));
        assert!(errors.has("businessType"));
        assert!(errors.has("floorType"));
        assert!(!errors.has("footTraffic"));
        assert!(!errors.has("rooms"));
    }

    #[test]
    fn test_details_without_service_type_is_rejected() {
        let mut wizard = Wizard::default();
        wizard
            .advance(&one(Field::ServiceType, FieldValue::text("home")), today())
            .unwrap();
        wizard.draft.clear();

        let errors = wizard.advance(&StepInput::new(), today()).unwrap_err();
        assert_eq!(errors.message_for("type"), Some(SERVICE_TYPE_REQUIRED));
        assert_eq!(wizard.step(), Step::Details);
    }

    #[test]
    fn test_schedule_requires_time_slot() {
        let mut wizard = Wizard::default();
        wizard
            .advance(&one(Field::ServiceType, FieldValue::text("home")), today())
            .unwrap();
        wizard
            .advance(
                &StepInput::new()
                    .with(Field::Rooms, FieldValue::Count(1))
                    .with(Field::Bathrooms, FieldValue::Count(1)),
                today(),
            )
            .unwrap();

        let errors = wizard
            .advance(&one(Field::Date, FieldValue::Date(tomorrow())), today())
            .unwrap_err();

        assert!(errors.has("time"));
        assert_eq!(wizard.step(), Step::Schedule);
    }

    #[test]
    fn test_retreat_keeps_answers() {
        let mut wizard = at_address_step(SubmitMode::ConfirmSummary);
        assert_eq!(wizard.retreat(), Step::Schedule);
        assert_eq!(wizard.retreat(), Step::Details);
        assert_eq!(wizard.draft().count(Field::Rooms), Some(2));
        assert_eq!(wizard.draft().text(Field::Time), Some("09:00 AM"));

        // Counts already in the draft satisfy the step on the way forward again.
        assert_eq!(
            wizard.advance(&StepInput::new(), today()).unwrap(),
            Advance::Moved(Step::Schedule)
        );
    }

    #[test]
    fn test_confirm_summary_commits_on_second_advance() {
        let mut wizard = at_address_step(SubmitMode::ConfirmSummary);
        let input = StepInput::new().with(Field::Address, address());

        let first = wizard.advance(&input, today()).unwrap();
        let summary = match first {
            Advance::Summary(request) => request,
            other => panic!("Expected summary, got {:?}", other),
        };
        assert_eq!(wizard.step(), Step::Address);
        assert!(wizard.pending_summary().is_some());
        assert!(wizard.draft().address().is_some());

        let second = wizard.advance(&StepInput::new(), today()).unwrap();
        assert_eq!(second, Advance::Submitted(summary));
        assert_eq!(wizard.step(), Step::ServiceType);
        assert!(wizard.draft().is_empty());
        assert_eq!(wizard.picker().current(), None);
    }

    #[test]
    fn test_retreat_from_summary_returns_to_final_step() {
        let mut wizard = at_address_step(SubmitMode::ConfirmSummary);
        wizard
            .advance(&one(Field::Address, address()), today())
            .unwrap();

        assert_eq!(wizard.retreat(), Step::Address);
        assert!(wizard.pending_summary().is_none());
        assert!(matches!(
            wizard.advance(&StepInput::new(), today()).unwrap(),
            Advance::Summary(_)
        ));
    }

    #[test]
    fn test_immediate_mode_commits_on_first_advance() {
        let mut wizard = at_address_step(SubmitMode::Immediate);
        let outcome = wizard
            .advance(&one(Field::Address, address()), today())
            .unwrap();
        assert!(matches!(outcome, Advance::Submitted(_)));
        assert!(wizard.draft().is_empty());
    }

    #[test]
    fn test_address_step_reports_missing_parts() {
        let mut wizard = at_address_step(SubmitMode::ConfirmSummary);
        let errors = wizard.advance(&StepInput::new(), today()).unwrap_err();
        assert!(errors.has("address.street"));
        assert!(errors.has("address.city"));
        assert!(errors.has("address.postalCode"));
        assert!(wizard.pending_summary().is_none());
    }

    #[test]
    fn test_selecting_slot_writes_draft() {
        let mut wizard = Wizard::default();
        wizard.select_time_slot(slot("08:00 AM"));
        wizard.select_time_slot(slot("02:00 PM"));
        assert_eq!(wizard.picker().current(), Some(slot("02:00 PM")));
        assert_eq!(wizard.draft().text(Field::Time), Some("02:00 PM"));
    }
}
