use chrono::{Days, NaiveDate};

use instaclean_booking::schema::ADD_ONS;
use instaclean_booking::{
    Address, Advance, Counter, Field, FieldValue, ServiceDetails, Step, StepInput, SubmitMode,
    TimeSlot, Wizard,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

fn tomorrow() -> NaiveDate {
    today().checked_add_days(Days::new(1)).unwrap()
}

fn service(key: &str) -> StepInput {
    StepInput::new().with(Field::ServiceType, FieldValue::text(key))
}

fn scheduled_for(day: NaiveDate) -> StepInput {
    StepInput::new().with(Field::Date, FieldValue::Date(day))
}

/// Details screen for a home cleaning with every add-on left unchecked, the
/// way the form submits it.
fn home_details(rooms: u32, bathrooms: u32) -> StepInput {
    let mut input = StepInput::new()
        .with(Field::Rooms, FieldValue::Count(rooms))
        .with(Field::Bathrooms, FieldValue::Count(bathrooms));
    for add_on in ADD_ONS.iter() {
        input.set(add_on.field, FieldValue::Flag(false));
    }
    input
}

#[test]
fn test_home_booking_scenario_reaches_final_step() {
    let mut wizard = Wizard::new(SubmitMode::ConfirmSummary);
    assert_eq!(wizard.step().index(), 1);
    assert!(wizard.draft().is_empty());

    let moved = wizard.advance(&service("home"), today()).unwrap();
    assert_eq!(moved, Advance::Moved(Step::Details));

    // Counters drive the values the way the UI does.
    let mut rooms = Counter::default();
    rooms.increment();
    let bathrooms = Counter::default();
    wizard
        .advance(&home_details(rooms.value(), bathrooms.value()), today())
        .unwrap();

    wizard.select_time_slot(TimeSlot::parse("09:00 AM").unwrap());
    wizard.advance(&scheduled_for(tomorrow()), today()).unwrap();

    assert_eq!(wizard.step().index(), 4);
    let draft = serde_json::to_value(wizard.draft()).unwrap();
    assert_eq!(draft["type"], "home");
    assert_eq!(draft["rooms"], 2);
    assert_eq!(draft["bathrooms"], 1);
    assert_eq!(draft["date"], "2026-10-18");
    assert_eq!(draft["time"], "09:00 AM");
    assert_eq!(draft["insideFridge"], false);
    assert_eq!(draft["interiorWindows"], false);
}

#[test]
fn test_schedule_without_slot_blocks_advance() {
    let mut wizard = Wizard::default();
    wizard.advance(&service("home"), today()).unwrap();
    wizard.advance(&home_details(1, 1), today()).unwrap();

    let errors = wizard
        .advance(&scheduled_for(tomorrow()), today())
        .unwrap_err();

    assert_eq!(wizard.step(), Step::Schedule);
    assert_eq!(errors.message_for("time"), Some("Please pick a time slot"));
    assert!(!wizard.draft().contains(Field::Date));
}

#[test]
fn test_every_valid_advance_moves_one_step_and_keeps_fields() {
    let mut wizard = Wizard::default();
    let inputs = [
        service("post"),
        StepInput::new()
            .with(Field::OfficeSquareFootage, FieldValue::text("1800"))
            .with(Field::FloorType, FieldValue::text("hardwood"))
            .with(Field::Rooms, FieldValue::Count(3))
            .with(Field::Bathrooms, FieldValue::Count(2)),
        StepInput::new()
            .with(Field::Date, FieldValue::Date(tomorrow()))
            .with(Field::Time, FieldValue::text("04:00 PM")),
    ];

    for input in &inputs {
        let before_step = wizard.step().index();
        let before: Vec<Field> = wizard.draft().iter().map(|(f, _)| f).collect();

        wizard.advance(input, today()).unwrap();

        assert_eq!(wizard.step().index(), before_step + 1);
        for field in before {
            assert!(wizard.draft().contains(field), "{:?} was dropped", field);
        }
    }
}

#[test]
fn test_business_booking_full_flow() {
    let mut wizard = Wizard::new(SubmitMode::ConfirmSummary);
    wizard.advance(&service("business"), today()).unwrap();
    wizard
        .advance(
            &StepInput::new()
                .with(Field::OfficeSquareFootage, FieldValue::text("3200"))
                .with(Field::WashroomStalls, FieldValue::Count(4))
                .with(Field::BusinessType, FieldValue::text("restaurant"))
                .with(Field::FloorType, FieldValue::text("tile"))
                .with(Field::FootTraffic, FieldValue::Count(80)),
            today(),
        )
        .unwrap();
    wizard.select_time_slot(TimeSlot::parse("07:00 AM").unwrap());
    wizard.advance(&scheduled_for(tomorrow()), today()).unwrap();

    let address = FieldValue::Address(Address {
        apartment_number: Some("Suite 400".to_string()),
        street: "1 Yonge St".to_string(),
        city: "Toronto".to_string(),
        postal_code: "M5E 1E5".to_string(),
    });
    let input = StepInput::new().with(Field::Address, address);
    let summary = match wizard.advance(&input, today()).unwrap() {
        Advance::Summary(request) => request,
        other => panic!("Expected summary, got {:?}", other),
    };

    match &summary.details {
        ServiceDetails::Business(d) => {
            assert_eq!(d.washroom_stalls, 4);
            assert_eq!(d.foot_traffic, Some(80));
        }
        other => panic!("Expected business details, got {:?}", other),
    }
    let lines = summary.summary_lines();
    let address = "Suite 400 - 1 Yonge St, Toronto M5E 1E5".to_string();
    assert!(lines.contains(&("Address", address)));

    match wizard.advance(&StepInput::new(), today()).unwrap() {
        Advance::Submitted(request) => assert_eq!(request, summary),
        other => panic!("Expected submission, got {:?}", other),
    }
    assert_eq!(wizard.step(), Step::ServiceType);
}

#[test]
fn test_switching_service_type_keeps_earlier_answers() {
    let mut wizard = Wizard::default();
    wizard.advance(&service("home"), today()).unwrap();
    wizard.advance(&home_details(3, 2), today()).unwrap();
    wizard.retreat();
    wizard.retreat();
    assert_eq!(wizard.step(), Step::ServiceType);

    wizard.advance(&service("business"), today()).unwrap();

    assert_eq!(wizard.draft().count(Field::Rooms), Some(3));
    assert!(wizard.current_fields().contains(&Field::WashroomStalls));
}
