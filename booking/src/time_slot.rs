use std::fmt;

use serde::{Serialize, Serializer};

/// Which tab of the picker a slot is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotGroup {
    #[default]
    Morning,
    Afternoon,
}

impl SlotGroup {
    pub const ALL: [SlotGroup; 2] = [SlotGroup::Morning, SlotGroup::Afternoon];

    /// Tab caption.
    pub fn label(self) -> &'static str {
        match self {
            SlotGroup::Morning => "AM",
            SlotGroup::Afternoon => "PM",
        }
    }

    pub fn slots(self) -> Vec<TimeSlot> {
        let hours = match self {
            SlotGroup::Morning => FIRST_HOUR..=11,
            SlotGroup::Afternoon => 12..=LAST_HOUR,
        };
        hours.map(|hour| TimeSlot { hour }).collect()
    }
}

const FIRST_HOUR: u8 = 7;
const LAST_HOUR: u8 = 20;

/// A bookable start time, on the hour between 07:00 AM and 08:00 PM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    hour: u8,
}

impl TimeSlot {
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (FIRST_HOUR..=LAST_HOUR).map(|hour| TimeSlot { hour })
    }

    pub fn at_hour(hour: u8) -> Option<TimeSlot> {
        (FIRST_HOUR..=LAST_HOUR)
            .contains(&hour)
            .then_some(TimeSlot { hour })
    }

    /// Parse a display string such as `"09:00 AM"`.
    pub fn parse(s: &str) -> Option<TimeSlot> {
        let s = s.trim();
        TimeSlot::all().find(|slot| slot.label() == s)
    }

    pub fn group(self) -> SlotGroup {
        if self.hour < 12 {
            SlotGroup::Morning
        } else {
            SlotGroup::Afternoon
        }
    }

    /// Button caption without the meridiem, e.g. `"01:00"`.
    pub fn clock(self) -> String {
        let h12 = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{:02}:00", h12)
    }

    /// Full display string stored in the draft, e.g. `"01:00 PM"`.
    pub fn label(self) -> String {
        let meridiem = if self.hour < 12 { "AM" } else { "PM" };
        format!("{} {}", self.clock(), meridiem)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

/// Single-selection slot picker with AM/PM tabs.
///
/// Switching tabs never clears the selection and selecting a slot never
/// switches the tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeSlotPicker {
    active_group: SlotGroup,
    selected: Option<TimeSlot>,
}

impl TimeSlotPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, slot: TimeSlot) {
        self.selected = Some(slot);
    }

    pub fn current(&self) -> Option<TimeSlot> {
        self.selected
    }

    pub fn is_selected(&self, slot: TimeSlot) -> bool {
        self.selected == Some(slot)
    }

    pub fn active_group(&self) -> SlotGroup {
        self.active_group
    }

    pub fn show_group(&mut self, group: SlotGroup) {
        self.active_group = group;
    }
}
