use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::principal::Role;

/// Length in minutes of a slot created through the calendar quick-add flow.
pub const QUICK_SLOT_MINUTES: i64 = 60;

/// Notes attached to slots created through the calendar quick-add flow.
pub const QUICK_SLOT_NOTES: &str = "Added via calendar";

/// Free-form slot label. Unknown labels are kept as they were stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SlotType {
    #[default]
    Demo,
    Class,
    Break,
    Meeting,
    Available,
    Other(String),
}

impl SlotType {
    pub fn as_str(&self) -> &str {
        match self {
            SlotType::Demo => "demo",
            SlotType::Class => "class",
            SlotType::Break => "break",
            SlotType::Meeting => "meeting",
            SlotType::Available => "available",
            SlotType::Other(label) => label,
        }
    }
}

impl From<String> for SlotType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "demo" => SlotType::Demo,
            "class" => SlotType::Class,
            "break" => SlotType::Break,
            "meeting" => SlotType::Meeting,
            "available" => SlotType::Available,
            _ => SlotType::Other(label),
        }
    }
}

impl From<&str> for SlotType {
    fn from(label: &str) -> Self {
        SlotType::from(label.to_string())
    }
}

impl From<SlotType> for String {
    fn from(slot_type: SlotType) -> Self {
        slot_type.as_str().to_string()
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Booking status. Only `free` and `booked` carry meaning here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SlotStatus {
    #[default]
    Free,
    Booked,
    Other(String),
}

impl SlotStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SlotStatus::Free => "free",
            SlotStatus::Booked => "booked",
            SlotStatus::Other(status) => status,
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, SlotStatus::Free)
    }
}

impl From<String> for SlotStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "free" => SlotStatus::Free,
            "booked" => SlotStatus::Booked,
            _ => SlotStatus::Other(status),
        }
    }
}

impl From<&str> for SlotStatus {
    fn from(status: &str) -> Self {
        SlotStatus::from(status.to_string())
    }
}

impl From<SlotStatus> for String {
    fn from(status: SlotStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub start_utc: DateTime<Utc>,
    pub end_utc: DateTime<Utc>,
    pub slot_type: SlotType,
    pub status: SlotStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Slot {
    /// Builds a stored slot from a submitted row and the id the store assigned.
    pub fn from_new(id: Uuid, new: NewSlot) -> Self {
        Self {
            id,
            teacher_id: new.teacher_id,
            start_utc: new.start_utc,
            end_utc: new.end_utc,
            slot_type: new.slot_type,
            status: new.status,
            notes: new.notes,
        }
    }

    /// Calendar event title, e.g. `DEMO (free)`.
    pub fn title(&self) -> String {
        format!("{} ({})", self.slot_type.as_str().to_uppercase(), self.status)
    }

    pub fn duration(&self) -> Duration {
        self.end_utc - self.start_utc
    }
}

/// A slot row as submitted to the store, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSlot {
    pub teacher_id: Uuid,
    pub start_utc: DateTime<Utc>,
    pub end_utc: DateTime<Utc>,
    pub slot_type: SlotType,
    pub status: SlotStatus,
    pub notes: Option<String>,
}

/// Unvalidated slot creation input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCandidate {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub slot_type: Option<SlotType>,
    pub notes: Option<String>,
}

impl SlotCandidate {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Self::default()
        }
    }

    /// One hour demo slot starting at `start`.
    pub fn quick_demo(start: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(start + Duration::minutes(QUICK_SLOT_MINUTES)),
            slot_type: Some(SlotType::Demo),
            notes: Some(QUICK_SLOT_NOTES.to_string()),
        }
    }

    pub fn with_type(mut self, slot_type: impl Into<SlotType>) -> Self {
        self.slot_type = Some(slot_type.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Read filter handed to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotScope {
    All,
    Teacher(Uuid),
}

impl SlotScope {
    pub fn includes(&self, slot: &Slot) -> bool {
        match self {
            SlotScope::All => true,
            SlotScope::Teacher(teacher_id) => slot.teacher_id == *teacher_id,
        }
    }
}

/// Rendering category of a slot for a given viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayCategory {
    Available,
    Unavailable,
    AdminView,
}

impl DisplayCategory {
    pub fn label(self) -> &'static str {
        match self {
            DisplayCategory::Available => "available",
            DisplayCategory::Unavailable => "unavailable",
            DisplayCategory::AdminView => "admin",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickSlotRequest {
    pub start: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotResponse {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub start_utc: DateTime<Utc>,
    pub end_utc: DateTime<Utc>,
    pub slot_type: SlotType,
    pub status: SlotStatus,
    pub notes: Option<String>,
    pub title: String,
    pub category: DisplayCategory,
}

impl SlotResponse {
    pub fn new(slot: Slot, category: DisplayCategory) -> Self {
        let title = slot.title();
        Self {
            id: slot.id,
            teacher_id: slot.teacher_id,
            start_utc: slot.start_utc,
            end_utc: slot.end_utc,
            slot_type: slot.slot_type,
            status: slot.status,
            notes: slot.notes,
            title,
            category,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotListResponse {
    pub signed_in: bool,
    pub role: Option<Role>,
    pub slots: Vec<SlotResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSlotResponse {
    pub id: Uuid,
    pub deleted_at: DateTime<Utc>,
}
