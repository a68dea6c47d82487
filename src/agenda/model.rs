use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Display format for appointment dates in listings and confirmations.
pub const DATETIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub phone: String,
}

impl Person {
    pub fn new(id: i32, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// An appointment refers to its person by id only; it does not own the person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub person_id: i32,
    pub datetime: NaiveDateTime,
    pub description: String,
}

impl Appointment {
    pub fn new(person_id: i32, datetime: NaiveDateTime, description: impl Into<String>) -> Self {
        Self {
            person_id,
            datetime,
            description: description.into(),
        }
    }

    pub fn formatted_datetime(&self) -> String {
        self.datetime.format(DATETIME_DISPLAY_FORMAT).to_string()
    }
}
