use crate::commands::{people, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Appointment, DATETIME_DISPLAY_FORMAT};
use crate::store::DataStore;
use chrono::NaiveDateTime;
use log::debug;

pub fn create<S: DataStore>(
    store: &mut S,
    person_id: i32,
    datetime: NaiveDateTime,
    description: String,
) -> Result<CmdResult> {
    let person = people::lookup(store, person_id)?;

    store.add_appointment(Appointment::new(person_id, datetime, description))?;
    debug!("created appointment for person id={} at {}", person_id, datetime);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "✅ Cita creada para {} en {}.",
        person.name,
        datetime.format(DATETIME_DISPLAY_FORMAT)
    )));
    Ok(result)
}

pub fn list_for_person<S: DataStore>(store: &S, person_id: i32) -> Result<CmdResult> {
    people::lookup(store, person_id)?;

    let appointments = store.appointments_for(person_id)?;
    let mut result = CmdResult::default();
    if appointments.is_empty() {
        result.add_message(CmdMessage::info(
            "No hay citas registradas para esta persona.",
        ));
    }
    Ok(result.with_listed_appointments(appointments))
}

pub fn list_all<S: DataStore>(store: &S) -> Result<CmdResult> {
    let appointments = store.all_appointments()?;
    let mut result = CmdResult::default();
    if appointments.is_empty() {
        result.add_message(CmdMessage::info("No hay citas registradas."));
    }
    Ok(result.with_listed_appointments(appointments))
}
