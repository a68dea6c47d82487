use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AgendaError, Result};
use crate::model::Person;
use crate::store::DataStore;
use log::{debug, warn};

/// Fails with `DuplicatePerson` when `id` is already registered.
///
/// Lets the CLI reject a taken id before asking for the remaining fields.
pub fn ensure_available<S: DataStore>(store: &S, id: i32) -> Result<()> {
    if store.person_exists(id)? {
        warn!("person id {} is already registered", id);
        return Err(AgendaError::DuplicatePerson(id));
    }
    Ok(())
}

pub fn register<S: DataStore>(
    store: &mut S,
    id: i32,
    name: String,
    phone: String,
) -> Result<CmdResult> {
    ensure_available(store, id)?;

    debug!("registering person id={} name={:?}", id, name);
    store.add_person(Person::new(id, name, phone))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("✅ Persona registrada correctamente."));
    Ok(result)
}

pub fn list<S: DataStore>(store: &S) -> Result<CmdResult> {
    let people = store.list_people()?;
    let mut result = CmdResult::default();
    if people.is_empty() {
        result.add_message(CmdMessage::info("No hay personas registradas."));
    }
    Ok(result.with_listed_people(people))
}

pub fn lookup<S: DataStore>(store: &S, id: i32) -> Result<Person> {
    store.find_person(id)?.ok_or_else(|| {
        warn!("person id {} not found", id);
        AgendaError::PersonNotFound(id)
    })
}
