//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point the menu talks to.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//! - **Owns the state** for the whole session: the store is constructed once and
//!   lives inside `AgendaApi` until the process exits
//!
//! It does no business logic (that belongs in `commands/*.rs`) and no I/O.
//!
//! `AgendaApi<S: DataStore>` is generic over the storage backend, so the menu and
//! its tests run against the same `InMemoryStore` the binary uses.

use crate::commands;
use crate::error::Result;
use crate::model::Person;
use crate::store::DataStore;
use chrono::NaiveDateTime;

pub struct AgendaApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> AgendaApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn ensure_person_available(&self, id: i32) -> Result<()> {
        commands::people::ensure_available(&self.store, id)
    }

    pub fn register_person(
        &mut self,
        id: i32,
        name: String,
        phone: String,
    ) -> Result<commands::CmdResult> {
        commands::people::register(&mut self.store, id, name, phone)
    }

    pub fn list_people(&self) -> Result<commands::CmdResult> {
        commands::people::list(&self.store)
    }

    pub fn find_person(&self, id: i32) -> Result<Person> {
        commands::people::lookup(&self.store, id)
    }

    pub fn create_appointment(
        &mut self,
        person_id: i32,
        datetime: NaiveDateTime,
        description: String,
    ) -> Result<commands::CmdResult> {
        commands::appointments::create(&mut self.store, person_id, datetime, description)
    }

    pub fn list_appointments_for(&self, person_id: i32) -> Result<commands::CmdResult> {
        commands::appointments::list_for_person(&self.store, person_id)
    }

    pub fn list_all_appointments(&self) -> Result<commands::CmdResult> {
        commands::appointments::list_all(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgendaError;
    use crate::store::memory::fixtures::at;
    use crate::store::memory::InMemoryStore;

    fn api() -> AgendaApi<InMemoryStore> {
        AgendaApi::new(InMemoryStore::new())
    }

    #[test]
    fn register_then_list_people() {
        let mut api = api();
        api.register_person(1, "Ana".into(), "555-1111".into())
            .unwrap();

        let result = api.list_people().unwrap();
        assert_eq!(result.listed_people.len(), 1);
        assert_eq!(api.find_person(1).unwrap().phone, "555-1111");
    }

    #[test]
    fn ensure_person_available_dispatches() {
        let mut api = api();
        api.register_person(1, "Ana".into(), "1".into()).unwrap();
        assert!(matches!(
            api.ensure_person_available(1),
            Err(AgendaError::DuplicatePerson(1))
        ));
    }

    #[test]
    fn scenario_from_menu_walkthrough() {
        let mut api = api();
        api.register_person(1, "Ana".into(), "555-1111".into())
            .unwrap();
        assert!(api
            .register_person(1, "Ana".into(), "555-1111".into())
            .is_err());
        assert_eq!(api.store().list_people().unwrap().len(), 1);

        api.create_appointment(1, at(2025, 10, 15, 14, 30), "Checkup".into())
            .unwrap();
        let for_ana = api.list_appointments_for(1).unwrap();
        assert_eq!(for_ana.listed_appointments.len(), 1);

        assert!(matches!(
            api.create_appointment(99, at(2025, 10, 15, 14, 30), "X".into()),
            Err(AgendaError::PersonNotFound(99))
        ));
        assert_eq!(api.list_all_appointments().unwrap().listed_appointments.len(), 1);
    }
}
