//! # Storage Layer
//!
//! This module defines the storage abstraction for the agenda. The [`DataStore`]
//! trait keeps the command layer independent of where records live.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the only backend. Two insertion-ordered
//!   collections held for the lifetime of the process. Nothing is persisted.
//!
//! ## Contract
//!
//! The store is deliberately dumb:
//! - `add_*` methods append unconditionally. Uniqueness of person ids and the
//!   existence of an appointment's person are checked by the command layer
//!   before anything reaches the store.
//! - Lookups are linear scans and return the first match.
//! - Every listing preserves insertion order. Nothing is sorted.

use crate::error::Result;
use crate::model::{Appointment, Person};

pub mod memory;

/// Abstract interface for people and appointment storage.
pub trait DataStore {
    /// Append a person. The caller has already checked the id is free.
    fn add_person(&mut self, person: Person) -> Result<()>;

    /// First person with the given id, if any.
    fn find_person(&self, id: i32) -> Result<Option<Person>>;

    fn person_exists(&self, id: i32) -> Result<bool> {
        Ok(self.find_person(id)?.is_some())
    }

    /// All people in insertion order
    fn list_people(&self) -> Result<Vec<Person>>;

    /// Append an appointment. The caller has already validated the person reference.
    fn add_appointment(&mut self, appointment: Appointment) -> Result<()>;

    /// Appointments whose `person_id` matches, in insertion order.
    fn appointments_for(&self, person_id: i32) -> Result<Vec<Appointment>>;

    /// All appointments in insertion order
    fn all_appointments(&self) -> Result<Vec<Appointment>>;
}
