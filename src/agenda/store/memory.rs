use super::DataStore;
use crate::error::Result;
use crate::model::{Appointment, Person};

/// In-memory storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    people: Vec<Person>,
    appointments: Vec<Appointment>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn add_person(&mut self, person: Person) -> Result<()> {
        self.people.push(person);
        Ok(())
    }

    fn find_person(&self, id: i32) -> Result<Option<Person>> {
        Ok(self.people.iter().find(|p| p.id == id).cloned())
    }

    fn person_exists(&self, id: i32) -> Result<bool> {
        Ok(self.people.iter().any(|p| p.id == id))
    }

    fn list_people(&self) -> Result<Vec<Person>> {
        Ok(self.people.clone())
    }

    fn add_appointment(&mut self, appointment: Appointment) -> Result<()> {
        self.appointments.push(appointment);
        Ok(())
    }

    fn appointments_for(&self, person_id: i32) -> Result<Vec<Appointment>> {
        Ok(self
            .appointments
            .iter()
            .filter(|a| a.person_id == person_id)
            .cloned()
            .collect())
    }

    fn all_appointments(&self) -> Result<Vec<Appointment>> {
        Ok(self.appointments.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .expect("valid fixture date")
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_person(mut self, id: i32, name: &str) -> Self {
            let phone = format!("555-{:04}", id.rem_euclid(10_000));
            self.store.add_person(Person::new(id, name, phone)).unwrap();
            self
        }

        pub fn with_appointment(mut self, person_id: i32, when: NaiveDateTime, desc: &str) -> Self {
            self.store
                .add_appointment(Appointment::new(person_id, when, desc))
                .unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{at, StoreFixture};
    use super::*;

    #[test]
    fn find_person_returns_first_match() {
        let store = StoreFixture::new()
            .with_person(7, "Ana")
            .with_person(3, "Luis")
            .store;

        let found = store.find_person(3).unwrap().unwrap();
        assert_eq!(found.name, "Luis");
        assert!(store.find_person(99).unwrap().is_none());
    }

    #[test]
    fn person_exists_matches_find() {
        let store = StoreFixture::new().with_person(1, "Ana").store;
        assert!(store.person_exists(1).unwrap());
        assert!(!store.person_exists(2).unwrap());
    }

    #[test]
    fn people_keep_insertion_order() {
        let store = StoreFixture::new()
            .with_person(30, "C")
            .with_person(10, "A")
            .with_person(20, "B")
            .store;

        let ids: Vec<i32> = store.list_people().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn appointments_for_filters_in_insertion_order() {
        let store = StoreFixture::new()
            .with_person(1, "Ana")
            .with_person(2, "Luis")
            .with_appointment(1, at(2025, 12, 1, 9, 0), "late")
            .with_appointment(2, at(2025, 1, 1, 9, 0), "other")
            .with_appointment(1, at(2025, 1, 1, 9, 0), "early")
            .store;

        let descs: Vec<String> = store
            .appointments_for(1)
            .unwrap()
            .into_iter()
            .map(|a| a.description)
            .collect();
        assert_eq!(descs, vec!["late", "early"]);
        assert_eq!(store.all_appointments().unwrap().len(), 3);
        assert!(store.appointments_for(42).unwrap().is_empty());
    }
}
