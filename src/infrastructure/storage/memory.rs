//! In-memory repositories for development and testing
//!
//! Mirrors the relational schema closely enough for service tests:
//! deleting a farm drops its crops, deleting a crop or fertilizer drops its
//! associations, and usernames are unique.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::crop::{Crop, CropRepository};
use crate::domain::farm::{Farm, FarmRepository};
use crate::domain::fertilizer::{Fertilizer, FertilizerRepository};
use crate::domain::person::{Person, PersonRepository};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::{DomainError, DomainResult};

/// Sorted snapshot so `find_all` has a stable id order like the SQL version
fn sorted<T: Clone>(map: &DashMap<i32, T>) -> Vec<T> {
    map.iter()
        .map(|e| (*e.key(), e.value().clone()))
        .collect::<BTreeMap<_, _>>()
        .into_values()
        .collect()
}

#[derive(Default)]
struct Tables {
    farms: DashMap<i32, Farm>,
    crops: DashMap<i32, Crop>,
    fertilizers: DashMap<i32, Fertilizer>,
    crop_fertilizer: DashMap<(i32, i32), ()>,
    persons: DashMap<i32, Person>,
}

impl Tables {
    fn drop_links_where(&self, pred: impl Fn(&(i32, i32)) -> bool) {
        self.crop_fertilizer.retain(|key, _| !pred(key));
    }
}

// ── Farms ───────────────────────────────────────────────────────

pub struct InMemoryFarmRepository {
    tables: Arc<Tables>,
    counter: AtomicI32,
}

#[async_trait]
impl FarmRepository for InMemoryFarmRepository {
    async fn save(&self, mut farm: Farm) -> DomainResult<Farm> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        farm.set_id(id);
        self.tables.farms.insert(id, farm.clone());
        Ok(farm)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Farm>> {
        Ok(self.tables.farms.get(&id).map(|f| f.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Farm>> {
        Ok(sorted(&self.tables.farms))
    }

    async fn update(&self, farm: Farm) -> DomainResult<Farm> {
        match self.tables.farms.get_mut(&farm.id()) {
            Some(mut entry) => {
                *entry = farm.clone();
                Ok(farm)
            }
            None => Err(DomainError::not_found("Farm", farm.id())),
        }
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        if self.tables.farms.remove(&id).is_none() {
            return Err(DomainError::not_found("Farm", id));
        }
        let crop_ids: Vec<i32> = self
            .tables
            .crops
            .iter()
            .filter(|c| c.farm_id() == id)
            .map(|c| c.id())
            .collect();
        for crop_id in &crop_ids {
            self.tables.crops.remove(crop_id);
        }
        self.tables
            .drop_links_where(|(crop_id, _)| crop_ids.contains(crop_id));
        Ok(())
    }
}

// ── Crops ───────────────────────────────────────────────────────

pub struct InMemoryCropRepository {
    tables: Arc<Tables>,
    counter: AtomicI32,
}

#[async_trait]
impl CropRepository for InMemoryCropRepository {
    async fn save(&self, mut crop: Crop) -> DomainResult<Crop> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        crop.set_id(id);
        self.tables.crops.insert(id, crop.clone());
        Ok(crop)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Crop>> {
        Ok(self.tables.crops.get(&id).map(|c| c.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Crop>> {
        Ok(sorted(&self.tables.crops))
    }

    async fn find_by_farm_id(&self, farm_id: i32) -> DomainResult<Vec<Crop>> {
        Ok(sorted(&self.tables.crops)
            .into_iter()
            .filter(|c| c.farm_id() == farm_id)
            .collect())
    }

    async fn update(&self, crop: Crop) -> DomainResult<Crop> {
        match self.tables.crops.get_mut(&crop.id()) {
            Some(mut entry) => {
                *entry = crop.clone();
                Ok(crop)
            }
            None => Err(DomainError::not_found("Crop", crop.id())),
        }
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        if self.tables.crops.remove(&id).is_none() {
            return Err(DomainError::not_found("Crop", id));
        }
        self.tables.drop_links_where(|(crop_id, _)| *crop_id == id);
        Ok(())
    }

    async fn add_fertilizer(&self, crop_id: i32, fertilizer_id: i32) -> DomainResult<()> {
        if self
            .tables
            .crop_fertilizer
            .insert((crop_id, fertilizer_id), ())
            .is_some()
        {
            return Err(DomainError::Conflict(format!(
                "Fertilizer {} is already applied to crop {}",
                fertilizer_id, crop_id
            )));
        }
        Ok(())
    }

    async fn has_fertilizer(&self, crop_id: i32, fertilizer_id: i32) -> DomainResult<bool> {
        Ok(self
            .tables
            .crop_fertilizer
            .contains_key(&(crop_id, fertilizer_id)))
    }

    async fn find_fertilizers_by_crop_id(&self, crop_id: i32) -> DomainResult<Vec<Fertilizer>> {
        Ok(sorted(&self.tables.fertilizers)
            .into_iter()
            .filter(|f| {
                self.tables
                    .crop_fertilizer
                    .contains_key(&(crop_id, f.id()))
            })
            .collect())
    }
}

// ── Fertilizers ─────────────────────────────────────────────────

pub struct InMemoryFertilizerRepository {
    tables: Arc<Tables>,
    counter: AtomicI32,
}

#[async_trait]
impl FertilizerRepository for InMemoryFertilizerRepository {
    async fn save(&self, mut fertilizer: Fertilizer) -> DomainResult<Fertilizer> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        fertilizer.set_id(id);
        self.tables.fertilizers.insert(id, fertilizer.clone());
        Ok(fertilizer)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Fertilizer>> {
        Ok(self.tables.fertilizers.get(&id).map(|f| f.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Fertilizer>> {
        Ok(sorted(&self.tables.fertilizers))
    }

    async fn update(&self, fertilizer: Fertilizer) -> DomainResult<Fertilizer> {
        match self.tables.fertilizers.get_mut(&fertilizer.id()) {
            Some(mut entry) => {
                *entry = fertilizer.clone();
                Ok(fertilizer)
            }
            None => Err(DomainError::not_found("Fertilizer", fertilizer.id())),
        }
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        if self.tables.fertilizers.remove(&id).is_none() {
            return Err(DomainError::not_found("Fertilizer", id));
        }
        self.tables
            .drop_links_where(|(_, fertilizer_id)| *fertilizer_id == id);
        Ok(())
    }
}

// ── Persons ─────────────────────────────────────────────────────

pub struct InMemoryPersonRepository {
    tables: Arc<Tables>,
    counter: AtomicI32,
}

impl InMemoryPersonRepository {
    fn taken_by_other(&self, username: &str, id: i32) -> bool {
        self.tables
            .persons
            .iter()
            .any(|p| p.username() == username && p.id() != id)
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn save(&self, mut person: Person) -> DomainResult<Person> {
        if self.taken_by_other(person.username(), 0) {
            return Err(DomainError::Conflict(format!(
                "Username '{}' is already taken",
                person.username()
            )));
        }
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        person.set_id(id);
        self.tables.persons.insert(id, person.clone());
        Ok(person)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Person>> {
        Ok(self.tables.persons.get(&id).map(|p| p.clone()))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Person>> {
        Ok(self
            .tables
            .persons
            .iter()
            .find(|p| p.username() == username)
            .map(|p| p.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Person>> {
        Ok(sorted(&self.tables.persons))
    }

    async fn update(&self, person: Person) -> DomainResult<Person> {
        if self.taken_by_other(person.username(), person.id()) {
            return Err(DomainError::Conflict(format!(
                "Username '{}' is already taken",
                person.username()
            )));
        }
        match self.tables.persons.get_mut(&person.id()) {
            Some(mut entry) => {
                *entry = person.clone();
                Ok(person)
            }
            None => Err(DomainError::not_found("Person", person.id())),
        }
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        match self.tables.persons.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("Person", id)),
        }
    }

    async fn username_exists(&self, username: &str) -> DomainResult<bool> {
        Ok(self.tables.persons.iter().any(|p| p.username() == username))
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.tables.persons.len() as u64)
    }
}

// ── Provider ────────────────────────────────────────────────────

/// [`RepositoryProvider`] backed by process memory.
pub struct InMemoryRepositoryProvider {
    farms: InMemoryFarmRepository,
    crops: InMemoryCropRepository,
    fertilizers: InMemoryFertilizerRepository,
    persons: InMemoryPersonRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        let tables = Arc::new(Tables::default());
        Self {
            farms: InMemoryFarmRepository {
                tables: tables.clone(),
                counter: AtomicI32::new(1),
            },
            crops: InMemoryCropRepository {
                tables: tables.clone(),
                counter: AtomicI32::new(1),
            },
            fertilizers: InMemoryFertilizerRepository {
                tables: tables.clone(),
                counter: AtomicI32::new(1),
            },
            persons: InMemoryPersonRepository {
                tables,
                counter: AtomicI32::new(1),
            },
        }
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn farms(&self) -> &dyn FarmRepository {
        &self.farms
    }

    fn crops(&self) -> &dyn CropRepository {
        &self.crops
    }

    fn fertilizers(&self) -> &dyn FertilizerRepository {
        &self.fertilizers
    }

    fn persons(&self) -> &dyn PersonRepository {
        &self.persons
    }
}
