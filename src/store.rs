//! The contact store facade.
//!
//! Reads go query normalization → persistence (seeding if empty) → filters →
//! sort. Mutations read the whole collection, change it in memory and write
//! it back. There is no locking: two overlapping mutations race and the
//! later write wins.

use std::path::Path;
use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::{ContactError, Result};
use crate::export::{contacts_to_json, write_contacts_json};
use crate::filter::apply_filters;
use crate::latency::LatencySimulator;
use crate::logging::OperationTimer;
use crate::metrics::StoreMetrics;
use crate::models::Contact;
use crate::normalize::{normalize_contact, normalize_patch, ContactPatch};
use crate::query::ContactQuery;
use crate::sort::sort_contacts;
use crate::stats::ContactStats;
use crate::storage::{ContactPersistence, KeyValueStore};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LENGTH: usize = 7;

/// Public CRUD and query API over the contact collection
pub struct ContactStore {
    persistence: ContactPersistence,
    latency: Arc<LatencySimulator>,
    metrics: StoreMetrics,
}

impl ContactStore {
    /// Store over `store`, sharing `latency` with other components of the session
    #[must_use]
    pub fn new(store: Box<dyn KeyValueStore>, latency: Arc<LatencySimulator>) -> Self {
        Self {
            persistence: ContactPersistence::new(store),
            latency,
            metrics: StoreMetrics::default(),
        }
    }

    /// The latency simulator used by this store
    #[must_use]
    pub fn latency(&self) -> &Arc<LatencySimulator> {
        &self.latency
    }

    /// Matching contacts for any accepted query form, filtered and sorted.
    pub async fn list(&self, query: impl Into<ContactQuery> + Send) -> Result<Vec<Contact>> {
        let timer = OperationTimer::new("list");
        let descriptor = query.into().normalize();
        self.latency.delay(&descriptor.cache_key()).await;

        let result = self.persistence.ensure_seeded().await.map(|contacts| {
            let mut result = apply_filters(contacts, &descriptor);
            sort_contacts(&mut result, descriptor.sort_by);
            result
        });
        if let Ok(contacts) = &result {
            debug!(?descriptor, count = contacts.len(), "listed contacts");
        }
        self.finish(timer, &result);
        result
    }

    /// Full, unfiltered and unsorted collection
    pub async fn list_all(&self) -> Result<Vec<Contact>> {
        let timer = OperationTimer::new("list_all");
        self.latency.delay("getContacts:all").await;
        let result = self.persistence.ensure_seeded().await;
        if let Ok(contacts) = &result {
            self.metrics.record_collection_size(contacts.len());
        }
        self.finish(timer, &result);
        result
    }

    /// Contact with `id`, or `None` if there is none
    pub async fn get(&self, id: &str) -> Result<Option<Contact>> {
        let timer = OperationTimer::new("get");
        self.latency.delay(&format!("contact:{id}")).await;
        let result = self
            .persistence
            .ensure_seeded()
            .await
            .map(|contacts| contacts.into_iter().find(|contact| contact.id == id));
        self.finish(timer, &result);
        result
    }

    /// Create a blank contact at the front of the collection.
    pub async fn create(&self) -> Result<Contact> {
        let timer = OperationTimer::new("create");
        self.settle_mutation().await;

        let result: Result<Contact> = async {
            let mut contacts = self.persistence.ensure_seeded().await?;
            let id = generate_id(&contacts);
            let contact = normalize_contact(Contact::blank(id, chrono::Utc::now().timestamp_millis()));
            contacts.insert(0, contact.clone());
            self.persistence.save(&contacts).await?;
            info!(id = %contact.id, "created contact");
            self.metrics.record_collection_size(contacts.len());
            Ok(contact)
        }
        .await;
        self.finish(timer, &result);
        result
    }

    /// Merge normalized fields from `patch` into the contact with `id`.
    ///
    /// Fails with [`ContactError::NotFound`] and writes nothing when no
    /// contact has that id.
    pub async fn update(&self, id: &str, patch: ContactPatch) -> Result<Contact> {
        let timer = OperationTimer::new("update");
        self.settle_mutation().await;

        let result: Result<Contact> = async {
            let mut contacts = self.persistence.ensure_seeded().await?;
            let Some(contact) = contacts.iter_mut().find(|contact| contact.id == id) else {
                warn!(id, "update of unknown contact");
                return Err(ContactError::NotFound(id.to_string()));
            };

            let update = normalize_patch(patch);
            debug!(id, fields = ?update.field_names(), "updating contact");
            update.apply_to(contact);
            let updated = contact.clone();

            self.persistence.save(&contacts).await?;
            info!(id, "updated contact");
            Ok(updated)
        }
        .await;
        self.finish(timer, &result);
        result
    }

    /// Set or clear the favorite flag of the contact with `id`.
    pub async fn set_favorite(&self, id: &str, favorite: bool) -> Result<Contact> {
        self.update(id, ContactPatch::new().favorite(favorite)).await
    }

    /// Remove the contact with `id`; returns whether one was removed.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let timer = OperationTimer::new("delete");
        self.latency.reset();

        let result: Result<bool> = async {
            let mut contacts = self.persistence.ensure_seeded().await?;
            let Some(index) = contacts.iter().position(|contact| contact.id == id) else {
                debug!(id, "delete of unknown contact");
                return Ok(false);
            };
            contacts.remove(index);
            self.persistence.save(&contacts).await?;
            info!(id, "deleted contact");
            self.metrics.record_collection_size(contacts.len());
            Ok(true)
        }
        .await;
        self.finish(timer, &result);
        result
    }

    /// Counts over the full collection
    pub async fn stats(&self) -> Result<ContactStats> {
        Ok(ContactStats::from_contacts(&self.list_all().await?))
    }

    /// The full collection as a JSON document
    pub async fn to_json_string(&self) -> Result<String> {
        contacts_to_json(&self.list_all().await?)
    }

    /// Write the full collection to a JSON file; returns the number written.
    pub async fn export_json(&self, path: &Path) -> Result<usize> {
        let contacts = self.list_all().await?;
        write_contacts_json(&contacts, path)?;
        info!(path = %path.display(), count = contacts.len(), "exported contacts");
        Ok(contacts.len())
    }

    async fn settle_mutation(&self) {
        self.latency.reset();
        self.latency.delay_uncached().await;
    }

    fn finish<T>(&self, timer: OperationTimer, result: &Result<T>) {
        let operation = timer.operation();
        let duration = timer.finish();
        self.metrics.record_operation(operation, duration, result.is_ok());
    }
}

/// Random lowercase base-36 id not present in `existing`
fn generate_id(existing: &[Contact]) -> String {
    let mut rng = rand::thread_rng();
    loop {
        let id: String = (0..ID_LENGTH)
            .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
            .collect();
        if !existing.iter().any(|contact| contact.id == id) {
            return id;
        }
    }
}
