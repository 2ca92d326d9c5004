//! Cached API lists shared by the dashboard and the reference pickers.
//!
//! DESIGN
//! ======
//! One slot per `ListKey`. Every fetch takes a ticket from `begin`; a result
//! is applied only while its ticket is still the slot's latest, so a slow
//! response can never overwrite a fresher one and nothing lands after `clear`.
//!
//! Failed refreshes keep the previously loaded items. A slot that has never
//! loaded and has failed is fetched again by the next `ensure`, e.g. when a
//! picker bound to it mounts.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use schema::{Company, Industry, ListKey, ListPayload, Location, Metric, MetricSnapshot};

/// Observable state of one cached list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStatus {
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListSlot<T> {
    pub items: Option<Vec<T>>,
    pub loading: bool,
    pub error: Option<String>,
    pub seq: u64,
}

impl<T> Default for ListSlot<T> {
    fn default() -> Self {
        Self { items: None, loading: false, error: None, seq: 0 }
    }
}

impl<T> ListSlot<T> {
    fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.seq
    }

    fn fill(&mut self, seq: u64, items: Vec<T>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.items = Some(items);
        self.loading = false;
        self.error = None;
        true
    }

    fn fail(&mut self, seq: u64, message: String) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        self.error = Some(message);
        true
    }

    fn reset(&mut self) {
        self.seq += 1;
        self.items = None;
        self.loading = false;
        self.error = None;
    }

    #[must_use]
    pub fn status(&self) -> ListStatus {
        match (&self.items, self.loading, &self.error) {
            (Some(_), _, _) => ListStatus::Ready,
            (None, true, _) => ListStatus::Loading,
            (None, false, Some(_)) => ListStatus::Failed,
            (None, false, None) => ListStatus::Idle,
        }
    }

    /// Loaded items, or an empty slice while nothing has loaded.
    #[must_use]
    pub fn items_or_empty(&self) -> &[T] {
        self.items.as_deref().unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub companies: ListSlot<Company>,
    pub industries: ListSlot<Industry>,
    pub locations: ListSlot<Location>,
    pub metrics: ListSlot<Metric>,
    pub snapshots: ListSlot<MetricSnapshot>,
}

macro_rules! with_slot {
    (mut $catalog:expr, $key:expr, |$slot:ident| $body:expr) => {
        match $key {
            ListKey::Companies => {
                let $slot = &mut $catalog.companies;
                $body
            }
            ListKey::Industries => {
                let $slot = &mut $catalog.industries;
                $body
            }
            ListKey::Locations => {
                let $slot = &mut $catalog.locations;
                $body
            }
            ListKey::Metrics => {
                let $slot = &mut $catalog.metrics;
                $body
            }
            ListKey::MetricSnapshots => {
                let $slot = &mut $catalog.snapshots;
                $body
            }
        }
    };
    ($catalog:expr, $key:expr, |$slot:ident| $body:expr) => {
        match $key {
            ListKey::Companies => {
                let $slot = &$catalog.companies;
                $body
            }
            ListKey::Industries => {
                let $slot = &$catalog.industries;
                $body
            }
            ListKey::Locations => {
                let $slot = &$catalog.locations;
                $body
            }
            ListKey::Metrics => {
                let $slot = &$catalog.metrics;
                $body
            }
            ListKey::MetricSnapshots => {
                let $slot = &$catalog.snapshots;
                $body
            }
        }
    };
}

impl CatalogState {
    /// Mark `key` as loading and return the ticket its fetch must present.
    pub fn begin(&mut self, key: ListKey) -> u64 {
        with_slot!(mut self, key, |slot| slot.begin())
    }

    /// Apply a fetch result. Returns `false` when the ticket is stale.
    pub fn finish(&mut self, key: ListKey, seq: u64, result: Result<ListPayload, String>) -> bool {
        let payload = match result {
            Ok(payload) if payload.key() == key => payload,
            Ok(payload) => {
                let message = format!("expected {key} list, got {}", payload.key());
                return with_slot!(mut self, key, |slot| slot.fail(seq, message));
            }
            Err(message) => return with_slot!(mut self, key, |slot| slot.fail(seq, message)),
        };
        match payload {
            ListPayload::Companies(items) => self.companies.fill(seq, items),
            ListPayload::Industries(items) => self.industries.fill(seq, items),
            ListPayload::Locations(items) => self.locations.fill(seq, items),
            ListPayload::Metrics(items) => self.metrics.fill(seq, items),
            ListPayload::MetricSnapshots(items) => self.snapshots.fill(seq, items),
        }
    }

    #[must_use]
    pub fn status(&self, key: ListKey) -> ListStatus {
        with_slot!(self, key, |slot| slot.status())
    }

    #[must_use]
    pub fn error(&self, key: ListKey) -> Option<&str> {
        with_slot!(self, key, |slot| slot.error.as_deref())
    }

    /// Whether `key` has never been requested, or failed without ever
    /// loading.
    #[must_use]
    pub fn needs_fetch(&self, key: ListKey) -> bool {
        matches!(self.status(key), ListStatus::Idle | ListStatus::Failed)
    }

    /// Whether every list in `keys` has loaded.
    #[must_use]
    pub fn all_ready(&self, keys: &[ListKey]) -> bool {
        keys.iter().all(|&key| self.status(key) == ListStatus::Ready)
    }

    /// First list in `keys` that failed without ever loading.
    #[must_use]
    pub fn first_failure(&self, keys: &[ListKey]) -> Option<(ListKey, &str)> {
        keys.iter().find_map(|&key| match self.status(key) {
            ListStatus::Failed => Some((key, self.error(key).unwrap_or_default())),
            _ => None,
        })
    }

    /// Drop every cached list and orphan any fetch still in flight.
    pub fn clear(&mut self) {
        for key in ListKey::ALL {
            with_slot!(mut self, key, |slot| slot.reset());
        }
    }
}
