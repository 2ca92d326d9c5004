//! Searchable single-select over a cached reference list.
//!
//! DESIGN
//! ======
//! The selection is one `Option<String>` id; the visible label is always
//! derived from it against the current list, so the two cannot disagree.
//! Choosing the selected item again clears the selection.

#[cfg(test)]
#[path = "picker_test.rs"]
mod picker_test;

use schema::{ListKey, Named};

use crate::state::catalog::{CatalogState, ListSlot, ListStatus};

/// One selectable `{id, name}` record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerItem {
    pub id: String,
    pub name: String,
}

/// Which cached list a picker is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerSource {
    Industries,
    Locations,
    Metrics,
}

impl PickerSource {
    #[must_use]
    pub fn key(self) -> ListKey {
        match self {
            Self::Industries => ListKey::Industries,
            Self::Locations => ListKey::Locations,
            Self::Metrics => ListKey::Metrics,
        }
    }

    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Self::Industries => "industry",
            Self::Locations => "location",
            Self::Metrics => "metric",
        }
    }

    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Self::Industries => "industries",
            Self::Locations => "locations",
            Self::Metrics => "metrics",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> String {
        format!("Select {}", self.noun())
    }

    #[must_use]
    pub fn empty_text(self) -> String {
        format!("No {} found.", self.noun())
    }

    #[must_use]
    pub fn error_text(self) -> String {
        format!("There was an error fetching the {}.", self.plural())
    }

    #[must_use]
    pub fn status(self, catalog: &CatalogState) -> ListStatus {
        catalog.status(self.key())
    }

    /// Items currently cached for this source; `None` until the list loads.
    #[must_use]
    pub fn items(self, catalog: &CatalogState) -> Option<Vec<PickerItem>> {
        match self {
            Self::Industries => to_items(&catalog.industries),
            Self::Locations => to_items(&catalog.locations),
            Self::Metrics => to_items(&catalog.metrics),
        }
    }
}

fn to_items<T: Named>(slot: &ListSlot<T>) -> Option<Vec<PickerItem>> {
    slot.items.as_ref().map(|items| {
        items
            .iter()
            .map(|item| PickerItem { id: item.id().to_owned(), name: item.name().to_owned() })
            .collect()
    })
}

/// What the picker popover renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerView {
    Loading,
    /// The list failed before it ever loaded.
    Failed,
    Empty,
    Items(Vec<PickerItem>),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PickerState {
    pub selected: Option<String>,
    pub query: String,
    pub open: bool,
}

impl PickerState {
    /// Toggle `id` as the selection and close the popover.
    pub fn select(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_owned());
        }
        self.open = false;
        self.query.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Name of the selected item, if it is in `items`.
    #[must_use]
    pub fn label(&self, items: Option<&[PickerItem]>) -> Option<String> {
        let selected = self.selected.as_deref()?;
        items?.iter().find(|item| item.id == selected).map(|item| item.name.clone())
    }

    #[must_use]
    pub fn view(&self, items: Option<&[PickerItem]>, status: ListStatus) -> PickerView {
        let Some(items) = items else {
            return if status == ListStatus::Failed { PickerView::Failed } else { PickerView::Loading };
        };
        let matches = filter_items(items, &self.query);
        if matches.is_empty() { PickerView::Empty } else { PickerView::Items(matches) }
    }
}

/// Case-insensitive substring match on name; a blank query keeps everything.
#[must_use]
pub fn filter_items(items: &[PickerItem], query: &str) -> Vec<PickerItem> {
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
