//! Local UI chrome state (open sheet, selected company, landing tab).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session and catalog so
//! overlays can open and close without touching fetched data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Entity-creation overlay opened from the navigation shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sheet {
    Company,
    Location,
    Industry,
}

impl Sheet {
    pub const ALL: [Self; 3] = [Self::Company, Self::Location, Self::Industry];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Company => "Company",
            Self::Location => "Location",
            Self::Industry => "Industry",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Company => "Add a new Company",
            Self::Location => "Add a new Location",
            Self::Industry => "Add a new Industry",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Company => "Enter all the necessary information about the company.",
            Self::Location => "Locations for company HQs.",
            Self::Industry => "Industries for companies.",
        }
    }
}

/// Tabs on the landing page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HomeTab {
    #[default]
    Login,
    Register,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub open_sheet: Option<Sheet>,
    pub selected_company: Option<String>,
    pub snapshot_dialog_open: bool,
    pub home_tab: HomeTab,
}

impl UiState {
    pub fn open(&mut self, sheet: Sheet) {
        self.open_sheet = Some(sheet);
    }

    pub fn close_sheet(&mut self) {
        self.open_sheet = None;
    }

    /// Make `id` the detail subject. The snapshot dialog belongs to the
    /// previous subject, so it closes.
    pub fn select_company(&mut self, id: &str) {
        if self.selected_company.as_deref() != Some(id) {
            self.snapshot_dialog_open = false;
        }
        self.selected_company = Some(id.to_owned());
    }

    /// Drop everything tied to the signed-in user.
    pub fn reset_for_logout(&mut self) {
        self.open_sheet = None;
        self.selected_company = None;
        self.snapshot_dialog_open = false;
    }
}
