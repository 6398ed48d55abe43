//! View state owned by the controllers

use std::collections::BTreeSet;

use employee_directory_client::{EmployeeId, EmployeeRecord};

/// Lifecycle phase derived from a controller's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPhase {
    /// Nothing requested yet.
    Idle,
    Loading,
    Loaded,
    Errored,
}

impl ControllerPhase {
    fn derive(loading: bool, errored: bool, loaded: bool) -> Self {
        if loading {
            Self::Loading
        } else if errored {
            Self::Errored
        } else if loaded {
            Self::Loaded
        } else {
            Self::Idle
        }
    }
}

/// 员工列表状态
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Server order, never re-sorted.
    pub records: Vec<EmployeeRecord>,
    /// Ids checked for batch deletion. Ids of records that no longer exist
    /// stay in the set until it is cleared.
    pub selected: BTreeSet<EmployeeId>,
    pub query: String,
    pub error: Option<String>,
    pub loading: bool,
    /// Highlighted row for keyboard navigation.
    pub selected_index: usize,
    /// At least one fetch has succeeded.
    pub loaded: bool,
}

impl ListState {
    pub fn phase(&self) -> ControllerPhase {
        ControllerPhase::derive(self.loading, self.error.is_some(), self.loaded)
    }

    /// Keep the cursor inside the record list.
    pub(crate) fn clamp_cursor(&mut self) {
        if self.records.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.records.len() {
            self.selected_index = self.records.len() - 1;
        }
    }
}

/// 员工详情状态
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub employee_id: Option<EmployeeId>,
    pub record: Option<EmployeeRecord>,
    pub error: Option<String>,
    pub loading: bool,
}

impl DetailState {
    pub fn phase(&self) -> ControllerPhase {
        ControllerPhase::derive(self.loading, self.error.is_some(), self.record.is_some())
    }
}
