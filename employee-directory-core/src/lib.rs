//! Employee Directory Core Library
//!
//! Client-side state and behaviour of the employee directory, independent of
//! any front end:
//! - List controller (load all, search by id, multi-select, local deletion)
//! - Detail controller (load one employee for the current route)
//! - Navigation intents and routes
//!
//! Controllers talk to the service only through
//! [`EmployeeApi`](employee_directory_client::EmployeeApi), so tests and
//! front ends can swap the transport.

pub mod controllers;
pub mod messages;
pub mod navigation;
pub mod sequence;
pub mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export common types
pub use controllers::{
    DetailCompletion, EmployeeDetailController, EmployeeListController, ListCompletion, ListQuery,
    PendingDetailFetch, PendingListFetch,
};
pub use navigation::{NavigationIntent, Route};
pub use sequence::RequestSequence;
pub use state::{ControllerPhase, DetailState, ListState};
