//! View controllers
//!
//! Each controller exclusively owns its view state. Fetches are split into
//! `begin_*` (sync, issues a sequence number) → `Pending*Fetch::run`
//! (spawnable) → `apply` (sync, latest completion only).

mod detail;
mod list;

pub use detail::{DetailCompletion, EmployeeDetailController, PendingDetailFetch};
pub use list::{EmployeeListController, ListCompletion, ListQuery, PendingListFetch};
