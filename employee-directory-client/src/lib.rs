//! # employee-directory-client
//!
//! Client for the employee directory REST service.
//!
//! ## Endpoints
//!
//! | Operation | Request | Payload |
//! |-----------|---------|---------|
//! | [`EmployeeApi::list_employees`] | `GET /employees` | `{ "data": [EmployeeRecord, ...] }` |
//! | [`EmployeeApi::get_employee`] | `GET /employee/{id}` | `{ "data": EmployeeRecord }` or HTTP 404 |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use employee_directory_client::{
//!     create_client, CancelToken, ClientConfig, EmployeeApi, EmployeeId,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = create_client(ClientConfig::from_env())?;
//!     let cancel = CancelToken::new();
//!
//!     for employee in api.list_employees(&cancel).await? {
//!         println!("{} {} ({})", employee.id, employee.name, employee.age);
//!     }
//!
//!     let one = api.get_employee(&EmployeeId::from("1"), &cancel).await?;
//!     println!("{}: {}", one.name, one.display_salary());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError):
//!
//! - [`ClientError::NotFound`]: HTTP 404 for the requested id
//! - [`ClientError::RetryExhausted`]: still HTTP 429 after every attempt of the [`RetryPolicy`]
//! - [`ClientError::Cancelled`]: the [`CancelToken`] fired
//!
//! HTTP 429 is retried transparently: the wait honours `retry-after`
//! (5 s when absent), is capped, and the number of attempts is bounded.

mod cancel;
mod config;
mod error;
mod factory;
mod http_client;
mod rest;
mod retry;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ClientError, Result};

pub use cancel::CancelToken;
pub use config::{
    ClientConfig, DEFAULT_BASE_URL, ENV_BASE_URL, ENV_MAX_ATTEMPTS, ENV_MAX_RETRY_DELAY_SECS,
};
pub use factory::create_client;
pub use http_client::{HttpUtils, RawResponse};
pub use rest::RestEmployeeClient;
pub use retry::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_RETRY_DELAY, DEFAULT_RETRY_DELAY, RetryPolicy};
pub use traits::EmployeeApi;
pub use types::{EmployeeId, EmployeeRecord, Resource};
