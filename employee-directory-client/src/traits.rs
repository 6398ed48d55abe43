use async_trait::async_trait;

use crate::cancel::CancelToken;
use crate::error::Result;
use crate::types::{EmployeeId, EmployeeRecord};

/// Employee service Trait
///
/// Implementations absorb HTTP 429 internally: callers see the successful
/// outcome, `NotFound`, `RetryExhausted`, `Cancelled` or another terminal error.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// 获取全部员工（保持服务端返回顺序）
    async fn list_employees(&self, cancel: &CancelToken) -> Result<Vec<EmployeeRecord>>;

    /// 按 ID 获取单个员工
    async fn get_employee(&self, id: &EmployeeId, cancel: &CancelToken) -> Result<EmployeeRecord>;
}
