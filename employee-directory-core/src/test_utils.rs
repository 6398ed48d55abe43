//! 测试辅助模块
//!
//! 提供 mock `EmployeeApi` 实现和便捷的测试工厂方法。

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use employee_directory_client::{
    CancelToken, ClientError, EmployeeApi, EmployeeId, EmployeeRecord, Result,
};
use tokio::sync::Mutex;

// ===== MockEmployeeApi =====

/// Scripted `EmployeeApi`.
///
/// Responses are queued per endpoint and consumed in order. An empty list
/// queue answers `Ok(vec![])`; an empty detail queue answers `NotFound`.
#[derive(Default)]
pub struct MockEmployeeApi {
    list_responses: Mutex<VecDeque<Result<Vec<EmployeeRecord>>>>,
    get_responses: Mutex<VecDeque<Result<EmployeeRecord>>>,
    /// 每次调用记录一条（`list` 或被请求的 id）
    calls: Mutex<Vec<String>>,
    /// 如果 Some，每次调用前先等待（可被取消）
    delay: Mutex<Option<Duration>>,
}

impl MockEmployeeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push_list(&self, response: Result<Vec<EmployeeRecord>>) {
        self.list_responses.lock().await.push_back(response);
    }

    pub async fn push_get(&self, response: Result<EmployeeRecord>) {
        self.get_responses.lock().await.push_back(response);
    }

    pub async fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.lock().await = delay;
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    async fn wait(&self, cancel: &CancelToken) -> Result<()> {
        let delay = *self.delay.lock().await;
        match delay {
            Some(d) => {
                cancel
                    .run(async {
                        tokio::time::sleep(d).await;
                        Ok(())
                    })
                    .await
            }
            None if cancel.is_cancelled() => Err(ClientError::Cancelled),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EmployeeApi for MockEmployeeApi {
    async fn list_employees(&self, cancel: &CancelToken) -> Result<Vec<EmployeeRecord>> {
        self.calls.lock().await.push("list".to_string());
        self.wait(cancel).await?;
        self.list_responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn get_employee(&self, id: &EmployeeId, cancel: &CancelToken) -> Result<EmployeeRecord> {
        self.calls.lock().await.push(id.to_string());
        self.wait(cancel).await?;
        self.get_responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::NotFound { id: id.to_string() }))
    }
}

// ===== 工厂方法 =====

pub fn record(id: &str, name: &str, age: u32, salary: f64) -> EmployeeRecord {
    EmployeeRecord {
        id: EmployeeId::from(id),
        name: name.to_string(),
        age,
        salary,
        profile_image: None,
    }
}

/// Three records in server order: ids 1, 2, 3.
pub fn three_records() -> Vec<EmployeeRecord> {
    vec![
        record("1", "Tiger Nixon", 61, 320_800.0),
        record("2", "Garrett Winters", 63, 170_750.0),
        record("3", "Ashton Cox", 66, 86_000.0),
    ]
}

pub fn network_error() -> ClientError {
    ClientError::Network {
        detail: "connection refused".to_string(),
    }
}

pub fn mock_api() -> Arc<MockEmployeeApi> {
    Arc::new(MockEmployeeApi::new())
}
