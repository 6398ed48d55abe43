//! 员工详情控制器

use std::fmt;
use std::sync::Arc;

use employee_directory_client::{CancelToken, ClientError, EmployeeApi, EmployeeId, EmployeeRecord};

use crate::messages;
use crate::navigation::NavigationIntent;
use crate::sequence::RequestSequence;
use crate::state::{ControllerPhase, DetailState};

/// A single-employee fetch, detached from the controller.
pub struct PendingDetailFetch {
    seq: u64,
    id: EmployeeId,
    api: Arc<dyn EmployeeApi>,
    cancel: CancelToken,
}

impl fmt::Debug for PendingDetailFetch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingDetailFetch")
            .field("seq", &self.seq)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl PendingDetailFetch {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    pub async fn run(self) -> DetailCompletion {
        let result = self.api.get_employee(&self.id, &self.cancel).await;
        DetailCompletion {
            seq: self.seq,
            id: self.id,
            result,
        }
    }
}

/// Terminal outcome of a [`PendingDetailFetch`].
#[derive(Debug, Clone)]
pub struct DetailCompletion {
    pub seq: u64,
    pub id: EmployeeId,
    pub result: Result<EmployeeRecord, ClientError>,
}

/// 员工详情控制器
pub struct EmployeeDetailController {
    api: Arc<dyn EmployeeApi>,
    state: DetailState,
    sequence: RequestSequence,
    cancel: CancelToken,
}

impl EmployeeDetailController {
    #[must_use]
    pub fn new(api: Arc<dyn EmployeeApi>) -> Self {
        Self {
            api,
            state: DetailState::default(),
            sequence: RequestSequence::new(),
            cancel: CancelToken::new(),
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn employee_id(&self) -> Option<&EmployeeId> {
        self.state.employee_id.as_ref()
    }

    pub fn record(&self) -> Option<&EmployeeRecord> {
        self.state.record.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn phase(&self) -> ControllerPhase {
        self.state.phase()
    }

    /// React to the route parameter. The first id, and any id different
    /// from the current one, resets the state and starts a fetch.
    pub fn route_changed(&mut self, id: &EmployeeId) -> Option<PendingDetailFetch> {
        if self.state.employee_id.as_ref() == Some(id) {
            return None;
        }
        Some(self.begin_load_one(id))
    }

    /// Reset the state for `id` and start fetching it.
    pub fn begin_load_one(&mut self, id: &EmployeeId) -> PendingDetailFetch {
        let seq = self.sequence.issue();
        log::debug!("detail fetch #{seq} started for {id}");

        if self.state.employee_id.as_ref() != Some(id) {
            self.state = DetailState {
                employee_id: Some(id.clone()),
                ..DetailState::default()
            };
        }
        self.state.loading = true;

        PendingDetailFetch {
            seq,
            id: id.clone(),
            api: Arc::clone(&self.api),
            cancel: self.cancel.clone(),
        }
    }

    /// Apply a finished fetch. Returns whether the state changed.
    pub fn apply(&mut self, completion: DetailCompletion) -> bool {
        let DetailCompletion { seq, id, result } = completion;

        if !self.sequence.is_latest(seq) {
            log::debug!(
                "dropping stale detail completion #{seq} for {id} (latest #{})",
                self.sequence.latest()
            );
            return false;
        }

        match result {
            Ok(record) => {
                self.state.record = Some(record);
                self.state.error = None;
            }
            Err(ClientError::Cancelled) => {
                log::debug!("detail fetch #{seq} cancelled");
                return false;
            }
            Err(e) => {
                // a refresh failure keeps the employee already on screen
                messages::log_failure(&format!("Failed to fetch employee {id}"), &e);
                self.state.error = Some(messages::for_detail(id.as_str(), &e));
            }
        }

        self.state.loading = false;
        true
    }

    /// Fetch `id` and apply the outcome.
    pub async fn load_one(&mut self, id: &EmployeeId) -> bool {
        let pending = self.begin_load_one(id);
        let completion = pending.run().await;
        self.apply(completion)
    }

    pub fn go_back(&self) -> NavigationIntent {
        NavigationIntent::ShowList
    }

    /// Cancel every outstanding fetch.
    pub fn teardown(&mut self) {
        if !self.cancel.is_cancelled() {
            log::debug!("detail controller torn down");
        }
        self.cancel.cancel();
    }
}

impl Drop for EmployeeDetailController {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mock_api, network_error, record};
    use std::time::Duration;

    #[tokio::test]
    async fn load_one_stores_record() {
        let api = mock_api();
        api.push_get(Ok(record("1", "Tiger Nixon", 61, 320_800.0)))
            .await;
        let mut detail = EmployeeDetailController::new(api.clone());

        assert!(detail.load_one(&EmployeeId::from("1")).await);

        assert_eq!(detail.record().map(|r| r.name.as_str()), Some("Tiger Nixon"));
        assert_eq!(detail.error(), None);
        assert!(!detail.is_loading());
        assert_eq!(detail.phase(), ControllerPhase::Loaded);
    }

    #[tokio::test]
    async fn not_found_sets_message_and_no_record() {
        let mut detail = EmployeeDetailController::new(mock_api());

        detail.load_one(&EmployeeId::from("999")).await;

        assert_eq!(detail.error(), Some("Employee with ID 999 not found."));
        assert!(detail.record().is_none());
        assert_eq!(detail.phase(), ControllerPhase::Errored);
    }

    #[tokio::test]
    async fn other_error_is_generic() {
        let api = mock_api();
        api.push_get(Err(network_error())).await;
        let mut detail = EmployeeDetailController::new(api.clone());

        detail.load_one(&EmployeeId::from("1")).await;
        assert_eq!(detail.error(), Some(messages::DETAIL_FETCH_FAILED));
    }

    #[tokio::test]
    async fn failed_refresh_keeps_shown_record() {
        let api = mock_api();
        api.push_get(Ok(record("1", "Tiger Nixon", 61, 320_800.0)))
            .await;
        api.push_get(Err(network_error())).await;
        let mut detail = EmployeeDetailController::new(api.clone());
        let id = EmployeeId::from("1");

        detail.load_one(&id).await;
        assert!(detail.load_one(&id).await);

        assert_eq!(detail.record().map(|r| r.name.as_str()), Some("Tiger Nixon"));
        assert_eq!(detail.error(), Some(messages::DETAIL_FETCH_FAILED));
        assert!(!detail.is_loading());
    }

    #[tokio::test]
    async fn retry_exhaustion_reports_rate_limit() {
        let api = mock_api();
        api.push_get(Err(ClientError::RetryExhausted {
            attempts: 3,
            retry_after: None,
        }))
        .await;
        let mut detail = EmployeeDetailController::new(api.clone());

        detail.load_one(&EmployeeId::from("1")).await;
        assert_eq!(detail.error(), Some(messages::TOO_MANY_REQUESTS));
    }

    #[tokio::test]
    async fn route_change_refetches_only_on_new_id() {
        let api = mock_api();
        api.push_get(Ok(record("1", "Tiger Nixon", 61, 320_800.0)))
            .await;
        let mut detail = EmployeeDetailController::new(api.clone());

        let first = detail.route_changed(&EmployeeId::from("1"));
        assert!(first.is_some());
        if let Some(pending) = first {
            detail.apply(pending.run().await);
        }

        assert!(detail.route_changed(&EmployeeId::from("1")).is_none());
        assert!(detail.record().is_some());

        let second = detail.route_changed(&EmployeeId::from("2"));
        assert!(second.is_some());
        assert!(detail.record().is_none(), "state resets for a new id");
        assert_eq!(detail.employee_id(), Some(&EmployeeId::from("2")));
        assert!(detail.is_loading());
    }

    #[tokio::test]
    async fn stale_completion_does_not_overwrite() {
        let api = mock_api();
        api.push_get(Ok(record("1", "Tiger Nixon", 61, 320_800.0)))
            .await;
        api.push_get(Ok(record("2", "Garrett Winters", 63, 170_750.0)))
            .await;
        let mut detail = EmployeeDetailController::new(api.clone());

        let older = detail.begin_load_one(&EmployeeId::from("1"));
        let newer = detail.begin_load_one(&EmployeeId::from("2"));
        let older = older.run().await;
        let newer = newer.run().await;

        assert!(detail.apply(newer));
        assert!(!detail.apply(older));
        assert_eq!(detail.record().map(|r| r.id.as_str()), Some("2"));
    }

    #[test]
    fn go_back_is_pure_intent() {
        let detail = EmployeeDetailController::new(mock_api());
        assert_eq!(detail.go_back(), NavigationIntent::ShowList);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_controller_cancels_fetch() {
        let api = mock_api();
        api.set_delay(Some(Duration::from_secs(30))).await;
        let mut detail = EmployeeDetailController::new(api.clone());

        let pending = detail.begin_load_one(&EmployeeId::from("1"));
        let task = tokio::spawn(pending.run());
        tokio::time::sleep(Duration::from_millis(10)).await;
        drop(detail);

        let completion = task
            .await
            .unwrap_or_else(|e| panic!("fetch task failed: {e}"));
        assert_eq!(completion.result, Err(ClientError::Cancelled));
    }
}
