//! 员工列表控制器

use std::fmt;
use std::sync::Arc;

use employee_directory_client::{CancelToken, ClientError, EmployeeApi, EmployeeId, EmployeeRecord};

use crate::messages;
use crate::navigation::NavigationIntent;
use crate::sequence::RequestSequence;
use crate::state::{ControllerPhase, ListState};

/// What a list fetch asks the service for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListQuery {
    /// `GET /employees`
    All,
    /// Single lookup; the query text is used verbatim as the id.
    ById(String),
}

/// A fetch started by [`EmployeeListController::begin_load_all`] or
/// [`EmployeeListController::begin_search`].
///
/// Owns everything it needs, so [`run`](Self::run) can be spawned on tokio
/// while the controller keeps serving input.
pub struct PendingListFetch {
    seq: u64,
    query: ListQuery,
    api: Arc<dyn EmployeeApi>,
    cancel: CancelToken,
}

impl fmt::Debug for PendingListFetch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingListFetch")
            .field("seq", &self.seq)
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

impl PendingListFetch {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub async fn run(self) -> ListCompletion {
        let result = match &self.query {
            ListQuery::All => self.api.list_employees(&self.cancel).await,
            ListQuery::ById(q) => self
                .api
                .get_employee(&EmployeeId::new(q.as_str()), &self.cancel)
                .await
                .map(|record| vec![record]),
        };

        ListCompletion {
            seq: self.seq,
            query: self.query,
            result,
        }
    }
}

/// Terminal outcome of a [`PendingListFetch`].
#[derive(Debug, Clone)]
pub struct ListCompletion {
    pub seq: u64,
    pub query: ListQuery,
    pub result: Result<Vec<EmployeeRecord>, ClientError>,
}

/// 员工列表控制器
///
/// Owns the list view state. Deletion is local only: nothing is sent to the
/// service and a reload brings deleted records back.
pub struct EmployeeListController {
    api: Arc<dyn EmployeeApi>,
    state: ListState,
    sequence: RequestSequence,
    cancel: CancelToken,
}

impl EmployeeListController {
    #[must_use]
    pub fn new(api: Arc<dyn EmployeeApi>) -> Self {
        Self {
            api,
            state: ListState::default(),
            sequence: RequestSequence::new(),
            cancel: CancelToken::new(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.state.records
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

    // ===== 请求生命周期 =====

    /// Start fetching the whole collection.
    pub fn begin_load_all(&mut self) -> PendingListFetch {
        self.begin(ListQuery::All)
    }

    /// Start a lookup by id. Empty or whitespace-only queries fetch the
    /// whole collection instead.
    pub fn begin_search(&mut self, query: &str) -> PendingListFetch {
        self.state.query = query.to_string();
        if query.trim().is_empty() {
            return self.begin_load_all();
        }
        self.begin(ListQuery::ById(query.to_string()))
    }

    fn begin(&mut self, query: ListQuery) -> PendingListFetch {
        let seq = self.sequence.issue();
        self.state.loading = true;
        log::debug!("list fetch #{seq} started: {query:?}");

        PendingListFetch {
            seq,
            query,
            api: Arc::clone(&self.api),
            cancel: self.cancel.clone(),
        }
    }

    /// Apply a finished fetch. Returns whether the state changed.
    ///
    /// Completions superseded by a newer request are dropped, as are
    /// cancelled ones.
    pub fn apply(&mut self, completion: ListCompletion) -> bool {
        let ListCompletion { seq, query, result } = completion;

        if !self.sequence.is_latest(seq) {
            log::debug!(
                "dropping stale list completion #{seq} (latest #{})",
                self.sequence.latest()
            );
            return false;
        }

        match result {
            Ok(records) => {
                log::info!("list fetch #{seq} loaded {} employee(s)", records.len());
                self.state.records = records;
                self.state.error = None;
                self.state.loaded = true;
                self.state.clamp_cursor();
            }
            Err(ClientError::Cancelled) => {
                log::debug!("list fetch #{seq} cancelled");
                return false;
            }
            Err(e) => {
                let message = match &query {
                    ListQuery::All => {
                        messages::log_failure("Failed to fetch employees", &e);
                        messages::for_list(&e)
                    }
                    ListQuery::ById(q) => {
                        messages::log_failure(&format!("Failed to search employee {q}"), &e);
                        messages::for_search(q, &e)
                    }
                };
                self.state.error = Some(message);
            }
        }

        self.state.loading = false;
        true
    }

    /// Fetch the whole collection and apply the outcome.
    pub async fn load_all(&mut self) -> bool {
        let pending = self.begin_load_all();
        let completion = pending.run().await;
        self.apply(completion)
    }

    /// Search by id and apply the outcome.
    pub async fn search(&mut self, query: &str) -> bool {
        let pending = self.begin_search(query);
        let completion = pending.run().await;
        self.apply(completion)
    }

    // ===== 选择与删除 =====

    /// Add `id` to the selection set, or remove it if already present.
    pub fn toggle_select(&mut self, id: &EmployeeId) {
        if !self.state.selected.remove(id) {
            self.state.selected.insert(id.clone());
        }
    }

    pub fn is_selected(&self, id: &EmployeeId) -> bool {
        self.state.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.state.selected.len()
    }

    /// Remove the record with `id` from the displayed list. The selection
    /// set is left alone.
    pub fn delete_one(&mut self, id: &EmployeeId) {
        let before = self.state.records.len();
        self.state.records.retain(|r| &r.id != id);
        if self.state.records.len() != before {
            log::info!("Removed employee {id} from the list");
        }
        self.state.clamp_cursor();
    }

    /// Remove every selected record, then clear the selection set.
    pub fn delete_selected(&mut self) {
        let selected = std::mem::take(&mut self.state.selected);
        let before = self.state.records.len();
        self.state.records.retain(|r| !selected.contains(&r.id));
        log::info!(
            "Removed {} selected employee(s) from the list",
            before - self.state.records.len()
        );
        self.state.clamp_cursor();
    }

    pub fn open_detail(&self, id: &EmployeeId) -> NavigationIntent {
        NavigationIntent::ShowDetail(id.clone())
    }

    // ===== 查询与光标 =====

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
    }

    pub fn highlighted(&self) -> Option<&EmployeeRecord> {
        self.state.records.get(self.state.selected_index)
    }

    pub fn select_next(&mut self) {
        if !self.state.records.is_empty() {
            self.state.selected_index = (self.state.selected_index + 1) % self.state.records.len();
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.state.records.len();
        if len > 0 {
            self.state.selected_index = self.state.selected_index.checked_sub(1).unwrap_or(len - 1);
        }
    }

    pub fn select_first(&mut self) {
        self.state.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.state.selected_index = self.state.records.len().saturating_sub(1);
    }

    /// Cancel every outstanding fetch.
    pub fn teardown(&mut self) {
        if !self.cancel.is_cancelled() {
            log::debug!("list controller torn down");
        }
        self.cancel.cancel();
    }
}

impl Drop for EmployeeListController {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
