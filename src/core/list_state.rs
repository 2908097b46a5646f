//! Paginated resource list.
//!
//! Keeps one page of a remote resource in sync with a [`QueryState`], tracks
//! the request lifecycle, and exposes create/update/delete/sync operations
//! that mark the list for refetch when they succeed.
//!
//! Lifecycle per fetch: `Idle -> Loading -> (Success | Error)`, back to
//! `Idle` whenever a dependency changes. Several fetches may overlap; each
//! takes a ticket and only the most recently issued one is allowed to write
//! its result.

use crate::api::envelope::Page;
use crate::api::models::RecordId;
use crate::core::context::RequestContext;
use crate::core::query_state::{
    QueryState, SortOrder, validate_items_per_page, validate_page,
};
use crate::core::resource::Resource;
use crate::core::services::resource_service::ResourceService;
use crate::core::services::traits::CrudService;
use crate::core::services::types::ServiceError;
use crate::core::filters::ListFilters;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Everything a fetch depends on. A change to any part makes the list stale.
type DependencyKey<F> = (QueryState<F>, bool);

#[derive(Debug, Clone, PartialEq)]
pub struct LoadTicket<F> {
    seq: u64,
    key: DependencyKey<F>,
}

impl<F> LoadTicket<F> {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Point-in-time copy of the list for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub total_pages: u64,
    pub page: u32,
    pub items_per_page: u32,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug)]
pub(crate) struct ListState<T, F> {
    query: QueryState<F>,
    page: Page<T>,
    loading: bool,
    error: Option<String>,
    phase: LoadPhase,
    modified: bool,
    issued: u64,
    loaded_key: Option<DependencyKey<F>>,
    settled_loads: u64,
}

impl<T: Clone, F: ListFilters> ListState<T, F> {
    pub(crate) fn new(query: QueryState<F>) -> Self {
        Self {
            query,
            page: Page::default(),
            loading: false,
            error: None,
            phase: LoadPhase::Idle,
            modified: false,
            issued: 0,
            loaded_key: None,
            settled_loads: 0,
        }
    }

    fn key(&self) -> DependencyKey<F> {
        (self.query.clone(), self.modified)
    }

    pub(crate) fn is_stale(&self) -> bool {
        self.loaded_key.as_ref() != Some(&self.key())
    }

    pub(crate) fn begin_load(&mut self) -> LoadTicket<F> {
        self.issued = self.issued.wrapping_add(1);
        self.loading = true;
        self.error = None;
        self.phase = LoadPhase::Loading;

        LoadTicket {
            seq: self.issued,
            key: self.key(),
        }
    }

    /// Apply a fetch outcome. Returns `false` when a newer fetch has been
    /// issued since `ticket`, in which case nothing changes.
    pub(crate) fn finish_load(
        &mut self,
        ticket: LoadTicket<F>,
        outcome: Result<Page<T>, String>,
    ) -> bool {
        if ticket.seq != self.issued {
            log::debug!(
                "Discarding response for request #{} (latest is #{})",
                ticket.seq,
                self.issued
            );
            return false;
        }

        self.loading = false;
        self.settled_loads += 1;
        self.loaded_key = Some(ticket.key);

        match outcome {
            Ok(page) => {
                self.page = page;
                self.error = None;
                self.phase = LoadPhase::Success;
            }
            Err(message) => {
                self.page = Page::default();
                self.error = Some(message);
                self.phase = LoadPhase::Error;
            }
        }
        true
    }

    fn touch(&mut self) {
        if !self.loading {
            self.phase = LoadPhase::Idle;
        }
    }

    fn flip_modified(&mut self) {
        self.modified = !self.modified;
        self.touch();
    }

    fn set_query(&mut self, query: QueryState<F>) -> bool {
        if self.query == query {
            return false;
        }
        self.query = query;
        self.touch();
        true
    }

    fn prune(&mut self, matches: impl Fn(&T) -> bool) -> bool {
        let before = self.page.items.len();
        self.page.items.retain(|item| !matches(item));
        let removed = (before - self.page.items.len()) as u64;
        if removed == 0 {
            return false;
        }

        self.page.total = self.page.total.saturating_sub(removed);
        self.page.total_pages = self
            .page
            .total
            .div_ceil(u64::from(self.query.items_per_page.max(1)));
        true
    }

    fn snapshot(&self) -> ListSnapshot<T> {
        ListSnapshot {
            items: self.page.items.clone(),
            total: self.page.total,
            total_pages: self.page.total_pages,
            page: self.query.page,
            items_per_page: self.query.items_per_page,
            loading: self.loading,
            error: self.error.clone(),
        }
    }
}

/// A paginated view over one resource.
///
/// Clones share state, so a clone can be moved into a spawned task while the
/// original keeps changing the query.
pub struct ResourceList<R: Resource, S = ResourceService<R>> {
    service: S,
    context: RequestContext,
    state: Arc<Mutex<ListState<R::Record, R::Filters>>>,
}

impl<R: Resource, S: Clone> Clone for ResourceList<R, S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            context: self.context.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<R, S> ResourceList<R, S>
where
    R: Resource,
    S: CrudService<R::Record, R::Filters>,
{
    pub fn new(service: S, context: RequestContext) -> Self {
        Self::with_query(service, context, QueryState::default())
    }

    pub fn with_query(
        service: S,
        context: RequestContext,
        query: QueryState<R::Filters>,
    ) -> Self {
        Self {
            service,
            context,
            state: Arc::new(Mutex::new(ListState::new(query))),
        }
    }

    fn state(&self) -> MutexGuard<'_, ListState<R::Record, R::Filters>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    pub fn items(&self) -> Vec<R::Record> {
        self.state().page.items.clone()
    }

    pub fn total(&self) -> u64 {
        self.state().page.total
    }

    pub fn total_pages(&self) -> u64 {
        self.state().page.total_pages
    }

    pub fn loading(&self) -> bool {
        self.state().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    pub fn phase(&self) -> LoadPhase {
        self.state().phase
    }

    /// Current value of the modified signal.
    pub fn modified(&self) -> bool {
        self.state().modified
    }

    /// Number of fetches whose result was applied.
    pub fn settled_loads(&self) -> u64 {
        self.state().settled_loads
    }

    pub fn query(&self) -> QueryState<R::Filters> {
        self.state().query.clone()
    }

    pub fn is_stale(&self) -> bool {
        self.state().is_stale()
    }

    pub fn snapshot(&self) -> ListSnapshot<R::Record> {
        self.state().snapshot()
    }

    fn update_query(&self, change: impl FnOnce(&mut QueryState<R::Filters>)) -> bool {
        let mut state = self.state();
        let mut query = state.query.clone();
        change(&mut query);
        state.set_query(query)
    }

    /// Set the search text; returns to page 1 when it changes.
    pub fn set_search(&self, search: impl Into<String>) -> bool {
        let search = search.into();
        self.update_query(|query| {
            if query.search != search {
                query.search = search;
                query.page = 1;
            }
        })
    }

    pub fn set_page(&self, page: u32) -> Result<bool, ServiceError> {
        validate_page(page)?;
        Ok(self.update_query(|query| query.page = page))
    }

    pub fn next_page(&self) -> bool {
        let total_pages = self.total_pages();
        self.update_query(|query| {
            if u64::from(query.page) < total_pages {
                query.page += 1;
            }
        })
    }

    pub fn prev_page(&self) -> bool {
        self.update_query(|query| {
            if query.page > 1 {
                query.page -= 1;
            }
        })
    }

    /// Set the page size; returns to page 1 when it changes.
    pub fn set_items_per_page(&self, items_per_page: u32) -> Result<bool, ServiceError> {
        validate_items_per_page(items_per_page)?;
        Ok(self.update_query(|query| {
            if query.items_per_page != items_per_page {
                query.items_per_page = items_per_page;
                query.page = 1;
            }
        }))
    }

    pub fn set_order(&self, order: Option<SortOrder>) -> bool {
        self.update_query(|query| query.order = order)
    }

    /// Set one filter by query key. An empty value clears it.
    pub fn set_filter(&self, key: &str, value: &str) -> Result<bool, ServiceError> {
        let mut state = self.state();
        let mut query = state.query.clone();
        query.filters.set_field(key, value)?;
        if query.filters != state.query.filters {
            query.page = 1;
        }
        Ok(state.set_query(query))
    }

    pub fn set_filters(&self, filters: R::Filters) -> bool {
        self.update_query(|query| {
            if query.filters != filters {
                query.filters = filters;
                query.page = 1;
            }
        })
    }

    /// Fetch the current page. Returns whether the result was applied (it is
    /// not when a newer fetch was issued while this one was in flight).
    pub async fn load(&self) -> bool {
        let (ticket, query) = {
            let mut state = self.state();
            let ticket = state.begin_load();
            (ticket, state.query.clone())
        };

        let outcome = self
            .service
            .list(&self.context, &query)
            .await
            .map_err(|e| {
                log::warn!("Loading {} failed: {}", R::PLURAL, e);
                e.user_message(&format!("Failed to load {}", R::PLURAL))
            });

        self.state().finish_load(ticket, outcome)
    }

    /// Run [`load`](Self::load) if any dependency changed since the last
    /// applied fetch. Returns whether a fetch ran.
    pub async fn refresh_if_stale(&self) -> bool {
        if !self.is_stale() {
            return false;
        }
        self.load().await;
        true
    }

    fn record_failure(&self, error: ServiceError, fallback: String) {
        log::warn!("{}: {}", fallback, error);
        self.state().error = Some(error.user_message(&fallback));
    }

    fn to_payload<P: Serialize>(&self, payload: &P) -> Result<serde_json::Value, ServiceError> {
        serde_json::to_value(payload).map_err(|e| ServiceError::Validation {
            field: "payload".to_string(),
            message: e.to_string(),
        })
    }

    pub async fn create<P: Serialize>(&self, payload: &P) -> Option<R::Record> {
        let fallback = format!("Failed to create {}", R::NAME);
        let result = match self.to_payload(payload) {
            Ok(body) => self.service.create(&self.context, &body).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(record) => {
                self.state().flip_modified();
                Some(record)
            }
            Err(e) => {
                self.record_failure(e, fallback);
                None
            }
        }
    }

    pub async fn update<P: Serialize>(&self, id: &RecordId, payload: &P) -> Option<R::Record> {
        let fallback = format!("Failed to update {}", R::NAME);
        let result = match self.to_payload(payload) {
            Ok(body) => self.service.update(&self.context, id, &body).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(record) => {
                self.state().flip_modified();
                Some(record)
            }
            Err(e) => {
                self.record_failure(e, fallback);
                None
            }
        }
    }

    /// Delete a record. Bindings with `PRUNE_ON_DELETE` drop it from the held
    /// page; the rest flip the modified signal and refetch.
    pub async fn delete(&self, id: &RecordId) -> bool {
        match self.service.delete(&self.context, id).await {
            Ok(()) => {
                let mut state = self.state();
                if R::PRUNE_ON_DELETE {
                    state.prune(|record| R::record_id(record) == id);
                } else {
                    state.flip_modified();
                }
                true
            }
            Err(e) => {
                self.record_failure(e, format!("Failed to delete {}", R::NAME));
                false
            }
        }
    }

    /// Ask the backend to pull fresh data for this resource.
    pub async fn sync_remote(&self) -> bool {
        match self.service.sync(&self.context).await {
            Ok(_) => {
                self.state().flip_modified();
                true
            }
            Err(e) => {
                self.record_failure(e, format!("Failed to sync {}", R::PLURAL));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Warehouse, Zone};
    use crate::core::resources::{Warehouses, Zones};
    use crate::core::services::traits::{
        CreateService, DeleteService, GetService, ListService, SyncService, UpdateService,
    };
    use crate::error::ApiError;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::collections::VecDeque;
    use tokio::sync::oneshot;

    type Scripted<T> = (Option<oneshot::Receiver<()>>, Result<Page<T>, ServiceError>);

    /// Service double that replays scripted list responses, optionally held
    /// back until the test releases them.
    struct MockService<T> {
        lists: Arc<Mutex<VecDeque<Scripted<T>>>>,
        mutations: Arc<Mutex<VecDeque<Result<Value, ServiceError>>>>,
        list_calls: Arc<Mutex<Vec<u32>>>,
    }

    impl<T> Clone for MockService<T> {
        fn clone(&self) -> Self {
            Self {
                lists: Arc::clone(&self.lists),
                mutations: Arc::clone(&self.mutations),
                list_calls: Arc::clone(&self.list_calls),
            }
        }
    }

    impl<T> MockService<T> {
        fn new() -> Self {
            Self {
                lists: Arc::new(Mutex::new(VecDeque::new())),
                mutations: Arc::new(Mutex::new(VecDeque::new())),
                list_calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn push_list(&self, result: Result<Page<T>, ServiceError>) {
            self.lists.lock().unwrap().push_back((None, result));
        }

        fn push_gated_list(&self, result: Result<Page<T>, ServiceError>) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            self.lists.lock().unwrap().push_back((Some(rx), result));
            tx
        }

        fn push_mutation(&self, result: Result<Value, ServiceError>) {
            self.mutations.lock().unwrap().push_back(result);
        }

        fn next_mutation(&self) -> Result<Value, ServiceError> {
            self.mutations
                .lock()
                .unwrap()
                .pop_front()
                .expect("unscripted mutation")
        }

        fn list_calls(&self) -> Vec<u32> {
            self.list_calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl<T, F> ListService<T, F> for MockService<T>
    where
        T: Send + 'static,
        F: ListFilters,
    {
        async fn list(
            &self,
            _context: &RequestContext,
            query: &QueryState<F>,
        ) -> Result<Page<T>, ServiceError> {
            self.list_calls.lock().unwrap().push(query.page);
            let (gate, result) = self
                .lists
                .lock()
                .unwrap()
                .pop_front()
                .expect("unscripted list call");
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            result
        }
    }

    #[async_trait]
    impl<T> GetService<T> for MockService<T>
    where
        T: serde::de::DeserializeOwned + Send + 'static,
    {
        async fn get(&self, _context: &RequestContext, _id: &RecordId) -> Result<T, ServiceError> {
            self.next_mutation()
                .map(|v| serde_json::from_value(v).expect("bad scripted record"))
        }
    }

    #[async_trait]
    impl<T> CreateService<T> for MockService<T>
    where
        T: serde::de::DeserializeOwned + Send + 'static,
    {
        async fn create(&self, _context: &RequestContext, _payload: &Value) -> Result<T, ServiceError> {
            self.next_mutation()
                .map(|v| serde_json::from_value(v).expect("bad scripted record"))
        }
    }

    #[async_trait]
    impl<T> UpdateService<T> for MockService<T>
    where
        T: serde::de::DeserializeOwned + Send + 'static,
    {
        async fn update(
            &self,
            _context: &RequestContext,
            _id: &RecordId,
            _payload: &Value,
        ) -> Result<T, ServiceError> {
            self.next_mutation()
                .map(|v| serde_json::from_value(v).expect("bad scripted record"))
        }
    }

    #[async_trait]
    impl<T: Send + 'static> DeleteService for MockService<T> {
        async fn delete(&self, _context: &RequestContext, _id: &RecordId) -> Result<(), ServiceError> {
            self.next_mutation().map(|_| ())
        }
    }

    #[async_trait]
    impl<T: Send + 'static> SyncService for MockService<T> {
        async fn sync(&self, _context: &RequestContext) -> Result<Value, ServiceError> {
            self.next_mutation()
        }
    }

    fn zone(id: u64, name: &str) -> Zone {
        Zone {
            id: RecordId::from(id),
            name: name.to_string(),
            description: None,
            status: None,
        }
    }

    fn warehouse(id: u64, name: &str) -> Warehouse {
        Warehouse {
            id: RecordId::from(id),
            name: name.to_string(),
            code: None,
            address: None,
            company_id: None,
            status: None,
        }
    }

    fn page<T>(items: Vec<T>, total: u64, total_pages: u64) -> Page<T> {
        Page {
            items,
            total,
            total_pages,
        }
    }

    fn server_error() -> ServiceError {
        ServiceError::Api(ApiError::Http {
            status: 500,
            endpoint: "/zones".to_string(),
            message: None,
        })
    }

    fn zones_list(service: &MockService<Zone>) -> ResourceList<Zones, MockService<Zone>> {
        ResourceList::new(service.clone(), RequestContext::new())
    }

    #[tokio::test]
    async fn test_load_success_replaces_result_set() {
        let service = MockService::new();
        service.push_list(Ok(page(vec![zone(1, "North"), zone(2, "South")], 12, 6)));
        let list = zones_list(&service);

        assert_eq!(list.phase(), LoadPhase::Idle);
        assert!(list.load().await);

        assert_eq!(list.items(), vec![zone(1, "North"), zone(2, "South")]);
        assert_eq!(list.total(), 12);
        assert_eq!(list.total_pages(), 6);
        assert_eq!(list.error(), None);
        assert!(!list.loading());
        assert_eq!(list.phase(), LoadPhase::Success);
        assert_eq!(list.settled_loads(), 1);
    }

    #[tokio::test]
    async fn test_load_failure_sets_fallback_and_empties() {
        let service = MockService::new();
        service.push_list(Ok(page(vec![zone(1, "North")], 1, 1)));
        service.push_list(Err(server_error()));
        let list = zones_list(&service);

        list.load().await;
        list.load().await;

        assert!(list.items().is_empty());
        assert_eq!(list.total(), 0);
        assert_eq!(list.error(), Some("Failed to load zones".to_string()));
        assert!(!list.loading());
        assert_eq!(list.phase(), LoadPhase::Error);
    }

    #[tokio::test]
    async fn test_error_cleared_when_next_load_starts() {
        let service = MockService::new();
        service.push_list(Err(server_error()));
        let release = service.push_gated_list(Ok(page(vec![], 0, 0)));
        let list = zones_list(&service);

        list.load().await;
        assert!(list.error().is_some());

        let pending = tokio::spawn({
            let list = list.clone();
            async move { list.load().await }
        });
        tokio::task::yield_now().await;

        assert!(list.loading());
        assert_eq!(list.error(), None);
        assert_eq!(list.phase(), LoadPhase::Loading);

        release.send(()).unwrap();
        assert!(pending.await.unwrap());
        assert!(!list.loading());
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let service = MockService::new();
        let release_old = service.push_gated_list(Ok(page(vec![zone(1, "Old")], 1, 1)));
        let release_new = service.push_gated_list(Ok(page(vec![zone(2, "New")], 1, 1)));
        let list = zones_list(&service);

        let old = tokio::spawn({
            let list = list.clone();
            async move { list.load().await }
        });
        tokio::task::yield_now().await;

        list.set_page(2).unwrap();
        let new = tokio::spawn({
            let list = list.clone();
            async move { list.load().await }
        });
        tokio::task::yield_now().await;

        release_new.send(()).unwrap();
        assert!(new.await.unwrap());
        assert!(!list.loading());

        release_old.send(()).unwrap();
        assert!(!old.await.unwrap());

        assert_eq!(list.items(), vec![zone(2, "New")]);
        assert_eq!(list.settled_loads(), 1);
        assert!(!list.is_stale());
        assert_eq!(service.list_calls(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_loading_stays_true_until_latest_settles() {
        let service = MockService::new();
        let release_first = service.push_gated_list(Ok(page(vec![zone(1, "A")], 1, 1)));
        let release_second = service.push_gated_list(Ok(page(vec![zone(2, "B")], 1, 1)));
        let list = zones_list(&service);

        let first = tokio::spawn({
            let list = list.clone();
            async move { list.load().await }
        });
        tokio::task::yield_now().await;
        let second = tokio::spawn({
            let list = list.clone();
            async move { list.load().await }
        });
        tokio::task::yield_now().await;

        release_first.send(()).unwrap();
        assert!(!first.await.unwrap());
        assert!(list.loading());

        release_second.send(()).unwrap();
        assert!(second.await.unwrap());
        assert!(!list.loading());
    }

    #[tokio::test]
    async fn test_setters_mark_stale_and_refresh_runs_once() {
        let service = MockService::new();
        service.push_list(Ok(page(vec![], 0, 0)));
        service.push_list(Ok(page(vec![zone(3, "Acme zone")], 1, 1)));
        let list = zones_list(&service);

        assert!(list.is_stale());
        assert!(list.refresh_if_stale().await);
        assert!(!list.refresh_if_stale().await);

        assert!(list.set_search("acme"));
        assert!(!list.set_search("acme"));
        assert_eq!(list.phase(), LoadPhase::Idle);
        assert!(list.refresh_if_stale().await);
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.settled_loads(), 2);
    }

    #[tokio::test]
    async fn test_search_and_filters_reset_page() {
        let service = MockService::<Zone>::new();
        let list = zones_list(&service);

        list.set_page(4).unwrap();
        list.set_search("north");
        assert_eq!(list.query().page, 1);

        list.set_page(3).unwrap();
        assert!(list.set_filter("status", "active").unwrap());
        assert_eq!(list.query().page, 1);
        assert_eq!(list.query().filters.status.as_deref(), Some("active"));

        list.set_page(2).unwrap();
        assert!(list.set_items_per_page(50).unwrap());
        assert_eq!(list.query().page, 1);

        assert!(list.set_page(0).is_err());
        assert!(list.set_items_per_page(0).is_err());
        assert!(list.set_filter("colour", "red").is_err());
    }

    #[tokio::test]
    async fn test_next_and_prev_page_respect_bounds() {
        let service = MockService::new();
        service.push_list(Ok(page(vec![zone(1, "A")], 2, 2)));
        let list = zones_list(&service);
        list.load().await;

        assert!(!list.prev_page());
        assert!(list.next_page());
        assert_eq!(list.query().page, 2);
        assert!(!list.next_page());
        assert!(list.prev_page());
        assert_eq!(list.query().page, 1);
    }

    #[tokio::test]
    async fn test_create_flips_signal_once_without_touching_items() {
        let service = MockService::new();
        service.push_list(Ok(page(vec![zone(1, "North")], 1, 1)));
        service.push_mutation(Ok(json!({"id": 2, "name": "South"})));
        let list = zones_list(&service);
        list.load().await;

        let before = list.modified();
        let created = list.create(&json!({"name": "South"})).await;

        assert_eq!(created, Some(zone(2, "South")));
        assert_eq!(list.modified(), !before);
        assert_eq!(list.items(), vec![zone(1, "North")]);
        assert!(list.is_stale());
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_result_set() {
        let service = MockService::new();
        service.push_list(Ok(page(vec![zone(1, "North")], 1, 1)));
        service.push_mutation(Err(ServiceError::Api(ApiError::Http {
            status: 422,
            endpoint: "/zones/1".to_string(),
            message: Some("name is required".to_string()),
        })));
        service.push_mutation(Err(server_error()));
        let list = zones_list(&service);
        list.load().await;
        let before = list.modified();

        let updated = list.update(&RecordId::from(1), &json!({"name": ""})).await;
        assert!(updated.is_none());
        assert_eq!(list.error(), Some("name is required".to_string()));

        assert!(!list.delete(&RecordId::from(1)).await);
        assert_eq!(list.error(), Some("Failed to delete zone".to_string()));

        assert_eq!(list.items(), vec![zone(1, "North")]);
        assert_eq!(list.modified(), before);
        assert!(!list.loading());
        assert!(!list.is_stale());
    }

    #[tokio::test]
    async fn test_delete_without_prune_refetches() {
        let service = MockService::new();
        service.push_list(Ok(page(vec![zone(1, "North"), zone(2, "South")], 2, 1)));
        service.push_mutation(Ok(Value::Null));
        service.push_list(Ok(page(vec![zone(2, "South")], 1, 1)));
        let list = zones_list(&service);
        list.load().await;

        assert!(list.delete(&RecordId::from(1)).await);
        assert_eq!(list.items().len(), 2);
        assert!(list.refresh_if_stale().await);
        assert_eq!(list.items(), vec![zone(2, "South")]);
    }

    #[tokio::test]
    async fn test_delete_with_prune_removes_only_target() {
        let service = MockService::new();
        service.push_list(Ok(page(
            vec![warehouse(1, "Main"), warehouse(2, "Annex"), warehouse(3, "Port")],
            3,
            1,
        )));
        service.push_mutation(Ok(Value::Null));
        let list: ResourceList<Warehouses, MockService<Warehouse>> =
            ResourceList::new(service.clone(), RequestContext::new());
        list.load().await;
        let before = list.modified();

        assert!(list.delete(&RecordId::from(2)).await);

        assert_eq!(list.items(), vec![warehouse(1, "Main"), warehouse(3, "Port")]);
        assert_eq!(list.total(), 2);
        assert_eq!(list.modified(), before);
        assert!(!list.is_stale());
    }

    #[tokio::test]
    async fn test_sync_remote_flips_signal() {
        let service = MockService::<Zone>::new();
        service.push_mutation(Ok(json!({"synced": 4})));
        service.push_mutation(Err(server_error()));
        let list = zones_list(&service);

        let before = list.modified();
        assert!(list.sync_remote().await);
        assert_eq!(list.modified(), !before);

        assert!(!list.sync_remote().await);
        assert_eq!(list.error(), Some("Failed to sync zones".to_string()));
    }

    #[test]
    fn test_list_state_ignores_unknown_ticket() {
        let mut state: ListState<Zone, crate::core::filters::StatusFilter> =
            ListState::new(QueryState::default());
        let first = state.begin_load();
        let second = state.begin_load();
        assert_eq!(second.seq(), first.seq() + 1);

        assert!(!state.finish_load(first, Ok(page(vec![zone(1, "A")], 1, 1))));
        assert!(state.loading);
        assert!(state.finish_load(second, Err("Failed".to_string())));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed"));
    }
}
