use crate::api::ContactApi;
use crate::constants::SEARCH_DEBOUNCE_MS;
use crate::debounce::DebouncedQueryTrigger;
use crate::state::{ListState, Selection};
use crate::{Error, Result};
use log::debug;
use rolodex_core::contact::{Contact, ContactPage, ContactPayload};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

struct QueryOutcome {
    seq: u64,
    outcome: Result<ContactPage>,
}

/// Ties the list state, the debounced query trigger and the API port
/// together. Filter, page and page-size changes re-fetch the affected page
/// in full; single-record mutations patch the local list without a
/// re-fetch. Only the most recently issued query's result is ever applied.
pub struct ContactBrowser {
    api: Arc<dyn ContactApi>,
    state: ListState,
    trigger: DebouncedQueryTrigger,
    results_tx: mpsc::UnboundedSender<QueryOutcome>,
    results_rx: mpsc::UnboundedReceiver<QueryOutcome>,
}

impl ContactBrowser {
    pub fn new(api: Arc<dyn ContactApi>) -> Self {
        Self::with_quiet_period(api, Duration::from_millis(SEARCH_DEBOUNCE_MS))
    }

    pub fn with_quiet_period(api: Arc<dyn ContactApi>, quiet_period: Duration) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            api,
            state: ListState::new(),
            trigger: DebouncedQueryTrigger::new(quiet_period),
            results_tx,
            results_rx,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Search keystrokes reset to the first page and only hit the API once
    /// the input has been quiet for the whole debounce period.
    pub fn on_search_input(&mut self, text: &str) {
        self.state.set_search(text);
        let seq = self.state.begin_query();
        let params = self.state.query_params();
        let api = self.api.clone();
        let results_tx = self.results_tx.clone();
        // only the debounce timer is cancellable - once it has fired, the
        // network call runs detached to completion and a superseded result
        // is discarded on arrival instead
        self.trigger.schedule(async move {
            tokio::spawn(async move {
                let outcome = api.fetch_page(&params).await;
                let _ = results_tx.send(QueryOutcome { seq, outcome });
            });
        });
    }

    /// Page changes are not debounced.
    pub async fn set_page(&mut self, page: u64) -> bool {
        self.state.set_page(page);
        self.run_query().await
    }

    /// Page-size changes are not debounced.
    pub async fn set_limit(&mut self, limit: u64) -> bool {
        self.state.set_limit(limit);
        self.run_query().await
    }

    /// Re-fetches the currently displayed page.
    pub async fn refresh(&mut self) -> bool {
        self.run_query().await
    }

    async fn run_query(&mut self) -> bool {
        // an immediate query supersedes a pending debounced one
        self.trigger.cancel();
        let seq = self.state.begin_query();
        let params = self.state.query_params();
        let outcome = self.api.fetch_page(&params).await;
        self.apply_outcome(QueryOutcome { seq, outcome })
    }

    /// Applies all query results that have arrived so far. Returns whether
    /// any of them replaced the list.
    pub fn drain_results(&mut self) -> bool {
        let mut applied = false;
        while let Ok(result) = self.results_rx.try_recv() {
            applied |= self.apply_outcome(result);
        }
        applied
    }

    /// Waits for the next query result (typically of a debounced search)
    /// and applies it, unless it was superseded in the meantime.
    pub async fn recv_result(&mut self) -> bool {
        match self.results_rx.recv().await {
            Some(result) => self.apply_outcome(result),
            None => false,
        }
    }

    fn apply_outcome(&mut self, result: QueryOutcome) -> bool {
        let applied = match result.outcome {
            Ok(page) => self.state.apply_page(result.seq, page),
            Err(e) => self.state.apply_query_failure(result.seq, e.to_string()),
        };
        if !applied {
            debug!("discarding superseded query result {}", result.seq);
        }
        applied
    }

    /// Creates a contact and appends it to the local list - no re-fetch.
    pub async fn create(&mut self, payload: ContactPayload) -> Result<Contact> {
        match self.api.create(&payload).await {
            Ok(contact) => {
                self.state.record_created(contact.clone());
                Ok(contact)
            }
            Err(e) => {
                self.state.set_error(e.to_string());
                Err(e)
            }
        }
    }

    pub fn select_for_edit(&mut self, contact: Contact) -> bool {
        self.state.select_for_edit(contact)
    }

    pub fn select_for_delete(&mut self, contact: Contact) -> bool {
        self.state.select_for_delete(contact)
    }

    pub fn cancel_selection(&mut self) {
        self.state.clear_selection();
    }

    /// Saves the pending edit target with the given fields and patches the
    /// local list in place. The selection stays active on failure so the
    /// edit can be retried.
    pub async fn save_selected(&mut self, payload: ContactPayload) -> Result<Contact> {
        let Some(Selection::Edit(selected)) = self.state.selection.clone() else {
            return Err(Error::NoSelection);
        };
        match self.api.update(&selected.id, &payload).await {
            Ok(contact) => {
                self.state.record_updated(contact.clone());
                self.state.clear_selection();
                Ok(contact)
            }
            Err(e) => {
                self.state.set_error(e.to_string());
                Err(e)
            }
        }
    }

    /// Deletes the pending delete target and removes it from the local
    /// list, clearing the selection.
    pub async fn delete_selected(&mut self) -> Result<()> {
        let Some(Selection::Delete(selected)) = self.state.selection.clone() else {
            return Err(Error::NoSelection);
        };
        match self.api.delete(&selected.id).await {
            Ok(()) => {
                self.state.record_deleted(&selected.id);
                Ok(())
            }
            Err(e) => {
                self.state.set_error(e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockContactApi;
    use rolodex_core::contact::PageQuery;

    fn contact(id: &str, email: &str) -> Contact {
        Contact {
            id: id.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: email.to_string(),
            phone_number: "5551234567".to_string(),
            company: None,
            job_title: None,
            created_at: 1731593928,
            updated_at: 1731593928,
        }
    }

    fn page_for(params: &PageQuery, contacts: Vec<Contact>) -> ContactPage {
        let total = contacts.len() as u64;
        ContactPage {
            contacts,
            total_records: total,
            total_pages: total.div_ceil(params.limit.max(1)),
            current_page: params.page,
        }
    }

    fn get_browser(mock: MockContactApi) -> ContactBrowser {
        ContactBrowser::with_quiet_period(Arc::new(mock), Duration::from_millis(800))
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_search_input_issues_exactly_one_query() {
        let mut api = MockContactApi::new();
        api.expect_fetch_page()
            .withf(|params| params.search.as_deref() == Some("ali") && params.page == 1)
            .times(1)
            .returning(|params| {
                Ok(page_for(params, vec![contact("1", "ali@example.com")]))
            });

        let mut browser = get_browser(api);
        for text in ["a", "al", "ali"] {
            browser.on_search_input(text);
            tokio::time::advance(Duration::from_millis(100)).await;
        }

        assert!(browser.recv_result().await);
        assert_eq!(browser.state().search.as_deref(), Some("ali"));
        assert_eq!(browser.state().contacts.len(), 1);
    }

    /// Answers "bob" queries only after a long delay, so an older query
    /// can resolve after a newer one was issued.
    struct SlowBobApi;

    #[async_trait::async_trait]
    impl ContactApi for SlowBobApi {
        async fn fetch_page(&self, params: &PageQuery) -> crate::Result<ContactPage> {
            let term = params.search.clone().unwrap_or_default();
            if term == "bob" {
                tokio::time::sleep(Duration::from_millis(5000)).await;
            }
            Ok(page_for(
                params,
                vec![contact(&term, &format!("{term}@example.com"))],
            ))
        }

        async fn create(&self, _payload: &ContactPayload) -> crate::Result<Contact> {
            unreachable!("not used in this test")
        }

        async fn update(&self, _id: &str, _payload: &ContactPayload) -> crate::Result<Contact> {
            unreachable!("not used in this test")
        }

        async fn delete(&self, _id: &str) -> crate::Result<()> {
            unreachable!("not used in this test")
        }
    }

    #[tokio::test(start_paused = true)]
    async fn a_superseded_response_never_overwrites_newer_state() {
        let mut browser =
            ContactBrowser::with_quiet_period(Arc::new(SlowBobApi), Duration::from_millis(100));

        // the "bob" query fires first but its response is slow
        browser.on_search_input("bob");
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(200)).await;
        tokio::task::yield_now().await;

        // the "alice" query is issued later and resolves first
        browser.on_search_input("alice");
        let first_applied = browser.recv_result().await;
        let second_applied = browser.recv_result().await;

        assert!(first_applied);
        assert!(!second_applied);
        assert_eq!(browser.state().contacts.len(), 1);
        assert_eq!(browser.state().contacts[0].id, "alice");
    }

    #[tokio::test(start_paused = true)]
    async fn page_changes_query_immediately_and_supersede_a_pending_search() {
        let mut api = MockContactApi::new();
        api.expect_fetch_page()
            .withf(|params| params.page == 2 && params.search.as_deref() == Some("a"))
            .times(1)
            .returning(|params| Ok(page_for(params, vec![])));

        let mut browser = get_browser(api);
        browser.on_search_input("a");
        assert!(browser.set_page(2).await);

        // the debounced query was cancelled and never fires
        tokio::time::advance(Duration::from_millis(2000)).await;
        tokio::task::yield_now().await;
        assert!(!browser.drain_results());
    }

    #[tokio::test]
    async fn create_appends_locally_without_a_refetch() {
        let mut api = MockContactApi::new();
        api.expect_create()
            .withf(|payload| payload.email == "new@example.com")
            .returning(|payload| {
                let mut created = contact("new-id", &payload.email);
                created.first_name = payload.first_name.clone();
                Ok(created)
            });

        let mut browser = get_browser(api);
        let payload = ContactPayload {
            first_name: "New".to_string(),
            last_name: "Person".to_string(),
            email: "new@example.com".to_string(),
            phone_number: "5551234567".to_string(),
            company: None,
            job_title: None,
        };
        let created = browser.create(payload).await.unwrap();

        assert_eq!(created.id, "new-id");
        assert_eq!(browser.state().contacts.len(), 1);
        assert_eq!(browser.state().total_records, 1);
        assert_eq!(browser.state().total_pages, 1);
        assert!(browser.state().error.is_none());
    }

    #[tokio::test]
    async fn a_failed_mutation_records_an_error_and_keeps_the_list() {
        let mut api = MockContactApi::new();
        api.expect_fetch_page().times(2).returning(|params| {
            Ok(page_for(
                params,
                vec![contact("1", "a@x.com"), contact("2", "b@x.com")],
            ))
        });
        api.expect_create()
            .returning(|_| Err(Error::Connectivity("connection refused".to_string())));

        let mut browser = get_browser(api);
        assert!(browser.refresh().await);

        let res = browser.create(ContactPayload::default()).await;
        assert!(matches!(res, Err(Error::Connectivity(_))));
        assert_eq!(browser.state().contacts.len(), 2);
        assert!(browser.state().error.is_some());

        // the next successful operation clears the banner
        assert!(browser.refresh().await);
        assert!(browser.state().error.is_none());
    }

    #[tokio::test]
    async fn save_selected_patches_the_list_and_clears_the_selection() {
        let mut api = MockContactApi::new();
        api.expect_fetch_page().returning(|params| {
            Ok(page_for(
                params,
                vec![contact("1", "a@x.com"), contact("2", "b@x.com")],
            ))
        });
        api.expect_update()
            .withf(|id, payload| id == "2" && payload.email == "changed@x.com")
            .returning(|id, payload| Ok(contact(id, &payload.email)));

        let mut browser = get_browser(api);
        browser.refresh().await;
        assert!(browser.select_for_edit(contact("2", "b@x.com")));

        let payload = ContactPayload {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: "changed@x.com".to_string(),
            phone_number: "5551234567".to_string(),
            company: None,
            job_title: None,
        };
        browser.save_selected(payload).await.unwrap();

        assert_eq!(browser.state().contacts[1].email, "changed@x.com");
        assert!(browser.state().selection.is_none());
        assert_eq!(browser.state().total_records, 2);
    }

    #[tokio::test]
    async fn delete_selected_removes_the_contact_and_clears_the_selection() {
        let mut api = MockContactApi::new();
        api.expect_fetch_page().returning(|params| {
            Ok(page_for(
                params,
                vec![contact("1", "a@x.com"), contact("2", "b@x.com")],
            ))
        });
        api.expect_delete()
            .withf(|id| id == "1")
            .returning(|_| Ok(()));

        let mut browser = get_browser(api);
        browser.refresh().await;
        assert!(browser.select_for_delete(contact("1", "a@x.com")));

        browser.delete_selected().await.unwrap();
        assert!(browser.state().contacts.iter().all(|c| c.id != "1"));
        assert!(browser.state().selection.is_none());
        assert_eq!(browser.state().total_records, 1);
    }

    #[tokio::test]
    async fn mutating_without_a_matching_selection_is_rejected() {
        let mut browser = get_browser(MockContactApi::new());
        assert!(matches!(
            browser.delete_selected().await,
            Err(Error::NoSelection)
        ));
        assert!(matches!(
            browser.save_selected(ContactPayload::default()).await,
            Err(Error::NoSelection)
        ));

        // an edit selection is not a valid delete target
        browser.select_for_edit(contact("1", "a@x.com"));
        assert!(matches!(
            browser.delete_selected().await,
            Err(Error::NoSelection)
        ));
    }
}
