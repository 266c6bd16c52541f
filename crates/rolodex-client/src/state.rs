use rolodex_core::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use rolodex_core::contact::{Contact, ContactPage, PageQuery};
use serde::{Deserialize, Serialize};

/// The single active edit or delete target. At most one modal interaction
/// is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    Edit(Contact),
    Delete(Contact),
}

impl Selection {
    pub fn contact(&self) -> &Contact {
        match self {
            Selection::Edit(c) | Selection::Delete(c) => c,
        }
    }
}

/// The locally displayed slice of the contact list plus everything needed
/// to reconcile it: the active query parameters, pagination bookkeeping,
/// the single selected contact and the single error banner message.
///
/// Entries are disposable projections of server state. They are replaced
/// wholesale when a query resolves and patched in place after
/// single-record mutations; counts adjusted by a patch are approximate
/// until the next full fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListState {
    pub contacts: Vec<Contact>,
    pub total_records: u64,
    pub total_pages: u64,
    pub search: Option<String>,
    pub page: u64,
    pub limit: u64,
    pub selection: Option<Selection>,
    pub error: Option<String>,
    latest_query_seq: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListState {
    pub fn new() -> Self {
        Self {
            contacts: vec![],
            total_records: 0,
            total_pages: 0,
            search: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
            selection: None,
            error: None,
            latest_query_seq: 0,
        }
    }

    pub fn query_params(&self) -> PageQuery {
        PageQuery {
            search: self.search.clone(),
            page: self.page,
            limit: self.limit,
        }
    }

    pub fn latest_query_seq(&self) -> u64 {
        self.latest_query_seq
    }

    /// Changing the filter while deep in a stale page would display a page
    /// that may not exist under the new filter, so a search change always
    /// jumps back to the first page.
    pub fn set_search(&mut self, text: &str) {
        let trimmed = text.trim();
        self.search = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        };
        self.page = DEFAULT_PAGE;
    }

    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(DEFAULT_PAGE);
    }

    pub fn set_limit(&mut self, limit: u64) {
        self.limit = limit.max(1);
    }

    /// Registers a new outbound query and returns its sequence number.
    pub fn begin_query(&mut self) -> u64 {
        self.latest_query_seq += 1;
        self.latest_query_seq
    }

    /// Stale-response guard: only the result of the most recently issued
    /// query may replace the list. Returns whether it was applied.
    pub fn apply_page(&mut self, seq: u64, page: ContactPage) -> bool {
        if seq != self.latest_query_seq {
            return false;
        }
        self.contacts = page.contacts;
        self.total_records = page.total_records;
        self.total_pages = page.total_pages;
        self.page = page.current_page;
        self.error = None;
        true
    }

    /// Records the failure of the most recently issued query; failures of
    /// superseded queries are ignored like their results would be. The
    /// displayed list is left untouched either way.
    pub fn apply_query_failure(&mut self, seq: u64, message: String) -> bool {
        if seq != self.latest_query_seq {
            return false;
        }
        self.error = Some(message);
        true
    }

    /// Appends the created record locally instead of re-fetching. Under
    /// true server order the record may belong on a different page.
    pub fn record_created(&mut self, contact: Contact) {
        self.contacts.push(contact);
        self.total_records += 1;
        self.recompute_total_pages();
        self.error = None;
    }

    /// Replaces the matching local record in place, if it is on the
    /// displayed page.
    pub fn record_updated(&mut self, contact: Contact) {
        if let Some(slot) = self.contacts.iter_mut().find(|c| c.id == contact.id) {
            *slot = contact;
        }
        self.error = None;
    }

    /// Removes the matching local record and clears the selection if it
    /// pointed at the removed contact.
    pub fn record_deleted(&mut self, id: &str) {
        self.contacts.retain(|c| c.id != id);
        self.total_records = self.total_records.saturating_sub(1);
        self.recompute_total_pages();
        if self
            .selection
            .as_ref()
            .is_some_and(|s| s.contact().id == id)
        {
            self.selection = None;
        }
        self.error = None;
    }

    /// Selecting while another target is pending is rejected.
    pub fn select_for_edit(&mut self, contact: Contact) -> bool {
        if self.selection.is_some() {
            return false;
        }
        self.selection = Some(Selection::Edit(contact));
        true
    }

    /// Selecting while another target is pending is rejected.
    pub fn select_for_delete(&mut self, contact: Contact) -> bool {
        if self.selection.is_some() {
            return false;
        }
        self.selection = Some(Selection::Delete(contact));
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    fn recompute_total_pages(&mut self) {
        self.total_pages = self.total_records.div_ceil(self.limit.max(1));
    }
}
