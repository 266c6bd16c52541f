/// Quiet period of search-as-you-type input before a query is issued.
pub const SEARCH_DEBOUNCE_MS: u64 = 800;
