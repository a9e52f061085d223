//! The catalog state store.
//!
//! A single state container holding the loaded product list, pagination
//! cursor, search results, and the loading/error flags derived from request
//! lifecycles. All mutation is routed through the named operations below;
//! each asynchronous operation follows a pending -> (fulfilled | rejected)
//! lifecycle that never skips pending and never fires two terminal
//! transitions for one dispatch.
//!
//! The aggregate is persisted as a JSON blob keyed by store name and
//! restored at process start, before the presentation layer renders.

use std::path::{Path, PathBuf};

use fslock::LockFile;
use serde::{Deserialize, Serialize};
use shopfront_catalog::{CatalogClientError, ProductId, ProductPage};
use shopfront_core::{PersistError, Version, persist_atomically, traceable_path};
use tracing::{debug, instrument};

use crate::models::product::{Product, products_from_wire};
use crate::providers::catalog::{Client, ClientTrait};

/// Default page size for the product listing.
pub const DEFAULT_LIST_LIMIT: u32 = 20;

/// Default page size for search results.
pub const DEFAULT_SEARCH_LIMIT: u32 = 50;

/// Pagination bookkeeping for the product listing.
///
/// Recomputed on every fulfilled list operation, never mutated directly by a
/// caller. `has_more` is always derived from the accumulated list length
/// against `total`, so it stays correct even if the service never reports a
/// "has more" flag of its own and even if callers drift on `skip`/`limit`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub skip: u32,
    pub limit: u32,
    pub total: u32,
    pub has_more: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIST_LIMIT,
            total: 0,
            has_more: true,
        }
    }
}

/// The catalog state aggregate.
///
/// Created once with empty defaults, mutated only through the operations on
/// [CatalogStore], and alive for the process lifetime. The loading flags are
/// split so the presentation layer can distinguish "replace the whole view
/// with a spinner" (`loading`) from "append a footer spinner"
/// (`loading_more`) from "show a search spinner without disturbing the list"
/// (`search_loading`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogState {
    version: Version<1>,
    /// Loaded product list: insertion-ordered, append-only across "load
    /// more", replaced on refresh.
    pub products: Vec<Product>,
    /// The product a detail view is currently showing, if any.
    pub current_product: Option<Product>,
    pub loading: bool,
    pub loading_more: bool,
    /// Message of the most recent rejection, until cleared.
    pub error: Option<String>,
    /// Canonical query of the most recently fulfilled search.
    pub search_query: String,
    /// Search results, replaced wholesale on each fulfilled search.
    pub search_results: Vec<Product>,
    pub search_loading: bool,
    pub pagination: Pagination,
}

impl CatalogState {
    // --- list operation ----------------------------------------------------

    /// `skip == 0` is a refresh: the accumulated list is cleared immediately
    /// so the view falls back to the primary spinner.
    fn list_pending(&mut self, skip: u32) {
        if skip == 0 {
            self.loading = true;
            self.products.clear();
        } else {
            self.loading_more = true;
        }
        self.error = None;
    }

    fn list_fulfilled(&mut self, skip: u32, page: ProductPage) {
        self.loading = false;
        self.loading_more = false;

        let products = products_from_wire(page.products);
        if skip == 0 {
            self.products = products;
        } else {
            // Append in arrival order. A caller that mis-sequences `skip` can
            // land duplicates here; they are not deduplicated.
            self.products.extend(products);
        }

        self.pagination = Pagination {
            skip: page.skip,
            limit: page.limit,
            total: page.total,
            has_more: (self.products.len() as u32) < page.total,
        };
    }

    /// List contents are left as-is, not rolled back.
    fn list_rejected(&mut self, message: String) {
        self.loading = false;
        self.loading_more = false;
        self.error = Some(message);
    }

    // --- search operation --------------------------------------------------

    /// Does not touch the primary product list.
    fn search_pending(&mut self) {
        self.search_loading = true;
        self.error = None;
    }

    /// Records the echoed `query` as the canonical current query. The last
    /// fulfilled search wins regardless of dispatch order.
    fn search_fulfilled(&mut self, query: &str, page: ProductPage) {
        self.search_loading = false;
        self.search_results = products_from_wire(page.products);
        self.search_query = query.to_string();
    }

    /// Prior search results are retained.
    fn search_rejected(&mut self, message: String) {
        self.search_loading = false;
        self.error = Some(message);
    }

    // --- single-item operation ---------------------------------------------

    fn product_pending(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn product_fulfilled(&mut self, product: Product) {
        self.loading = false;
        self.current_product = Some(product);
    }

    /// The previously selected product is retained; it may be stale or
    /// unrelated to the id that just failed.
    fn product_rejected(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    // --- synchronous mutations ---------------------------------------------

    /// Clear the search query, results, and spinner. Immediate, no pending
    /// phase.
    pub fn reset_search(&mut self) {
        self.search_query.clear();
        self.search_results.clear();
        self.search_loading = false;
    }

    /// Drop the recorded error message. Immediate, no pending phase.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Record the in-flight search input without dispatching a request.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Loading flags describe in-flight requests, and no request survives a
    /// restart.
    fn clear_transient_flags(&mut self) {
        self.loading = false;
        self.loading_more = false;
        self.search_loading = false;
    }
}

/// The catalog state store: owns a client and the state aggregate, and
/// sequences every dispatch as pending -> request -> terminal.
///
/// The store does not enforce mutual exclusion between same-kind dispatches;
/// the caller guards (`!loading && !loading_more && has_more` before a
/// load-more). Superseded requests are not cancelled: the last search or
/// lookup to fulfill wins, whatever order the requests were dispatched in.
#[derive(Debug)]
pub struct CatalogStore {
    client: Client,
    state: CatalogState,
}

impl CatalogStore {
    /// Create a store with empty default state.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            state: CatalogState::default(),
        }
    }

    /// Read access to the state aggregate.
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Fetch one page of the product listing.
    ///
    /// `skip == 0` replaces the list; any other `skip` appends. The returned
    /// error has already been recorded in the state, so callers that only
    /// render the aggregate may drop it.
    #[instrument(skip(self))]
    pub async fn fetch_products(
        &mut self,
        skip: u32,
        limit: u32,
    ) -> Result<(), CatalogClientError> {
        self.state.list_pending(skip);
        match self.client.list_products(skip, limit).await {
            Ok(page) => {
                debug!(
                    returned = page.products.len(),
                    total = page.total,
                    "list operation fulfilled"
                );
                self.state.list_fulfilled(skip, page);
                Ok(())
            },
            Err(err) => {
                debug!(%err, "list operation rejected");
                self.state.list_rejected(err.to_string());
                Err(err)
            },
        }
    }

    /// Search products matching `query`, replacing the previous results
    /// wholesale on success.
    #[instrument(skip(self, query), fields(query = %query.as_ref()))]
    pub async fn search_products(
        &mut self,
        query: impl AsRef<str> + Send + Sync,
        skip: u32,
        limit: u32,
    ) -> Result<(), CatalogClientError> {
        self.state.search_pending();
        match self.client.search_products(query.as_ref(), skip, limit).await {
            Ok(page) => {
                debug!(returned = page.products.len(), "search operation fulfilled");
                self.state.search_fulfilled(query.as_ref(), page);
                Ok(())
            },
            Err(err) => {
                debug!(%err, "search operation rejected");
                self.state.search_rejected(err.to_string());
                Err(err)
            },
        }
    }

    /// Fetch a single product by id into `current_product`.
    #[instrument(skip(self))]
    pub async fn fetch_product(&mut self, id: ProductId) -> Result<(), CatalogClientError> {
        self.state.product_pending();
        match self.client.get_product(id).await {
            Ok(product) => {
                self.state.product_fulfilled(Product::from_wire(product));
                Ok(())
            },
            Err(err) => {
                debug!(%err, "single-item operation rejected");
                self.state.product_rejected(err.to_string());
                Err(err)
            },
        }
    }

    /// See [CatalogState::reset_search].
    pub fn reset_search(&mut self) {
        self.state.reset_search();
    }

    /// See [CatalogState::clear_error].
    pub fn clear_error(&mut self) {
        self.state.clear_error();
    }

    /// See [CatalogState::set_search_query].
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.set_search_query(query);
    }

    /// Restore a store from the blob persisted under `name` in `state_dir`,
    /// falling back to empty defaults when no usable blob exists. Loading
    /// flags are cleared on the way in.
    pub fn restore(
        client: Client,
        state_dir: impl AsRef<Path>,
        name: &str,
    ) -> Result<Self, StoreStateError> {
        let path = store_state_path(state_dir, name);
        let mut state = read_store_state_file(&path)?.unwrap_or_default();
        state.clear_transient_flags();
        Ok(Self { client, state })
    }

    /// Persist the aggregate under `name` in `state_dir`.
    pub fn persist(
        &self,
        state_dir: impl AsRef<Path>,
        name: &str,
    ) -> Result<(), StoreStateError> {
        let state_dir = state_dir.as_ref();
        std::fs::create_dir_all(state_dir).map_err(StoreStateError::CreateDir)?;
        let path = store_state_path(state_dir, name);
        let lock = acquire_store_state_lock(&path)?;
        write_store_state_file(&self.state, &path, lock)
    }
}

// ---------------------------------------------------------------------------
// State file persistence
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StoreStateError {
    #[error("couldn't create store state directory")]
    CreateDir(#[source] std::io::Error),
    #[error("couldn't acquire store state file lock")]
    AcquireLock(#[source] fslock::Error),
    #[error("couldn't read store state file")]
    ReadFile(#[source] std::io::Error),
    #[error("failed to write store state file")]
    WriteFile(#[source] PersistError),
}

/// Returns the path of the blob persisted for store `name` under
/// `state_dir`.
pub fn store_state_path(state_dir: impl AsRef<Path>, name: &str) -> PathBuf {
    state_dir.as_ref().join(format!("{name}.json"))
}

/// Returns the path of the lock file guarding a store state file. The
/// presence of the lock file does not indicate an active lock because the
/// file isn't removed after use. This is a separate file because the state
/// file is replaced on write.
fn store_state_lock_path(state_file_path: impl AsRef<Path>) -> PathBuf {
    state_file_path.as_ref().with_extension("lock")
}

/// Returns the parsed state file, or `None` if it doesn't exist or holds a
/// blob this version of the SDK can't use. The blob is a cache of remote
/// data, so an unusable one is discarded rather than surfaced as an error.
pub fn read_store_state_file(
    path: impl AsRef<Path>,
) -> Result<Option<CatalogState>, StoreStateError> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = traceable_path(path), "store state file not found");
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path).map_err(StoreStateError::ReadFile)?;
    match serde_json::from_str::<CatalogState>(&contents) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            debug!(
                path = traceable_path(path),
                %err,
                "discarding unusable store state file"
            );
            Ok(None)
        },
    }
}

/// Acquires the filesystem-based lock on a store state file.
pub fn acquire_store_state_lock(
    state_file_path: impl AsRef<Path>,
) -> Result<LockFile, StoreStateError> {
    let lock_path = store_state_lock_path(state_file_path);
    let mut lock = LockFile::open(lock_path.as_os_str()).map_err(StoreStateError::AcquireLock)?;
    lock.lock().map_err(StoreStateError::AcquireLock)?;
    Ok(lock)
}

/// Writes a store state file to disk.
///
/// The write is atomic (temporary file, then rename) and gated on the
/// [LockFile] for the same path; see [persist_atomically].
pub fn write_store_state_file(
    state: &CatalogState,
    path: impl AsRef<Path>,
    lock: LockFile,
) -> Result<(), StoreStateError> {
    debug!(path = traceable_path(path.as_ref()), "writing store state file");
    persist_atomically(state, &path, lock).map_err(StoreStateError::WriteFile)
}

/// Acquires the lock on a store state file before reading it, returning both
/// the lock and the parsed contents (or defaults when no usable blob
/// exists).
pub fn lock_and_read_store_state_file(
    path: impl AsRef<Path>,
) -> Result<(LockFile, CatalogState), StoreStateError> {
    debug!(path = traceable_path(path.as_ref()), "reading store state file");
    let lock = acquire_store_state_lock(&path)?;
    let state = read_store_state_file(&path)?.unwrap_or_default();
    Ok((lock, state))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use shopfront_catalog::Product as WireProduct;

    use super::*;
    use crate::providers::catalog::MockClient;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    fn wire_product(id: ProductId) -> WireProduct {
        WireProduct {
            id,
            title: format!("Product {id}"),
            description: "A product".to_string(),
            price: 549.0,
            discount_percentage: 12.96,
            rating: 4.69,
            stock: 94,
            brand: "Acme".to_string(),
            category: "smartphones".to_string(),
            thumbnail: "https://cdn.example.com/thumb.jpg".to_string(),
            images: vec!["https://cdn.example.com/1.jpg".to_string()],
        }
    }

    fn wire_page(ids: std::ops::Range<u64>, total: u32, skip: u32, limit: u32) -> ProductPage {
        ProductPage {
            products: ids.map(wire_product).collect(),
            total,
            skip,
            limit,
        }
    }

    fn domain_products(ids: std::ops::Range<u64>) -> Vec<Product> {
        ids.map(|id| Product::from_wire(wire_product(id))).collect()
    }

    fn mock_store(seed: impl FnOnce(&mut MockClient)) -> CatalogStore {
        let mut client = MockClient::new();
        seed(&mut client);
        CatalogStore::new(Client::Mock(client))
    }

    // --- reducer-level lifecycle tests -------------------------------------

    #[test]
    fn list_pending_with_skip_zero_clears_the_list_and_sets_loading() {
        let mut state = CatalogState {
            products: domain_products(1..21),
            error: Some("stale".to_string()),
            ..Default::default()
        };

        state.list_pending(0);

        assert!(state.loading);
        assert!(!state.loading_more);
        assert!(state.products.is_empty());
        assert_eq!(state.error, None);
    }

    #[test]
    fn list_pending_with_nonzero_skip_preserves_the_list() {
        let mut state = CatalogState {
            products: domain_products(1..21),
            ..Default::default()
        };

        state.list_pending(20);

        assert!(!state.loading);
        assert!(state.loading_more);
        assert_eq!(state.products.len(), 20);
    }

    #[test]
    fn duplicate_pages_are_not_deduplicated() {
        let mut state = CatalogState::default();
        state.list_fulfilled(0, wire_page(1..21, 100, 0, 20));
        // Mis-sequenced caller repeats the same page as a load-more.
        state.list_fulfilled(20, wire_page(1..21, 100, 20, 20));

        assert_eq!(state.products.len(), 40);
        assert_eq!(state.products[0].id, state.products[20].id);
    }

    #[test]
    fn rejected_search_leaves_list_and_cursor_untouched() {
        let mut state = CatalogState::default();
        state.list_fulfilled(0, wire_page(1..21, 100, 0, 20));
        let products_before = state.products.clone();
        let pagination_before = state.pagination.clone();

        state.search_pending();
        state.search_rejected("500 Internal Server Error".to_string());

        assert_eq!(state.products, products_before);
        assert_eq!(state.pagination, pagination_before);
        assert!(!state.search_loading);
        assert_eq!(
            state.error.as_deref(),
            Some("500 Internal Server Error")
        );
    }

    proptest! {
        /// `has_more` is exactly `(loaded count < total)` after any fulfilled
        /// list operation, never independently true or false.
        #[test]
        fn has_more_is_derived_from_count_against_total(
            existing in 0u64..150,
            page_len in 0u64..50,
            total in 0u32..200,
        ) {
            let mut state = CatalogState {
                products: domain_products(0..existing),
                ..Default::default()
            };
            let skip = existing as u32;
            state.list_fulfilled(skip, wire_page(existing..existing + page_len, total, skip, 20));

            let loaded = state.products.len() as u32;
            prop_assert_eq!(state.pagination.has_more, loaded < total);
            prop_assert_eq!(state.pagination.total, total);
        }
    }

    // --- store-level dispatch tests ----------------------------------------

    #[tokio::test]
    async fn paging_to_the_end_flips_has_more() {
        init_tracing();
        let mut store = mock_store(|client| {
            client.push_page_response(wire_page(1..21, 100, 0, 20));
            client.push_page_response(wire_page(21..41, 100, 20, 20));
            client.push_page_response(wire_page(41..101, 100, 40, 60));
        });

        store.fetch_products(0, 20).await.unwrap();
        assert_eq!(store.state().products.len(), 20);
        assert!(store.state().pagination.has_more);

        store.fetch_products(20, 20).await.unwrap();
        assert_eq!(store.state().products.len(), 40);
        assert!(store.state().pagination.has_more);

        store.fetch_products(40, 60).await.unwrap();
        assert_eq!(store.state().products.len(), 100);
        assert!(!store.state().pagination.has_more);

        // Order is the concatenation order of the received pages.
        let ids: Vec<_> = store.state().products.iter().map(|p| p.id).collect();
        let expected: Vec<_> = (1..101).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn refresh_replaces_rather_than_appends() {
        let mut store = mock_store(|client| {
            client.push_page_response(wire_page(1..21, 100, 0, 20));
            client.push_page_response(wire_page(21..41, 100, 20, 20));
            client.push_page_response(wire_page(1..21, 100, 0, 20));
        });

        store.fetch_products(0, 20).await.unwrap();
        store.fetch_products(20, 20).await.unwrap();
        assert_eq!(store.state().products.len(), 40);

        store.fetch_products(0, 20).await.unwrap();
        assert_eq!(store.state().products.len(), 20);
        assert_eq!(store.state().products[0].id, 1);
        assert!(store.state().pagination.has_more);
    }

    #[tokio::test]
    async fn rejected_list_keeps_contents_and_records_the_message() {
        let mut store = mock_store(|client| {
            client.push_page_response(wire_page(1..21, 100, 0, 20));
            client.push_error_response("Internal Server Error", 500);
        });

        store.fetch_products(0, 20).await.unwrap();
        let err = store.fetch_products(20, 20).await.unwrap_err();

        assert_eq!(store.state().products.len(), 20);
        assert!(!store.state().loading);
        assert!(!store.state().loading_more);
        assert_eq!(store.state().error.as_deref(), Some(err.to_string().as_str()));
    }

    #[tokio::test]
    async fn search_replaces_results_wholesale_and_echoes_the_query() {
        let mut store = mock_store(|client| {
            client.push_page_response(wire_page(1..4, 3, 0, 50));
            client.push_page_response(wire_page(7..9, 2, 0, 50));
        });

        store.search_products("phone", 0, 50).await.unwrap();
        assert_eq!(store.state().search_results.len(), 3);
        assert_eq!(store.state().search_query, "phone");

        store.search_products("laptop", 0, 50).await.unwrap();
        assert_eq!(store.state().search_results.len(), 2);
        assert_eq!(store.state().search_query, "laptop");

        store.reset_search();
        assert_eq!(store.state().search_results.len(), 0);
        assert_eq!(store.state().search_query, "");
        assert!(!store.state().search_loading);
    }

    #[tokio::test]
    async fn rejected_search_retains_prior_results() {
        let mut store = mock_store(|client| {
            client.push_page_response(wire_page(1..4, 3, 0, 50));
            client.push_error_response("Service Unavailable", 503);
        });

        store.search_products("phone", 0, 50).await.unwrap();
        let _ = store.search_products("phoné", 0, 50).await.unwrap_err();

        assert_eq!(store.state().search_results.len(), 3);
        assert_eq!(store.state().search_query, "phone");
        assert!(store.state().error.is_some());
    }

    #[tokio::test]
    async fn fetched_product_becomes_the_current_product() {
        let mut store = mock_store(|client| {
            client.push_product_response(wire_product(5));
        });

        store.fetch_product(5).await.unwrap();

        assert_eq!(
            store.state().current_product.as_ref().map(|p| p.id),
            Some(5)
        );
        assert!(!store.state().loading);
        assert_eq!(store.state().error, None);
    }

    #[tokio::test]
    async fn failed_lookup_keeps_the_previous_selection() {
        let mut store = mock_store(|client| {
            client.push_product_response(wire_product(3));
            client.push_error_response("Product with id '5' not found", 404);
        });

        store.fetch_product(3).await.unwrap();
        let _ = store.fetch_product(5).await.unwrap_err();

        // The selection stays whatever last fulfilled.
        assert_eq!(
            store.state().current_product.as_ref().map(|p| p.id),
            Some(3)
        );
        assert_eq!(
            store.state().error.as_deref(),
            Some("404 Not Found: Product with id '5' not found")
        );
    }

    #[tokio::test]
    async fn timed_out_lookup_records_the_timeout_message() {
        use std::time::Duration;

        use httpmock::prelude::*;
        use shopfront_catalog::{CatalogClient, CatalogClientConfig};

        let server = MockServer::start_async().await;
        let _mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/products/5");
                then.status(200)
                    .delay(Duration::from_secs(2))
                    .json_body(serde_json::json!({}));
            })
            .await;

        let config = CatalogClientConfig {
            catalog_url: server.base_url(),
            timeout: Duration::from_millis(250),
            ..Default::default()
        };
        let client = CatalogClient::new(config).unwrap();
        let mut store = CatalogStore::new(Client::Catalog(client));

        let err = store.fetch_product(5).await.unwrap_err();

        assert!(matches!(err, CatalogClientError::Timeout));
        assert_eq!(store.state().current_product, None);
        assert_eq!(store.state().error.as_deref(), Some("request timed out"));
        assert!(!store.state().loading);
    }

    #[tokio::test]
    async fn clear_error_nulls_the_error_field_only() {
        let mut store = mock_store(|client| {
            client.push_page_response(wire_page(1..21, 100, 0, 20));
            client.push_error_response("Internal Server Error", 500);
        });

        store.fetch_products(0, 20).await.unwrap();
        let _ = store.fetch_products(20, 20).await.unwrap_err();
        assert!(store.state().error.is_some());

        store.clear_error();
        assert_eq!(store.state().error, None);
        assert_eq!(store.state().products.len(), 20);
    }

    #[test]
    fn set_search_query_records_input_without_dispatching() {
        let mut store = mock_store(|_| {});
        store.set_search_query("pho");
        assert_eq!(store.state().search_query, "pho");
        assert!(store.state().search_results.is_empty());
    }

    // --- persistence tests -------------------------------------------------

    #[tokio::test]
    async fn persisted_state_round_trips_through_restore() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = mock_store(|client| {
            client.push_page_response(wire_page(1..21, 100, 0, 20));
            client.push_page_response(wire_page(1..4, 3, 0, 50));
        });
        store.fetch_products(0, 20).await.unwrap();
        store.search_products("phone", 0, 50).await.unwrap();

        store.persist(dir.path(), "catalog").unwrap();
        let restored =
            CatalogStore::restore(Client::Mock(MockClient::new()), dir.path(), "catalog").unwrap();

        assert_eq!(restored.state(), store.state());
    }

    #[test]
    fn restore_clears_loading_flags() {
        let dir = tempfile::tempdir().unwrap();
        let state = CatalogState {
            loading: true,
            loading_more: true,
            search_loading: true,
            products: domain_products(1..3),
            ..Default::default()
        };

        let path = store_state_path(dir.path(), "catalog");
        let lock = acquire_store_state_lock(&path).unwrap();
        write_store_state_file(&state, &path, lock).unwrap();

        let restored =
            CatalogStore::restore(Client::Mock(MockClient::new()), dir.path(), "catalog").unwrap();

        assert!(!restored.state().loading);
        assert!(!restored.state().loading_more);
        assert!(!restored.state().search_loading);
        assert_eq!(restored.state().products.len(), 2);
    }

    #[test]
    fn restore_without_a_blob_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let restored =
            CatalogStore::restore(Client::Mock(MockClient::new()), dir.path(), "catalog").unwrap();
        assert_eq!(restored.state(), &CatalogState::default());
    }

    #[test]
    fn blob_with_a_different_version_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_state_path(dir.path(), "catalog");

        let state = CatalogState {
            products: domain_products(1..3),
            ..Default::default()
        };
        let mut blob = serde_json::to_value(&state).unwrap();
        blob["version"] = serde_json::json!(99);
        std::fs::write(&path, serde_json::to_string(&blob).unwrap()).unwrap();

        let restored =
            CatalogStore::restore(Client::Mock(MockClient::new()), dir.path(), "catalog").unwrap();
        assert_eq!(restored.state(), &CatalogState::default());
    }

    #[test]
    fn persisted_blob_uses_the_camel_case_layout() {
        let dir = tempfile::tempdir().unwrap();
        let store = mock_store(|_| {});
        store.persist(dir.path(), "catalog").unwrap();

        let contents =
            std::fs::read_to_string(store_state_path(dir.path(), "catalog")).unwrap();
        let blob: serde_json::Value = serde_json::from_str(&contents).unwrap();

        assert_eq!(blob["version"], serde_json::json!(1));
        assert!(blob.get("searchQuery").is_some());
        assert!(blob.get("currentProduct").is_some());
        assert!(blob["pagination"].get("hasMore").is_some());
    }
}
