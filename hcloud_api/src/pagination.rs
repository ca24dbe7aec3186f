//! Transparent pagination over list endpoints.
//!
//! [`fetch_items`] drives a page-returning operation from page index 0 until
//! the API reports no `next_page`, concatenating the items of every page in
//! order. Pages are fetched one at a time; any failure aborts the whole
//! aggregation and nothing fetched so far is returned.

use std::future::Future;

use crate::{
    response::ApiResponse,
    types::{
        GetAllPrimaryIpsResponse, GetServersBySelectorResponse, Identifiable, PrimaryIpDetail,
        SearchResponse, ServerDetail,
    },
    Client, Error,
};

/// Page size used by the `get_all_*` helpers.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Consumes all items from a paginated endpoint.
///
/// `page_supplier` receives the zero-based page index and the label selector
/// and performs one request. `items_getter` extracts the items from a page.
///
/// There is no upper bound on the number of pages: an API that never reports
/// a last page keeps this looping. Use [`fetch_items_with_limit`] to cap it.
pub async fn fetch_items<T, X, F, Fut, G>(
    label_selector: &str,
    page_supplier: F,
    items_getter: G,
) -> Result<Vec<T>, Error>
where
    T: Identifiable,
    X: SearchResponse,
    F: FnMut(u32, String) -> Fut,
    Fut: Future<Output = Result<ApiResponse<X>, Error>>,
    G: Fn(X) -> Vec<T>,
{
    fetch_items_with_limit(label_selector, None, page_supplier, items_getter).await
}

/// Like [`fetch_items`], but fails with [`Error::PageLimitExceeded`] once
/// `max_pages` pages were fetched and the API still reports a next page.
/// A limit of `0` is treated as `1`: the first page is always fetched.
pub async fn fetch_items_with_limit<T, X, F, Fut, G>(
    label_selector: &str,
    max_pages: Option<u32>,
    mut page_supplier: F,
    items_getter: G,
) -> Result<Vec<T>, Error>
where
    T: Identifiable,
    X: SearchResponse,
    F: FnMut(u32, String) -> Fut,
    Fut: Future<Output = Result<ApiResponse<X>, Error>>,
    G: Fn(X) -> Vec<T>,
{
    let max_pages = max_pages.map(|max| max.max(1));
    let mut result = Vec::new();
    let mut page_index: u32 = 0;
    loop {
        let page = page_supplier(page_index, label_selector.to_string()).await?;
        if !page.is_successful() {
            tracing::warn!(
                "Page {} request failed with status {}",
                page_index,
                page.status
            );
            return Err(Error::UnsuccessfulResponse {
                status: page.status,
                error: page.error,
            });
        }
        let body = page.body.ok_or(Error::MissingBody)?;
        let pagination = body
            .meta()
            .ok_or(Error::MissingMeta)?
            .pagination
            .as_ref()
            .ok_or(Error::MissingPagination)?;
        let last_page = pagination.is_last_page();

        let items = items_getter(body);
        tracing::debug!("Fetched page {} with {} items", page_index, items.len());
        result.extend(items);

        if last_page {
            return Ok(result);
        }

        page_index += 1;
        if let Some(max) = max_pages {
            if page_index >= max {
                tracing::error!("Pagination did not terminate within {} pages", max);
                return Err(Error::PageLimitExceeded(max));
            }
        }
    }
}

impl Client {
    /// Fetches every server matching the label selector, across all pages.
    pub async fn get_all_servers(&self, label_selector: &str) -> Result<Vec<ServerDetail>, Error> {
        fetch_items_with_limit(
            label_selector,
            self.config().max_pages,
            move |page, selector| async move {
                self.get_servers_by_selector(&selector, page + 1, DEFAULT_PAGE_SIZE)
                    .await
            },
            |resp: GetServersBySelectorResponse| resp.servers,
        )
        .await
    }

    /// Fetches every Primary IP matching the label selector, across all pages.
    pub async fn get_all_primary_ips(
        &self,
        label_selector: &str,
    ) -> Result<Vec<PrimaryIpDetail>, Error> {
        fetch_items_with_limit(
            label_selector,
            self.config().max_pages,
            move |page, selector| async move {
                self.get_primary_ips_by_selector(&selector, page + 1, DEFAULT_PAGE_SIZE)
                    .await
            },
            |resp: GetAllPrimaryIpsResponse| resp.primary_ips,
        )
        .await
    }
}
