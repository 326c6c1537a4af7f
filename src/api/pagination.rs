// Pagination over remote list operations.
// Follows nextPageToken chains, accumulating items up to an optional maximum.

use serde::Deserialize;

use crate::error::Result;

/// One page of a remote list response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

/// A remote list operation that can be fetched one page at a time.
///
/// `page_token` is the continuation token from the previous page (None for
/// the first request); `max_results` is the requested page size.
pub trait PageSource<T> {
    async fn fetch_page(
        &self,
        page_token: Option<&str>,
        max_results: Option<usize>,
    ) -> Result<Page<T>>;
}

/// Fetch every page from `source`, following continuation tokens.
///
/// With `max_results` set, each request's page size is capped to the number
/// of items still needed and the loop stops as soon as that many have been
/// accumulated, even if more pages remain. Transport failures propagate
/// unchanged; there is no retry here.
pub async fn list_all<T>(
    source: &impl PageSource<T>,
    max_results: Option<usize>,
) -> Result<Vec<T>> {
    if max_results == Some(0) {
        return Ok(Vec::new());
    }

    let mut items: Vec<T> = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page_size = max_results.map(|n| n - items.len());
        let page = source.fetch_page(page_token.as_deref(), page_size).await?;
        items.extend(page.items);
        page_token = page.next_page_token;

        if page_token.is_none() || max_results.is_some_and(|n| items.len() >= n) {
            break;
        }
    }

    if let Some(n) = max_results {
        items.truncate(n);
    }
    Ok(items)
}
