//! Page walking for Scaleway list endpoints
//!
//! List endpoints take `page` (1-based) and `page_size` and answer with the
//! items of that page plus a `total_count` for the whole listing.

use crate::error::Result;
use std::future::Future;

/// Page size requested when walking a listing
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// A single page of a list response
pub trait Page {
    type Item;

    /// Number of items across all pages
    fn total_count(&self) -> u64;

    fn into_items(self) -> Vec<Self::Item>;
}

/// Fetch all pages (auto-paginate)
///
/// Stops once `total_count` items have been collected or a page comes back
/// empty. Any page error aborts the walk and nothing is returned.
pub async fn fetch_all_pages<P, F, Fut>(mut fetch_page: F) -> Result<Vec<P::Item>>
where
    P: Page,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<P>>,
{
    let mut all_items = Vec::new();
    let mut page = 1;

    loop {
        let response = fetch_page(page).await?;
        let total_count = response.total_count();
        let items = response.into_items();

        tracing::debug!(
            "page {}: {} items ({} / {})",
            page,
            items.len(),
            all_items.len() + items.len(),
            total_count
        );

        if items.is_empty() {
            break;
        }
        all_items.extend(items);

        if all_items.len() as u64 >= total_count {
            break;
        }
        page += 1;
    }

    Ok(all_items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct NumberPage {
        total: u64,
        items: Vec<u32>,
    }

    impl Page for NumberPage {
        type Item = u32;

        fn total_count(&self) -> u64 {
            self.total
        }

        fn into_items(self) -> Vec<u32> {
            self.items
        }
    }

    fn pages(data: &[u32], size: usize) -> Vec<Vec<u32>> {
        data.chunks(size).map(<[u32]>::to_vec).collect()
    }

    #[tokio::test]
    async fn test_walks_every_page_in_order() {
        let data: Vec<u32> = (0..23).collect();
        let chunks = pages(&data, 5);
        let mut requested = Vec::new();

        let all = fetch_all_pages(|page| {
            requested.push(page);
            let items = chunks.get(page as usize - 1).cloned().unwrap_or_default();
            async move { Ok::<_, Error>(NumberPage { total: 23, items }) }
        })
        .await
        .unwrap();

        assert_eq!(all, data);
        assert_eq!(requested, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_empty_listing() {
        let all = fetch_all_pages(|_| async { Ok::<_, Error>(NumberPage { total: 0, items: vec![] }) })
            .await
            .unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_stops_on_short_listing() {
        // total_count larger than what the server actually returns
        let all = fetch_all_pages(|page| async move {
            let items = if page == 1 { vec![1, 2] } else { vec![] };
            Ok::<_, Error>(NumberPage { total: 10, items })
        })
        .await
        .unwrap();
        assert_eq!(all, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_page_error_aborts() {
        let result = fetch_all_pages(|page| async move {
            if page == 2 {
                Err(Error::Api {
                    status: 503,
                    message: "unavailable".to_string(),
                })
            } else {
                Ok(NumberPage { total: 4, items: vec![page, page] })
            }
        })
        .await;

        assert!(matches!(result, Err(Error::Api { status: 503, .. })));
    }
}
