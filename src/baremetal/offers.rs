//! Offer lookup
//!
//! The baremetal API has no endpoint to fetch an offer by name, so the whole
//! catalog of the zone is listed and scanned. Drop this module once the API
//! can do the lookup itself.

use super::api::{ListOffersRequest, ListOffersResponse, Offer};
use crate::error::{Error, Result};
use crate::scw::locality::Zone;
use crate::scw::pagination::{fetch_all_pages, DEFAULT_PAGE_SIZE};
use std::future::Future;

/// Source of offer catalog pages
pub trait OfferCatalog {
    fn list_offers_page(
        &self,
        request: &ListOffersRequest,
    ) -> impl Future<Output = Result<ListOffersResponse>> + Send;
}

/// Every offer of `zone`, all pages included
pub async fn list_all_offers<C: OfferCatalog>(catalog: &C, zone: &Zone) -> Result<Vec<Offer>> {
    fetch_all_pages(|page| {
        let request = ListOffersRequest {
            zone: zone.clone(),
            page: Some(page),
            page_size: Some(DEFAULT_PAGE_SIZE),
        };
        async move { catalog.list_offers_page(&request).await }
    })
    .await
}

/// Find an offer by its exact name. The catalog stores names uppercased so
/// `offer_name` is uppercased before comparing.
pub async fn baremetal_offer_by_name<C: OfferCatalog>(
    catalog: &C,
    zone: &Zone,
    offer_name: &str,
) -> Result<Offer> {
    let offers = list_all_offers(catalog, zone).await?;

    let offer_name = offer_name.to_uppercase();
    tracing::debug!("looking up offer {} among {} offers in {}", offer_name, offers.len(), zone);

    offers
        .into_iter()
        .find(|offer| offer.name == offer_name)
        .ok_or(Error::OfferNotFound(offer_name))
}

/// Find an offer by its ID
pub async fn baremetal_offer_by_id<C: OfferCatalog>(
    catalog: &C,
    zone: &Zone,
    offer_id: &str,
) -> Result<Offer> {
    let offers = list_all_offers(catalog, zone).await?;

    tracing::debug!("looking up offer {} among {} offers in {}", offer_id, offers.len(), zone);

    offers
        .into_iter()
        .find(|offer| offer.id == offer_id)
        .ok_or_else(|| Error::OfferNotFound(offer_id.to_string()))
}
