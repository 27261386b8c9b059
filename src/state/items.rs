/// Item Resolver
///
/// Fetches the downloadable files of one fully specified version. Only
/// runs on explicit submission, never on version selection alone.

use log::{debug, error, info};

use super::data::{DownloadableItem, SelectableVersion};
use super::slot::{Completion, RequestSlot};
use crate::api::client::DetailsQuery;
use crate::api::response::{Listed, Listing};
use crate::error::FetchError;

/// Binds a details request to the (product, version) selection that triggered it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsTicket {
    pub generation: u64,
    pub product_id: String,
    pub selection_key: String,
}

/// A details request ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsRequest {
    pub ticket: DetailsTicket,
    pub query: DetailsQuery,
}

#[derive(Debug, Default)]
pub struct ItemResolver {
    items: Vec<DownloadableItem>,
    slot: RequestSlot,
}

impl ItemResolver {
    pub fn items(&self) -> &[DownloadableItem] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.slot.is_loading()
    }

    /// Drop the items and forget any pending request
    pub(crate) fn reset(&mut self) {
        self.items.clear();
        self.slot.cancel();
    }

    /// Start fetching the items of `version`, superseding any earlier fetch
    pub(crate) fn begin(&mut self, product_id: &str, version: &SelectableVersion) -> DetailsRequest {
        self.items.clear();
        let generation = self.slot.start();
        info!(
            "🔍 Fetching download details for {} {} build {} (#{})",
            product_id, version.version_string, version.build_id, generation
        );

        DetailsRequest {
            ticket: DetailsTicket {
                generation,
                product_id: product_id.to_string(),
                selection_key: version.selection_key.clone(),
            },
            query: DetailsQuery {
                product_id: product_id.to_string(),
                version: version.version_string.clone(),
                build: version.build_id.clone(),
                platform_or_arch: version.platform_or_arch.clone(),
                manifest_path: version.manifest_path.clone(),
            },
        }
    }

    /// Apply a finished fetch against the live (product, version) selection.
    /// Along with the completion, returns the message to show (if any).
    pub(crate) fn complete(
        &mut self,
        ticket: &DetailsTicket,
        live: (Option<&str>, Option<&str>),
        result: Result<Listed<DownloadableItem>, FetchError>,
    ) -> (Completion, Option<String>) {
        let matches = live.0 == Some(ticket.product_id.as_str())
            && live.1 == Some(ticket.selection_key.as_str());
        if !matches || !self.slot.finish(ticket.generation) {
            debug!(
                "Discarding stale download details for {}/{} (#{})",
                ticket.product_id, ticket.selection_key, ticket.generation
            );
            return (Completion::Discarded, None);
        }

        if let Err(err) = &result {
            error!(
                "Error fetching download details for {}/{}: {}",
                ticket.product_id, ticket.selection_key, err
            );
        }
        let (items, notice) = DownloadableItem::settle(result);
        info!("📦 {} downloadable items for {}", items.len(), ticket.selection_key);
        self.items = items;
        (Completion::Applied, notice)
    }
}
