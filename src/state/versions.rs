/// Version Resolver
///
/// Owns the version list of the selected product and the single
/// in-flight request that produces it.

use log::{debug, error, info};

use super::data::SelectableVersion;
use super::slot::{Completion, RequestSlot};
use crate::api::response::{Listed, Listing};
use crate::error::FetchError;

/// Binds a version-list request to the product that triggered it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTicket {
    pub generation: u64,
    pub product_id: String,
}

#[derive(Debug, Default)]
pub struct VersionResolver {
    versions: Vec<SelectableVersion>,
    slot: RequestSlot,
}

impl VersionResolver {
    pub fn versions(&self) -> &[SelectableVersion] {
        &self.versions
    }

    pub fn is_loading(&self) -> bool {
        self.slot.is_loading()
    }

    /// Look up a version by its selection key
    pub fn find(&self, selection_key: &str) -> Option<&SelectableVersion> {
        self.versions.iter().find(|v| v.selection_key == selection_key)
    }

    /// Drop the list and forget any pending request
    pub(crate) fn reset(&mut self) {
        self.versions.clear();
        self.slot.cancel();
    }

    /// Start fetching versions for `product_id`, superseding any earlier fetch
    pub(crate) fn begin(&mut self, product_id: &str) -> VersionTicket {
        self.versions.clear();
        let generation = self.slot.start();
        info!("📋 Fetching versions for {} (#{})", product_id, generation);
        VersionTicket {
            generation,
            product_id: product_id.to_string(),
        }
    }

    /// Apply a finished fetch. `live_product` is the product selected right now.
    /// Along with the completion, returns the message to show (if any).
    pub(crate) fn complete(
        &mut self,
        ticket: &VersionTicket,
        live_product: Option<&str>,
        result: Result<Listed<SelectableVersion>, FetchError>,
    ) -> (Completion, Option<String>) {
        if live_product != Some(ticket.product_id.as_str()) || !self.slot.finish(ticket.generation) {
            debug!(
                "Discarding stale version list for {} (#{})",
                ticket.product_id, ticket.generation
            );
            return (Completion::Discarded, None);
        }

        if let Err(err) = &result {
            error!("Error fetching versions for {}: {}", ticket.product_id, err);
        }
        let (versions, notice) = SelectableVersion::settle(result);
        info!(
            "📦 {} versions available for {}",
            versions.len(),
            ticket.product_id
        );
        self.versions = versions;
        (Completion::Applied, notice)
    }
}
