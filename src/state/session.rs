/// Selection Controller
///
/// Holds the user's product and version choices and everything derived
/// from them. Every upstream change clears downstream state right away,
/// even while an older request is still in flight; that request's result
/// is then discarded when it arrives.
///
/// Setters never perform I/O. They hand back a ticket (or request) and the
/// caller turns it into an async task, feeding the result back through
/// `apply_versions` / `apply_items`.

use log::{info, warn};

use super::data::{DownloadableItem, SelectableVersion};
use super::items::{DetailsRequest, DetailsTicket, ItemResolver};
use super::presenter::{self, LinkPresenter};
use super::slot::Completion;
use super::versions::{VersionResolver, VersionTicket};
use crate::api::response::Listed;
use crate::error::{ClipboardError, FetchError, SubmitError};

#[derive(Debug, Default)]
pub struct Session {
    product_id: Option<String>,
    version_key: Option<String>,
    versions: VersionResolver,
    items: ItemResolver,
    links: LinkPresenter,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Accessors ==========

    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }

    pub fn version_key(&self) -> Option<&str> {
        self.version_key.as_deref()
    }

    pub fn versions(&self) -> &[SelectableVersion] {
        self.versions.versions()
    }

    /// The selected version, if the key still resolves in the current list
    pub fn selected_version(&self) -> Option<&SelectableVersion> {
        self.version_key.as_deref().and_then(|key| self.versions.find(key))
    }

    pub fn items(&self) -> &[DownloadableItem] {
        self.items.items()
    }

    pub fn is_loading_versions(&self) -> bool {
        self.versions.is_loading()
    }

    pub fn is_loading_details(&self) -> bool {
        self.items.is_loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn copied_index(&self) -> Option<usize> {
        self.links.copied_index()
    }

    /// Whether a submission would currently be accepted by the UI
    pub fn can_submit(&self) -> bool {
        !self.is_loading_versions()
            && !self.is_loading_details()
            && self.product_id.is_some()
            && self.version_key.is_some()
    }

    // ========== Selection ==========

    /// Select a product (or clear it with `None` / an empty id).
    ///
    /// Clears versions, the version selection, items and the error message.
    /// Returns the ticket of the version fetch to start, if any. Selecting
    /// the product that is already selected changes nothing.
    pub fn set_product(&mut self, product_id: Option<&str>) -> Option<VersionTicket> {
        let product_id = product_id.filter(|id| !id.is_empty());
        if product_id == self.product_id.as_deref() {
            return None;
        }

        self.product_id = product_id.map(str::to_string);
        self.version_key = None;
        self.clear_items();
        self.error = None;

        match product_id {
            Some(id) => Some(self.versions.begin(id)),
            None => {
                self.versions.reset();
                None
            }
        }
    }

    /// Select a version by its selection key (or clear it). Clears items.
    pub fn set_version(&mut self, selection_key: Option<&str>) {
        self.version_key = selection_key.filter(|key| !key.is_empty()).map(str::to_string);
        self.clear_items();
    }

    // ========== Version Resolver ==========

    /// Feed back a finished version-list fetch. Stale results are ignored.
    pub fn apply_versions(
        &mut self,
        ticket: &VersionTicket,
        result: Result<Listed<SelectableVersion>, FetchError>,
    ) -> Completion {
        let (completion, notice) =
            self.versions.complete(ticket, self.product_id.as_deref(), result);
        if completion == Completion::Applied {
            // The list was replaced, so no previous key can be valid
            self.version_key = None;
            self.error = notice;
        }
        completion
    }

    // ========== Item Resolver ==========

    /// Explicit "show downloadable files" submission.
    ///
    /// Clears the error and items, validates the selection and returns the
    /// request to send. Refusals are also recorded as the error message.
    pub fn submit(&mut self) -> Result<DetailsRequest, SubmitError> {
        self.error = None;
        self.clear_items();

        let (product_id, key) = match (self.product_id.clone(), self.version_key.clone()) {
            (Some(product_id), Some(key)) => (product_id, key),
            _ => return Err(self.refuse(SubmitError::IncompleteSelection)),
        };

        let Some(version) = self.versions.find(&key).cloned() else {
            warn!("Version {} is no longer listed for {}", key, product_id);
            return Err(self.refuse(SubmitError::StaleSelection));
        };

        Ok(self.items.begin(&product_id, &version))
    }

    /// Feed back a finished details fetch. Stale results are ignored.
    pub fn apply_items(
        &mut self,
        ticket: &DetailsTicket,
        result: Result<Listed<DownloadableItem>, FetchError>,
    ) -> Completion {
        let live = (self.product_id.as_deref(), self.version_key.as_deref());
        let (completion, notice) = self.items.complete(ticket, live, result);
        if completion == Completion::Applied {
            self.links.reset();
            self.error = notice;
        }
        completion
    }

    // ========== Link Presenter ==========

    /// Final link of item `index`, if it exists
    pub fn link_at(&self, index: usize) -> Option<String> {
        self.items().get(index).map(presenter::final_link)
    }

    /// Record a copy outcome. Returns the generation for the clear timer.
    pub fn copy_finished(&mut self, index: usize, result: Result<(), ClipboardError>) -> Option<u64> {
        self.links.record_copy(index, result)
    }

    pub fn copy_expired(&mut self, generation: u64) {
        self.links.expire(generation);
    }

    fn clear_items(&mut self) {
        self.items.reset();
        self.links.reset();
    }

    fn refuse(&mut self, err: SubmitError) -> SubmitError {
        info!("Submission refused: {}", err);
        self.error = Some(err.to_string());
        err
    }
}
