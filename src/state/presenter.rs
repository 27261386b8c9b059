/// Link Presenter
///
/// Derives the final download URL of each item and tracks the transient
/// "Copied!" acknowledgement after a successful copy.

use log::{info, warn};
use std::time::Duration;

use super::data::DownloadableItem;
use crate::error::ClipboardError;

/// Base URL every item's path fragment is appended to
pub const BASE_DOWNLOAD_URL: &str = "https://softwareupdate-prod.broadcom.com/cds/vmw-desktop/";

/// How long the "Copied!" acknowledgement stays visible
pub const COPIED_ACK_DURATION: Duration = Duration::from_secs(2);

/// Full download URL of an item (plain concatenation, no normalization)
pub fn final_link(item: &DownloadableItem) -> String {
    format!("{}{}{}", BASE_DOWNLOAD_URL, item.path_fragment, item.final_file_name)
}

/// Check the clipboard read-back against the text that was written
pub fn confirm_copy(read_back: Option<String>, expected: &str) -> Result<(), ClipboardError> {
    match read_back {
        Some(contents) if contents == expected => Ok(()),
        Some(_) => Err(ClipboardError::Mismatch),
        None => Err(ClipboardError::Unavailable),
    }
}

/// Copy acknowledgement state. At most one clear timer is live at a time.
#[derive(Debug, Default)]
pub struct LinkPresenter {
    copied: Option<usize>,
    generation: u64,
}

impl LinkPresenter {
    pub fn copied_index(&self) -> Option<usize> {
        self.copied
    }

    /// Record the outcome of a copy of item `index`.
    ///
    /// On success returns the generation the clear timer must report back
    /// with; any earlier pending clear is superseded. Failures leave the
    /// state untouched.
    pub fn record_copy(&mut self, index: usize, result: Result<(), ClipboardError>) -> Option<u64> {
        match result {
            Ok(()) => {
                self.generation += 1;
                self.copied = Some(index);
                info!("📋 Copied link #{}", index);
                Some(self.generation)
            }
            Err(err) => {
                warn!("Failed to copy link #{}: {}", index, err);
                None
            }
        }
    }

    /// Timer for `generation` fired. Clears only if no newer copy happened.
    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.copied = None;
        }
    }

    /// Forget the acknowledgement and supersede any pending timer
    pub(crate) fn reset(&mut self) {
        self.generation += 1;
        self.copied = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(path_fragment: &str, final_file_name: &str) -> DownloadableItem {
        DownloadableItem {
            name: "Installer".to_string(),
            path_fragment: path_fragment.to_string(),
            final_file_name: final_file_name.to_string(),
            checksum_type: None,
            checksum_value: None,
        }
    }

    #[test]
    fn test_final_link() {
        assert_eq!(
            final_link(&item("abc/", "x.exe")),
            "https://softwareupdate-prod.broadcom.com/cds/vmw-desktop/abc/x.exe"
        );
    }

    #[test]
    fn test_final_link_does_not_normalize() {
        assert_eq!(
            final_link(&item("abc", "/x.exe")),
            "https://softwareupdate-prod.broadcom.com/cds/vmw-desktop/abc/x.exe"
        );
        assert_eq!(
            final_link(&item("abc//", "x.exe")),
            "https://softwareupdate-prod.broadcom.com/cds/vmw-desktop/abc//x.exe"
        );
    }

    #[test]
    fn test_copy_then_expire() {
        let mut presenter = LinkPresenter::default();
        let generation = presenter.record_copy(2, Ok(())).unwrap();
        assert_eq!(presenter.copied_index(), Some(2));

        presenter.expire(generation);
        assert_eq!(presenter.copied_index(), None);
    }

    #[test]
    fn test_later_copy_supersedes_pending_clear() {
        let mut presenter = LinkPresenter::default();
        let first = presenter.record_copy(2, Ok(())).unwrap();
        let second = presenter.record_copy(0, Ok(())).unwrap();

        // The timer started for index 2 fires first and must not clear index 0
        presenter.expire(first);
        assert_eq!(presenter.copied_index(), Some(0));

        presenter.expire(second);
        assert_eq!(presenter.copied_index(), None);
    }

    #[test]
    fn test_failed_copy_leaves_state_unchanged() {
        let mut presenter = LinkPresenter::default();
        let generation = presenter.record_copy(1, Ok(())).unwrap();

        assert_eq!(presenter.record_copy(3, Err(ClipboardError::Unavailable)), None);
        assert_eq!(presenter.copied_index(), Some(1));

        // The first timer still clears it
        presenter.expire(generation);
        assert_eq!(presenter.copied_index(), None);
    }

    #[test]
    fn test_reset_supersedes_timer() {
        let mut presenter = LinkPresenter::default();
        let generation = presenter.record_copy(1, Ok(())).unwrap();
        presenter.reset();
        assert_eq!(presenter.copied_index(), None);

        let next = presenter.record_copy(4, Ok(())).unwrap();
        presenter.expire(generation);
        assert_eq!(presenter.copied_index(), Some(4));
        presenter.expire(next);
        assert_eq!(presenter.copied_index(), None);
    }

    #[test]
    fn test_confirm_copy() {
        assert_eq!(confirm_copy(Some("a".to_string()), "a"), Ok(()));
        assert_eq!(confirm_copy(Some("b".to_string()), "a"), Err(ClipboardError::Mismatch));
        assert_eq!(confirm_copy(None, "a"), Err(ClipboardError::Unavailable));
    }
}
