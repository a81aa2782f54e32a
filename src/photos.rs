//! Photo records and the latest-value feed the screen observes.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// A single search result.
///
/// Photos are owned by the view-model and handed to the UI as snapshots; the
/// UI only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Photo {
    pub photographer: String,
    pub photographer_url: String,
    /// Photo page on the provider's site
    pub url: String,
    /// Image resource
    pub photo_url: String,
    pub alt: String,
    pub avg_color: String,
}

impl Photo {
    /// Stable identity used to key transient per-card UI state.
    pub fn key(&self) -> &str {
        &self.url
    }

    /// Photographer name with its first character uppercased.
    pub fn display_name(&self) -> String {
        let mut chars = self.photographer.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Receiving side of the view-model's photo stream.
///
/// Only the most recent emission matters, so intermediate snapshots published
/// between two polls are coalesced.
#[derive(Debug, Clone)]
pub struct PhotoFeed {
    rx: watch::Receiver<Vec<Photo>>,
}

impl PhotoFeed {
    pub fn new(rx: watch::Receiver<Vec<Photo>>) -> Self {
        Self { rx }
    }

    /// Current snapshot, regardless of whether it was seen before.
    pub fn latest(&self) -> Vec<Photo> {
        self.rx.borrow().clone()
    }

    /// Returns the newest snapshot if one arrived since the last poll.
    ///
    /// A closed channel yields `None`; the screen keeps what it has.
    pub fn poll(&mut self) -> Option<Vec<Photo>> {
        match self.rx.has_changed() {
            Ok(true) => Some(self.rx.borrow_and_update().clone()),
            _ => None,
        }
    }
}
