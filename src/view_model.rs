//! The view-model behind the photos screen.
//!
//! Owns the current query and the photo list. Every query change starts one
//! backend request on the Tokio runtime; the result is published on a watch
//! channel that the screen polls through a [`PhotoFeed`].

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::backend::PhotoBackend;
use crate::constants::{LOG_SEARCH_FAILED, LOG_SEARCH_STARTED, LOG_SEARCH_SUPERSEDED};
use crate::photos::{Photo, PhotoFeed};

pub struct PhotosViewModel {
    backend: Arc<dyn PhotoBackend>,
    per_page: u32,
    query: String,
    photos_tx: Arc<watch::Sender<Vec<Photo>>>,
    photos_rx: watch::Receiver<Vec<Photo>>,
    in_flight: Option<JoinHandle<()>>,
}

impl PhotosViewModel {
    pub fn new(backend: Arc<dyn PhotoBackend>, per_page: u32) -> Self {
        let (tx, rx) = watch::channel(Vec::new());
        Self {
            backend,
            per_page,
            query: String::new(),
            photos_tx: Arc::new(tx),
            photos_rx: rx,
            in_flight: None,
        }
    }

    /// A fresh subscription to the photo list.
    pub fn photos_feed(&self) -> PhotoFeed {
        PhotoFeed::new(self.photos_rx.clone())
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether a request is still running.
    pub fn is_searching(&self) -> bool {
        self.in_flight.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Fetch results for the empty query (the curated selection).
    pub fn load_initial(&mut self) {
        self.update_results(String::new());
    }

    /// Replace the query and fetch its results.
    ///
    /// A request still running for an earlier query is aborted, so only the
    /// newest query can ever publish. Failures are logged and publish
    /// nothing; subscribers keep the previous list.
    pub fn update_results(&mut self, query: impl Into<String>) {
        self.query = query.into();

        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                log::debug!("{}", LOG_SEARCH_SUPERSEDED);
                handle.abort();
            }
        }

        let backend = Arc::clone(&self.backend);
        let tx = Arc::clone(&self.photos_tx);
        let query = self.query.trim().to_string();
        let per_page = self.per_page;

        log::info!("{} '{}' via {}", LOG_SEARCH_STARTED, query, backend.backend_type());
        self.in_flight = Some(tokio::spawn(async move {
            let result = if query.is_empty() {
                backend.curated(per_page).await
            } else {
                backend.search(&query, per_page).await
            };

            match result {
                Ok(photos) => {
                    log::info!("Search: '{}' returned {} photos", query, photos.len());
                    tx.send_replace(photos);
                }
                Err(e) => log::warn!("{} for '{}': {}", LOG_SEARCH_FAILED, query, e),
            }
        }));
    }
}

impl Drop for PhotosViewModel {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
