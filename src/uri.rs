//! Opening outbound links.

use crate::constants::LOG_OPEN_URI_FAILED;

/// Opens a URL in whatever handler the platform provides.
///
/// Fire-and-forget: callers never observe the outcome.
pub trait UriHandler {
    fn open_uri(&self, uri: &str);
}

/// Opens links with the desktop's default handler via the `open` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUriHandler;

impl UriHandler for SystemUriHandler {
    fn open_uri(&self, uri: &str) {
        log::info!("Opening URI: {}", uri);
        // Must not wait on the spawned handler
        if let Err(e) = open::that_detached(uri) {
            log::warn!("{} '{}': {}", LOG_OPEN_URI_FAILED, uri, e);
        }
    }
}
