//! Fetch collaborator contract.
//!
//! Establishing the connection and issuing the request is not this crate's
//! concern; the pipeline only needs a status code and a readable body.
//! Implement [`FrameFetcher`] over whatever HTTP client the target has
//! (a `std` TCP client, an embedded WiFi stack, a test stub).

use crate::error::FrameError;
use crate::stream::ByteSource;

/// Result of issuing a fetch: a status code plus the response body as a
/// forward-only byte stream.
pub struct FetchResponse<S> {
    pub status: u16,
    pub body: S,
}

/// An HTTP-style fetch collaborator.
///
/// A transport-level failure (connect, DNS, TLS) is reported as
/// [`FrameError::Transport`]; a reachable server with a non-200 answer is
/// a successful `fetch` whose `status` the orchestrator will reject.
pub trait FrameFetcher {
    type Body: ByteSource;

    fn fetch(&mut self, url: &str) -> Result<FetchResponse<Self::Body>, FrameError>;
}
