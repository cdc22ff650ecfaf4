//! Endpoint resolution.
//!
//! `EndpointResolver` turns a dataset reference into a canonical
//! [`Coverage`], dispatching by scheme to a format backend (local paths)
//! or a remote client (remote protocols). Resolution is synchronous and
//! blocking; there is no caching and no retry.

use tracing::debug;

use crate::coverage::{Coverage, CoverageAdapter, GridHandle};
use crate::endpoint::EndpointScheme;
use crate::error::CoverageResult;

/// Opens a local dataset path into a grid-bearing handle.
pub trait FormatBackend: Send + Sync {
    fn open(&self, path: &str) -> CoverageResult<Box<dyn GridHandle>>;
}

/// Opens a remote endpoint directly into a coverage.
pub trait RemoteClient: Send + Sync {
    fn open(&self, endpoint: &str) -> CoverageResult<Coverage>;
}

/// Outcome of resolving an endpoint.
///
/// A local dataset that opens cleanly but contains no grids is a
/// legitimate result, kept distinct from both success-with-coverage and
/// failure so callers can tell "nothing there" apart from "could not
/// open".
#[derive(Debug, Clone)]
pub enum Resolution {
    Coverage(Coverage),
    Empty,
}

impl Resolution {
    /// The coverage, if resolution produced one.
    pub fn coverage(self) -> Option<Coverage> {
        match self {
            Resolution::Coverage(c) => Some(c),
            Resolution::Empty => None,
        }
    }

    /// Whether this is the explicit empty outcome.
    pub fn is_empty(&self) -> bool {
        matches!(self, Resolution::Empty)
    }
}

/// Classifies endpoints and dispatches to the matching opener.
pub struct EndpointResolver<B, R> {
    backend: B,
    remote: R,
}

impl<B: FormatBackend, R: RemoteClient> EndpointResolver<B, R> {
    pub fn new(backend: B, remote: R) -> Self {
        Self { backend, remote }
    }

    /// Resolve an endpoint into a coverage.
    ///
    /// Remote schemes delegate to the remote client and return its
    /// coverage directly. Local paths (with or without a `file:` prefix)
    /// go through the format backend; a handle with zero grids yields
    /// [`Resolution::Empty`].
    pub fn resolve(&self, endpoint: &str) -> CoverageResult<Resolution> {
        match EndpointScheme::classify(endpoint) {
            (EndpointScheme::Remote, rest) => {
                debug!(endpoint = %rest, "Opening remote feature dataset");
                Ok(Resolution::Coverage(self.remote.open(rest)?))
            }
            (EndpointScheme::Http, full) => {
                debug!(endpoint = %full, "Opening http endpoint");
                Ok(Resolution::Coverage(self.remote.open(full)?))
            }
            (EndpointScheme::File, path) | (EndpointScheme::Local, path) => self.open_local(path),
        }
    }

    fn open_local(&self, path: &str) -> CoverageResult<Resolution> {
        let handle = self.backend.open(path)?;
        if handle.grid_count() == 0 {
            debug!(path = %path, "Dataset contains no grids");
            return Ok(Resolution::Empty);
        }
        debug!(path = %path, grids = handle.grid_count(), "Opened local dataset");
        Ok(Resolution::Coverage(CoverageAdapter::wrap(handle.as_ref())))
    }
}
