//! Canonical coverage representation and the grid-handle adapter.

/// An opened, format-specific dataset exposing its grids.
///
/// Format backends return these; the byte-level decoding behind them is
/// not this crate's concern.
pub trait GridHandle {
    /// Number of grids the dataset contains.
    fn grid_count(&self) -> usize;

    /// Names of the grids, in dataset order.
    fn grid_names(&self) -> Vec<String>;

    /// Where the dataset was opened from, for reporting.
    fn location(&self) -> &str;
}

/// Canonical in-memory representation of a gridded dataset.
///
/// The uniform output of endpoint resolution, independent of the format
/// or transport the data came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    location: String,
    grids: Vec<String>,
}

impl Coverage {
    pub fn new(location: impl Into<String>, grids: Vec<String>) -> Self {
        Self {
            location: location.into(),
            grids,
        }
    }

    /// Where the underlying dataset was opened from.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Names of the grids in this coverage.
    pub fn grids(&self) -> &[String] {
        &self.grids
    }

    /// Whether the coverage contains at least one grid.
    pub fn has_grids(&self) -> bool {
        !self.grids.is_empty()
    }
}

/// Adapts an already-opened grid handle into a [`Coverage`].
pub struct CoverageAdapter;

impl CoverageAdapter {
    /// Wrap a non-empty handle. Pure adaptation, no I/O.
    ///
    /// Callers verify `grid_count() > 0` first; the resolver returns its
    /// explicit empty outcome for gridless datasets instead of wrapping
    /// them.
    pub fn wrap(handle: &dyn GridHandle) -> Coverage {
        Coverage::new(handle.location(), handle.grid_names())
    }
}
