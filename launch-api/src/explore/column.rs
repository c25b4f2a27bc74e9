//! Re-sort trigger for the explore column

use super::cache::{QueryCache, QueryFilter, QueryKey};
use super::patch::patch_explore_data;
use super::types::{ExploreData, ExploreRequest, ExploreTab};
use std::sync::Arc;
use tracing::debug;

/// Result of [`ExploreColumn::sync`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Nothing relevant changed since the last run
    Skipped,
    /// Patch applied to this many cache entries
    Patched(usize),
}

/// Tracks the inputs of the last re-sort and re-runs it when one changes:
/// the cache handle, the active tab, or the request parameters.
#[derive(Debug, Default)]
pub struct ExploreColumn {
    last: Option<(usize, ExploreTab, ExploreRequest)>,
}

impl ExploreColumn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync(
        &mut self,
        cache: &Arc<dyn QueryCache<ExploreData>>,
        tab: ExploreTab,
        request: &ExploreRequest,
    ) -> SyncOutcome {
        let cache_id = Arc::as_ptr(cache) as *const () as usize;
        if let Some((last_cache, last_tab, last_request)) = &self.last {
            if *last_cache == cache_id && *last_tab == tab && last_request == request {
                return SyncOutcome::Skipped;
            }
        }

        let timeframe = request.timeframe;
        let written = cache.update_matching(
            &QueryFilter::active(QueryKey::explore(request)),
            &mut |prev| patch_explore_data(prev, tab, timeframe),
        );
        debug!("Re-sorted {} explore entries for {} ({})", written, tab, timeframe);

        self.last = Some((cache_id, tab, request.clone()));
        SyncOutcome::Patched(written)
    }
}
