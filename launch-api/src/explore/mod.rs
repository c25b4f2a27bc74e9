//! Explore feed cache: per-tab pool lists re-sorted in place when the
//! active tab or timeframe changes.
//!
//! Nothing here fetches data. The transform only reorders what is already
//! cached, and the cache applies it through `update_matching`.

pub mod cache;
pub mod column;
pub mod patch;
pub mod sort;
pub mod types;

pub use cache::{MemoryQueryCache, QueryCache, QueryFilter, QueryKey};
pub use column::{ExploreColumn, SyncOutcome};
pub use patch::patch_explore_data;
pub use sort::{
    category_sort_by, category_sort_dir, create_pool_sorter, normalize_sort_by_field, sort_spec,
    SortDir, SortField, SortSpec,
};
pub use types::*;
