//! Re-sort transform applied to a cached explore feed

use super::sort::{create_pool_sorter, sort_spec};
use super::types::{ExploreData, ExploreTab, QueryArgs, Timeframe};

/// Re-sort the pools of `tab` for `timeframe`.
///
/// Always returns a value: an absent cache entry becomes empty data, and an
/// entry without pools for `tab` comes back unchanged. Only `tab` and
/// `args.timeframe` are replaced. Applying it twice gives the same result.
pub fn patch_explore_data(
    prev: Option<&ExploreData>,
    tab: ExploreTab,
    timeframe: Timeframe,
) -> ExploreData {
    let Some(prev) = prev else {
        return ExploreData::default();
    };
    let Some(page) = prev.tabs.get(&tab) else {
        return prev.clone();
    };

    let mut page = page.clone();
    if let Some(spec) = sort_spec(tab, timeframe) {
        page.pools.sort_by(create_pool_sorter(spec, timeframe));
    }

    let mut next = prev.clone();
    next.tabs.insert(tab, page);
    let args = next.args.get_or_insert_with(QueryArgs::default);
    args.timeframe = timeframe;
    next
}
