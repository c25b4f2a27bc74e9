//! Sort-key derivation for explore tabs

use super::types::{ExploreTab, PoolEntry, Timeframe};
use std::cmp::Ordering;

/// Field a tab can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    ListedTime,
    BondingCurve,
    GraduatedAt,
    Volume,
    PriceChange,
    Liquidity,
    MarketCap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDir {
    Asc,
    Desc,
}

/// Derived ordering for one tab; recomputed on every patch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub field: SortField,
    pub dir: SortDir,
}

/// Default sort key of a tab. Volume is read from the stats window of
/// `timeframe`. Tabs without a default keep fetched order.
pub fn category_sort_by(tab: ExploreTab, _timeframe: Timeframe) -> Option<&'static str> {
    match tab {
        ExploreTab::New => Some("listedTime"),
        ExploreTab::Graduating => Some("bondingCurve"),
        ExploreTab::Graduated => Some("graduatedAt"),
        ExploreTab::Trending => Some("volume"),
        ExploreTab::Watchlist => None,
    }
}

pub fn category_sort_dir(_tab: ExploreTab) -> SortDir {
    SortDir::Desc
}

/// Map a raw sort key, including older aliases, to a field
pub fn normalize_sort_by_field(sort_by: &str) -> Option<SortField> {
    match sort_by {
        "listedTime" | "createdAt" => Some(SortField::ListedTime),
        "bondingCurve" => Some(SortField::BondingCurve),
        "graduatedAt" => Some(SortField::GraduatedAt),
        "volume" => Some(SortField::Volume),
        "priceChange" => Some(SortField::PriceChange),
        "liquidity" => Some(SortField::Liquidity),
        "mcap" | "marketCap" => Some(SortField::MarketCap),
        _ => None,
    }
}

pub fn sort_spec(tab: ExploreTab, timeframe: Timeframe) -> Option<SortSpec> {
    let field = category_sort_by(tab, timeframe).and_then(normalize_sort_by_field)?;
    Some(SortSpec {
        field,
        dir: category_sort_dir(tab),
    })
}

fn sort_value(pool: &PoolEntry, field: SortField, timeframe: Timeframe) -> Option<f64> {
    let value = match field {
        SortField::ListedTime => Some(pool.created_at.timestamp_millis() as f64),
        SortField::BondingCurve => pool.bonding_curve,
        SortField::GraduatedAt => pool.graduated_at.map(|t| t.timestamp_millis() as f64),
        SortField::Volume => pool.base_asset.stats(timeframe).and_then(|s| s.volume()),
        SortField::PriceChange => pool.base_asset.stats(timeframe).and_then(|s| s.price_change),
        SortField::Liquidity => pool.base_asset.liquidity,
        SortField::MarketCap => pool.base_asset.mcap,
    };
    value.filter(|v| !v.is_nan())
}

/// Comparator for `slice::sort_by`.
///
/// Entries without a value sort last in either direction, and equal keys
/// compare `Equal` so a stable sort keeps fetched order.
pub fn create_pool_sorter(
    spec: SortSpec,
    timeframe: Timeframe,
) -> impl Fn(&PoolEntry, &PoolEntry) -> Ordering {
    move |a, b| {
        match (
            sort_value(a, spec.field, timeframe),
            sort_value(b, spec.field, timeframe),
        ) {
            (Some(x), Some(y)) => match spec.dir {
                SortDir::Asc => x.total_cmp(&y),
                SortDir::Desc => y.total_cmp(&x),
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explore::types::{BaseAsset, PoolStats};
    use chrono::{TimeZone, Utc};

    fn pool(id: &str, curve: Option<f64>, volume_1h: Option<f64>) -> PoolEntry {
        PoolEntry {
            id: id.to_string(),
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            bonding_curve: curve,
            graduated_at: None,
            base_asset: BaseAsset {
                id: format!("{}-mint", id),
                stats1h: volume_1h.map(|v| PoolStats {
                    buy_volume: Some(v),
                    sell_volume: None,
                    price_change: None,
                }),
                ..BaseAsset::default()
            },
        }
    }

    #[test]
    fn test_sort_specs_per_tab() {
        assert_eq!(
            sort_spec(ExploreTab::New, Timeframe::OneDay),
            Some(SortSpec { field: SortField::ListedTime, dir: SortDir::Desc })
        );
        assert_eq!(
            sort_spec(ExploreTab::Graduating, Timeframe::OneDay).map(|s| s.field),
            Some(SortField::BondingCurve)
        );
        assert_eq!(sort_spec(ExploreTab::Watchlist, Timeframe::OneDay), None);
    }

    #[test]
    fn test_normalize_aliases() {
        assert_eq!(normalize_sort_by_field("createdAt"), Some(SortField::ListedTime));
        assert_eq!(normalize_sort_by_field("mcap"), Some(SortField::MarketCap));
        assert_eq!(normalize_sort_by_field("holders"), None);
    }

    #[test]
    fn test_missing_values_sort_last_both_directions() {
        let mut pools = vec![
            pool("a", None, None),
            pool("b", Some(0.5), None),
            pool("c", Some(0.9), None),
        ];
        let desc = SortSpec { field: SortField::BondingCurve, dir: SortDir::Desc };
        pools.sort_by(create_pool_sorter(desc, Timeframe::OneDay));
        let ids: Vec<_> = pools.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);

        let asc = SortSpec { field: SortField::BondingCurve, dir: SortDir::Asc };
        pools.sort_by(create_pool_sorter(asc, Timeframe::OneDay));
        let ids: Vec<_> = pools.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_volume_reads_selected_timeframe() {
        let mut pools = vec![pool("low", None, Some(1.0)), pool("high", None, Some(5.0))];
        let spec = sort_spec(ExploreTab::Trending, Timeframe::OneHour).unwrap();
        pools.sort_by(create_pool_sorter(spec, Timeframe::OneHour));
        assert_eq!(pools[0].id, "high");

        // no 24h stats: every key is missing, order is kept
        let mut pools = vec![pool("low", None, Some(1.0)), pool("high", None, Some(5.0))];
        pools.sort_by(create_pool_sorter(spec, Timeframe::OneDay));
        assert_eq!(pools[0].id, "low");
    }
}
