//! Explore feed data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Category tab of the explore view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExploreTab {
    #[serde(rename = "recent")]
    New,
    #[serde(rename = "aboutToGraduate")]
    Graduating,
    #[serde(rename = "graduated")]
    Graduated,
    #[serde(rename = "trending")]
    Trending,
    #[serde(rename = "watchlist")]
    Watchlist,
}

impl fmt::Display for ExploreTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExploreTab::New => "recent",
            ExploreTab::Graduating => "aboutToGraduate",
            ExploreTab::Graduated => "graduated",
            ExploreTab::Trending => "trending",
            ExploreTab::Watchlist => "watchlist",
        };
        f.write_str(name)
    }
}

/// Stats window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "6h")]
    SixHours,
    #[default]
    #[serde(rename = "24h")]
    OneDay,
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Timeframe::FiveMinutes => "5m",
            Timeframe::OneHour => "1h",
            Timeframe::SixHours => "6h",
            Timeframe::OneDay => "24h",
        };
        f.write_str(name)
    }
}

/// Trading stats over one window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStats {
    pub buy_volume: Option<f64>,
    pub sell_volume: Option<f64>,
    pub price_change: Option<f64>,
}

impl PoolStats {
    /// Buy plus sell volume, if either side is known
    pub fn volume(&self) -> Option<f64> {
        match (self.buy_volume, self.sell_volume) {
            (None, None) => None,
            (buy, sell) => Some(buy.unwrap_or(0.0) + sell.unwrap_or(0.0)),
        }
    }
}

/// The launched token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseAsset {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub liquidity: Option<f64>,
    pub mcap: Option<f64>,
    pub stats5m: Option<PoolStats>,
    pub stats1h: Option<PoolStats>,
    pub stats6h: Option<PoolStats>,
    pub stats24h: Option<PoolStats>,
}

impl BaseAsset {
    pub fn stats(&self, timeframe: Timeframe) -> Option<&PoolStats> {
        match timeframe {
            Timeframe::FiveMinutes => self.stats5m.as_ref(),
            Timeframe::OneHour => self.stats1h.as_ref(),
            Timeframe::SixHours => self.stats6h.as_ref(),
            Timeframe::OneDay => self.stats24h.as_ref(),
        }
    }
}

/// One pool row as fetched. Never mutated; only its position changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolEntry {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub bonding_curve: Option<f64>,
    pub graduated_at: Option<DateTime<Utc>>,
    pub base_asset: BaseAsset,
}

/// Pools cached for one tab, plus whatever else the page carried
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabPage {
    pub pools: Vec<PoolEntry>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Arguments the cached feed was produced with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryArgs {
    #[serde(default)]
    pub timeframe: Timeframe,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Cached explore feed: one page per tab plus the query arguments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExploreData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<QueryArgs>,
    #[serde(flatten)]
    pub tabs: BTreeMap<ExploreTab, TabPage>,
}

impl ExploreData {
    pub fn pools(&self, tab: ExploreTab) -> Option<&[PoolEntry]> {
        self.tabs.get(&tab).map(|page| page.pools.as_slice())
    }
}

/// Active request parameters of the explore view
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExploreRequest {
    pub timeframe: Timeframe,
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
}

impl ExploreRequest {
    pub fn new(timeframe: Timeframe) -> Self {
        Self {
            timeframe,
            filters: BTreeMap::new(),
        }
    }

    pub fn with_filter(mut self, name: &str, value: &str) -> Self {
        self.filters.insert(name.to_string(), value.to_string());
        self
    }
}
