//! History domain — daily price points from the dedicated history endpoints.
//!
//! Currency history reports both legs of a trade pair; item history is a
//! single flat series. Points are kept in the order the API sends them
//! (newest first, in practice); use [`chronological`] for plotting order.

mod convert;
pub mod wire;

pub use convert::parse_points;

use serde::{Deserialize, Serialize};

/// One daily sample: how many days ago, and the price in chaos.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub days_ago: u64,
    pub value: f64,
}

/// Which leg of a currency pair a series describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Price when receiving the currency for chaos.
    Receive,
    /// Price when paying the currency for chaos.
    Pay,
}

/// Normalized `currencyhistory` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencyHistory {
    pub receive: Vec<HistoryPoint>,
    pub pay: Vec<HistoryPoint>,
}

impl CurrencyHistory {
    pub fn points(&self, direction: Direction) -> &[HistoryPoint] {
        match direction {
            Direction::Receive => &self.receive,
            Direction::Pay => &self.pay,
        }
    }

    pub fn latest(&self, direction: Direction) -> Option<&HistoryPoint> {
        latest(self.points(direction))
    }

    pub fn chronological(&self, direction: Direction) -> Vec<HistoryPoint> {
        chronological(self.points(direction))
    }

    pub fn is_empty(&self) -> bool {
        self.receive.is_empty() && self.pay.is_empty()
    }
}

/// Normalized `itemhistory` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemHistory {
    pub points: Vec<HistoryPoint>,
}

impl ItemHistory {
    pub fn latest(&self) -> Option<&HistoryPoint> {
        latest(&self.points)
    }

    pub fn chronological(&self) -> Vec<HistoryPoint> {
        chronological(&self.points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The point with the smallest `days_ago`; the first one on ties.
pub fn latest(points: &[HistoryPoint]) -> Option<&HistoryPoint> {
    points.iter().min_by_key(|p| p.days_ago)
}

/// Copy of `points` ordered oldest → newest. Ties keep their input order.
pub fn chronological(points: &[HistoryPoint]) -> Vec<HistoryPoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| b.days_ago.cmp(&a.days_ago));
    sorted
}
