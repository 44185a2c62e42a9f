//! Types returned by the coin price client

use serde::{Deserialize, Serialize};

/// Hourly USD price series for a coin, oldest first
///
/// The length always matches the number of entries the API returned.
/// Entries the API sent in an unexpected shape are stored as `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceHistory {
    prices: Vec<f32>,
}

impl PriceHistory {
    /// Create a history from already parsed prices
    pub fn new(prices: Vec<f32>) -> Self {
        Self { prices }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Most recent sample, if any
    pub fn latest(&self) -> Option<f32> {
        self.prices.last().copied()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.prices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.prices.iter()
    }

    /// Consumes the history, returning the underlying samples
    pub fn into_vec(self) -> Vec<f32> {
        self.prices
    }
}

impl From<Vec<f32>> for PriceHistory {
    fn from(prices: Vec<f32>) -> Self {
        Self::new(prices)
    }
}

impl IntoIterator for PriceHistory {
    type Item = f32;
    type IntoIter = std::vec::IntoIter<f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.prices.into_iter()
    }
}

impl<'a> IntoIterator for &'a PriceHistory {
    type Item = &'a f32;
    type IntoIter = std::slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.prices.iter()
    }
}

impl std::fmt::Display for PriceHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.latest() {
            Some(latest) => write!(f, "{} samples, latest ${:.2}", self.len(), latest),
            None => write!(f, "0 samples"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_is_last_sample() {
        let history = PriceHistory::new(vec![1.0, 2.0, 3.5]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.latest(), Some(3.5));
        assert_eq!(history.to_string(), "3 samples, latest $3.50");
    }

    #[test]
    fn empty_history() {
        let history = PriceHistory::default();
        assert!(history.is_empty());
        assert_eq!(history.latest(), None);
        assert_eq!(history.to_string(), "0 samples");
    }

    #[test]
    fn serializes_as_plain_array() {
        let history = PriceHistory::from(vec![10.0, 20.5]);
        assert_eq!(serde_json::to_string(&history).unwrap(), "[10.0,20.5]");
    }
}
