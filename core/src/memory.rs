//! An in-memory [`Rateable`] for tests, demos and prototypes.

use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};

use crate::{
    error::RatingError,
    rateable::{DimensionConfig, Rate, Rateable},
    user::UserId,
};

/// A rateable record that keeps every rate in memory.
///
/// Cached averages are bucketed to the nearest half star, which is what the
/// star display renders. Uncached averages are the exact arithmetic mean.
///
/// ```
/// use ajaxful_rating_core::{MemoryRateable, Rateable, UserId};
///
/// let mut article = MemoryRateable::new("article", 1);
/// article.rate(&UserId::from(1_u64), 4, None)?;
/// article.rate(&UserId::from(2_u64), 5, None)?;
/// assert_eq!(article.rate_average(false, None), 4.5);
/// # Ok::<(), ajaxful_rating_core::RatingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MemoryRateable {
    dom_class: String,
    record_id: String,
    global: DimensionConfig,
    dimensions: BTreeMap<String, DimensionConfig>,
    rates: BTreeMap<Option<String>, Vec<(UserId, u32)>>,
}

impl MemoryRateable {
    /// Creates a record with the default five star scale.
    pub fn new(dom_class: impl Into<String>, record_id: impl ToString) -> Self {
        Self {
            dom_class: dom_class.into(),
            record_id: record_id.to_string(),
            global: DimensionConfig::default(),
            dimensions: BTreeMap::new(),
            rates: BTreeMap::new(),
        }
    }

    /// Replaces the global configuration.
    #[must_use]
    pub const fn with_config(mut self, config: DimensionConfig) -> Self {
        self.global = config;
        self
    }

    /// Adds a named dimension with its own configuration.
    #[must_use]
    pub fn with_dimension(mut self, name: impl Into<String>, config: DimensionConfig) -> Self {
        self.dimensions.insert(name.into(), config);
        self
    }

    /// Records a rate from `user`.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::StarsOutOfRange`] when `stars` is not within
    /// `1..=max`, and [`RatingError::AlreadyRated`] when the user already rated a
    /// dimension that does not allow updates.
    pub fn rate(
        &mut self,
        user: &UserId,
        stars: u32,
        dimension: Option<&str>,
    ) -> Result<(), RatingError> {
        let config = self.dimension_config(dimension);
        if stars == 0 || stars > config.max_stars {
            return Err(RatingError::StarsOutOfRange {
                stars,
                max: config.max_stars,
            });
        }

        let rates = self.rates.entry(dimension.map(String::from)).or_default();
        if let Some(existing) = rates.iter_mut().find(|(id, _)| id == user) {
            if !config.allow_update {
                return Err(RatingError::AlreadyRated);
            }
            existing.1 = stars;
        } else {
            rates.push((user.clone(), stars));
        }

        tracing::debug!(
            record = %self.record_id,
            user = %user,
            stars,
            dimension = dimension.unwrap_or_default(),
            "rate recorded"
        );
        Ok(())
    }

    /// Number of rates on a dimension.
    #[must_use]
    pub fn total_rates(&self, dimension: Option<&str>) -> usize {
        self.rates_for(dimension).map_or(0, <[_]>::len)
    }

    /// Sum of all stars given on a dimension.
    #[must_use]
    pub fn rates_sum(&self, dimension: Option<&str>) -> u64 {
        self.rates_for(dimension)
            .map_or(0, |rates| rates.iter().map(|(_, stars)| u64::from(*stars)).sum())
    }

    fn rates_for(&self, dimension: Option<&str>) -> Option<&[(UserId, u32)]> {
        self.rates
            .get(&dimension.map(String::from))
            .map(Vec::as_slice)
    }
}

impl Rateable for MemoryRateable {
    fn dom_class(&self) -> &str {
        &self.dom_class
    }

    fn record_id(&self) -> String {
        self.record_id.clone()
    }

    fn dimension_config(&self, dimension: Option<&str>) -> DimensionConfig {
        dimension
            .and_then(|name| self.dimensions.get(name))
            .copied()
            .unwrap_or(self.global)
    }

    #[allow(clippy::cast_precision_loss)]
    fn rate_average(&self, cached: bool, dimension: Option<&str>) -> f64 {
        let total = self.total_rates(dimension);
        if total == 0 {
            return 0.0;
        }
        let mean = self.rates_sum(dimension) as f64 / total as f64;
        if cached {
            (mean * 2.0).round() / 2.0
        } else {
            mean
        }
    }

    fn rate_by(&self, user: &UserId, dimension: Option<&str>) -> Option<Rate> {
        self.rates_for(dimension)?
            .iter()
            .find(|(id, _)| id == user)
            .map(|(_, stars)| Rate::new(*stars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64) -> UserId {
        UserId::from(id)
    }

    #[test]
    fn test_empty_average_is_zero() {
        let article = MemoryRateable::new("article", 1);
        assert!(article.rate_average(true, None).abs() < f64::EPSILON);
        assert_eq!(article.total_rates(None), 0);
    }

    #[test]
    fn test_cached_average_rounds_to_half_stars() {
        let mut article = MemoryRateable::new("article", 1);
        article.rate(&user(1), 4, None).unwrap();
        article.rate(&user(2), 4, None).unwrap();
        article.rate(&user(3), 5, None).unwrap();

        let exact = article.rate_average(false, None);
        assert!((exact - 13.0 / 3.0).abs() < 1e-9);
        assert!((article.rate_average(true, None) - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_out_of_range_stars() {
        let mut article =
            MemoryRateable::new("article", 1).with_dimension("speed", DimensionConfig::new(3));
        assert_eq!(
            article.rate(&user(1), 4, Some("speed")),
            Err(RatingError::StarsOutOfRange { stars: 4, max: 3 })
        );
        assert_eq!(
            article.rate(&user(1), 0, None),
            Err(RatingError::StarsOutOfRange { stars: 0, max: 5 })
        );
    }

    #[test]
    fn test_updates_follow_configuration() {
        let mut article = MemoryRateable::new("article", 1)
            .with_dimension("speed", DimensionConfig::new(5).allow_update(true));

        article.rate(&user(1), 2, None).unwrap();
        assert_eq!(
            article.rate(&user(1), 3, None),
            Err(RatingError::AlreadyRated)
        );

        article.rate(&user(1), 2, Some("speed")).unwrap();
        article.rate(&user(1), 4, Some("speed")).unwrap();
        assert_eq!(article.rate_by(&user(1), Some("speed")), Some(Rate::new(4)));
        assert_eq!(article.total_rates(Some("speed")), 1);
    }

    #[test]
    fn test_dimensions_are_independent() {
        let mut article = MemoryRateable::new("article", 1);
        article.rate(&user(1), 5, Some("quality")).unwrap();

        assert!(article.rated_by(&user(1), Some("quality")));
        assert!(!article.rated_by(&user(1), None));
        assert_eq!(article.rates_sum(Some("quality")), 5);
        assert_eq!(article.dimension_config(Some("quality")), DimensionConfig::default());
    }
}
