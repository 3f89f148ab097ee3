use crate::domain::RawIndicators;

/// Percentage of the tracked indicators that carry a value.
pub fn data_quality(indicators: &RawIndicators) -> f64 {
    indicators.present_count() as f64 / RawIndicators::FIELD_COUNT as f64 * 100.0
}
