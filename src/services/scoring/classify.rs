use crate::domain::UrgencyLevel;

/// Lower bounds on `overall`, checked top-down.
pub const URGENCY_THRESHOLDS: [(f64, UrgencyLevel); 4] = [
    (90.0, UrgencyLevel::Critical),
    (70.0, UrgencyLevel::High),
    (50.0, UrgencyLevel::Medium),
    (30.0, UrgencyLevel::Low),
];

impl UrgencyLevel {
    pub fn from_score(overall: f64) -> Self {
        URGENCY_THRESHOLDS
            .iter()
            .find(|(threshold, _)| overall >= *threshold)
            .map(|(_, level)| *level)
            .unwrap_or(UrgencyLevel::Stable)
    }

    pub fn marker_color(&self) -> &'static str {
        match self {
            UrgencyLevel::Critical => "#DC2626",
            UrgencyLevel::High => "#EA580C",
            UrgencyLevel::Medium => "#EAB308",
            UrgencyLevel::Low => "#16A34A",
            UrgencyLevel::Stable => "#9CA3AF",
        }
    }
}
