use crate::domain::{CountryScoreRecord, UrgencyLevel};

#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
    pub urgency: Option<UrgencyLevel>,
    pub region: Option<String>,
    pub limit: Option<usize>,
}

impl RecordQuery {
    fn matches(&self, record: &CountryScoreRecord) -> bool {
        let urgency_ok = self
            .urgency
            .map_or(true, |level| record.urgency_level == level);
        let region_ok = self
            .region
            .as_ref()
            .map_or(true, |region| record.basic.region.eq_ignore_ascii_case(region));
        urgency_ok && region_ok
    }

    /// Filters, then sorts by overall score descending with iso3 as tie-break.
    pub fn apply(&self, records: Vec<CountryScoreRecord>) -> Vec<CountryScoreRecord> {
        let mut selected: Vec<CountryScoreRecord> =
            records.into_iter().filter(|r| self.matches(r)).collect();

        selected.sort_by(|a, b| {
            b.scores
                .overall
                .total_cmp(&a.scores.overall)
                .then_with(|| a.basic.iso3.cmp(&b.basic.iso3))
        });

        if let Some(limit) = self.limit {
            selected.truncate(limit);
        }
        selected
    }
}
