use chrono::{DateTime, NaiveDate, Utc};

/// `Default` is the 72-month horizon anchored on 2025-08-01.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastConfig {
    pub anchor: NaiveDate,
    pub horizon_months: u32,
    pub closed_months: u32,
    pub approved_months: u32,
    pub fiscal_year_start_month: u32,
    pub modified_by: String,
    pub last_modified: DateTime<Utc>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        let anchor =
            NaiveDate::from_ymd_opt(2025, 8, 1).expect("hardcoded anchor date should be valid");
        Self {
            anchor,
            horizon_months: 72,
            closed_months: 6,
            approved_months: 36,
            fiscal_year_start_month: 8,
            modified_by: "system".to_string(),
            last_modified: anchor
                .and_hms_opt(0, 0, 0)
                .expect("midnight should always be valid")
                .and_utc(),
        }
    }
}
