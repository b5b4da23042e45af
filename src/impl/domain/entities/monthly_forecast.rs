use chrono::{DateTime, Utc};

use super::fiscal_period::{FiscalQuarter, FiscalYear};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastStatus {
    /// Closed month: actuals are posted and the forecast can no longer be
    /// edited.
    Locked,
    Draft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastBasis {
    Approved,
    Auto,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyForecast {
    pub id: String,
    pub po_id: String,
    pub year: i32,
    pub month: u32,
    pub quarter: FiscalQuarter,
    pub fiscal_year: FiscalYear,
    pub period: String,
    pub period_label: String,
    pub forecast_amount: f64,
    pub actual_amount: Option<f64>,
    pub commit_amount: f64,
    pub variance: f64,
    pub status: ForecastStatus,
    pub basis: ForecastBasis,
    #[serde(serialize_with = "crate::presentation::utils::serialize_iso_timestamp")]
    pub last_modified: DateTime<Utc>,
    pub modified_by: String,
}

impl MonthlyForecast {
    pub fn is_locked(&self) -> bool {
        self.status == ForecastStatus::Locked
    }
}
