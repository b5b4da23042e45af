use chrono::NaiveDate;

use super::{monthly_forecast::MonthlyForecast, quarter_data::QuarterBuckets};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize)]
pub struct Uplift {
    pub price: u32,
    pub volume: u32,
    pub expansion: u32,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoFinancials {
    pub po_number: String,
    pub forecast: QuarterBuckets,
    pub commit: QuarterBuckets,
    pub actuals: QuarterBuckets,
    /// Currently mirrors the forecast buckets.
    pub liability: QuarterBuckets,
    pub uplift: Uplift,
    pub monthly_data: Vec<MonthlyForecast>,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoForecast {
    pub po_number: String,
    pub vendor: Option<String>,
    pub total_amount: Option<f64>,
    #[serde(serialize_with = "crate::presentation::utils::serialize_optional_iso_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(serialize_with = "crate::presentation::utils::serialize_optional_iso_date")]
    pub end_date: Option<NaiveDate>,
    pub term_months: Option<u32>,
    pub currency: String,
    pub monthly_forecasts: Vec<MonthlyForecast>,
}
