use super::{
    fiscal_period::{FiscalQuarter, FiscalYear},
    monthly_forecast::ForecastStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Monthly,
    Quarterly,
    Yearly,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRollup {
    pub label: String,
    pub fiscal_year: FiscalYear,
    pub quarter: Option<FiscalQuarter>,
    pub forecast: f64,
    pub actual: f64,
    pub commit: f64,
    /// Sum of the reported variance of the contributing months.
    pub variance: f64,
    /// Status of the earliest contributing month.
    pub status: ForecastStatus,
    pub month_ids: Vec<String>,
}
