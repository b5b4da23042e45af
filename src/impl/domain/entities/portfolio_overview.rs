use std::collections::BTreeMap;

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct YearSplit {
    pub cy: f64,
    pub fy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct ActualsToDate {
    pub mtd: f64,
    pub qtd: f64,
    pub ytd: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioKpis {
    pub total_annualized_spend: f64,
    pub forecast: YearSplit,
    pub commit: YearSplit,
    pub actuals: ActualsToDate,
    pub variance: f64,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPo {
    pub po_number: String,
    pub vendor: String,
    pub application: String,
    pub term: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub amount: f64,
    pub ownership: String,
    pub status: String,
}

/// Forecast per calendar quarter (`2024-Q1`) for one PO.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastMatrixRow {
    pub po_number: String,
    pub buckets: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActualPosting {
    pub date: NaiveDate,
    pub po_number: String,
    pub amount: f64,
    pub account: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize, serde_derive::Deserialize)]
pub enum RenewalRisk {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Renewal {
    pub po_number: String,
    pub next_renewal_date: NaiveDate,
    pub expected_quantity: u32,
    pub unit_price: f64,
    pub expected_amount: f64,
    pub term: String,
    pub risk: RenewalRisk,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    pub kpis: PortfolioKpis,
    pub pos: Vec<PortfolioPo>,
    pub forecast_matrix: Vec<ForecastMatrixRow>,
    pub actuals: Vec<ActualPosting>,
    pub renewals: Vec<Renewal>,
}
