use chrono::NaiveDate;
use serde_derive::Deserialize;

use crate::entities::{ActualPosting, ForecastMatrixRow, PortfolioKpis, PortfolioPo, RenewalRisk};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RenewalModel {
    pub(crate) po_number: String,
    pub(crate) next_renewal_date: NaiveDate,
    pub(crate) expected_quantity: u32,
    pub(crate) unit_price: f64,
    pub(crate) term: String,
    pub(crate) risk: RenewalRisk,
    #[serde(default)]
    pub(crate) notes: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PortfolioOverviewModel {
    pub(crate) kpis: PortfolioKpis,
    pub(crate) pos: Vec<PortfolioPo>,
    #[serde(default)]
    pub(crate) forecast_matrix: Vec<ForecastMatrixRow>,
    #[serde(default)]
    pub(crate) actuals: Vec<ActualPosting>,
    #[serde(default)]
    pub(crate) renewals: Vec<RenewalModel>,
}
