use serde_derive::Deserialize;

use crate::entities::{CategorySpend, LeadersMetrics};

#[derive(Debug, Deserialize)]
pub(crate) struct DepartmentTotalModel {
    pub(crate) name: String,
    pub(crate) total: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FundingTotalModel {
    pub(crate) total: f64,
    pub(crate) count: u32,
}

/// Raw leaders-view figures. Tier breakdowns are derived, not stored.
#[derive(Debug, Deserialize)]
pub(crate) struct LeadersViewModel {
    pub(crate) level4_spend: Vec<DepartmentTotalModel>,
    pub(crate) level5_spend: Vec<CategorySpend>,
    pub(crate) central_funding: FundingTotalModel,
    pub(crate) functional_funding: FundingTotalModel,
    pub(crate) metrics: LeadersMetrics,
}
