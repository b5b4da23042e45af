#[derive(Debug, Clone, Copy, Default, PartialEq, serde_derive::Serialize)]
pub struct SpendTiers {
    pub mega: f64,
    pub platinum: f64,
    pub gold: f64,
    pub silver: f64,
    pub bronze: f64,
    pub tail: f64,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct DepartmentSpend {
    pub name: String,
    pub total: f64,
    pub tiers: SpendTiers,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct CategorySpend {
    pub name: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct FundingSource {
    pub total: f64,
    pub tiers: SpendTiers,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct FundingSources {
    pub central: FundingSource,
    pub functional: FundingSource,
}

#[derive(Debug, Clone, Copy, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct LeadersMetrics {
    pub total: f64,
    pub tcv: f64,
    pub acv: f64,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadersView {
    pub level4_spend: Vec<DepartmentSpend>,
    pub level5_spend: Vec<CategorySpend>,
    pub funding_source: FundingSources,
    pub metrics: LeadersMetrics,
}
