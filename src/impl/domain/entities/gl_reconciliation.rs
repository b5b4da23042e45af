use super::variance_class::VarianceClass;

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedTransaction {
    pub id: String,
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub gl_code: String,
    pub posted_by: String,
    pub dept_code: String,
    pub fiscal_quarter: String,
    pub fiscal_period: String,
    pub transaction_type: String,
    pub po_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDepreciation {
    pub id: String,
    pub asset_id: String,
    pub asset_name: String,
    pub depreciation_amount: f64,
    pub period: String,
    pub accumulated_depreciation: f64,
    pub net_book_value: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, serde_derive::Serialize)]
pub struct QuarterlyAmounts {
    pub actual: f64,
    pub commit: f64,
    pub forecast: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, serde_derive::Serialize)]
pub struct YearlyQuarters {
    #[serde(rename = "Q1")]
    pub q1: QuarterlyAmounts,
    #[serde(rename = "Q2")]
    pub q2: QuarterlyAmounts,
    #[serde(rename = "Q3")]
    pub q3: QuarterlyAmounts,
    #[serde(rename = "Q4")]
    pub q4: QuarterlyAmounts,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyPoFinancial {
    pub po_number: String,
    pub vendor: String,
    pub project: String,
    pub department: String,
    pub quarters: YearlyQuarters,
    pub total_amount: f64,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlReconciliationRecord {
    pub id: String,
    pub dept_level2: String,
    pub dept_level3: String,
    pub dept_level4: String,
    pub dept_level5: String,
    pub dept_number: String,
    pub fiscal_year: String,
    pub fiscal_quarter: String,
    pub fiscal_month: String,
    pub actual_amount: f64,
    pub linked_transactions: Vec<LinkedTransaction>,
    pub asset_depreciations: Vec<AssetDepreciation>,
    pub yearly_po_financials: Vec<YearlyPoFinancial>,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlReconciliationSummary {
    pub id: String,
    pub dept_number: String,
    pub fiscal_year: String,
    pub fiscal_quarter: String,
    pub actual_amount: f64,
    pub linked_total: f64,
    /// GL actuals not covered by linked transactions.
    pub unreconciled_amount: f64,
    pub depreciation_total: f64,
    pub po_quarter: QuarterlyAmounts,
    /// PO actual vs. forecast in percent; `None` until actuals are posted.
    pub variance_pct: Option<f64>,
    pub variance_class: Option<VarianceClass>,
}
