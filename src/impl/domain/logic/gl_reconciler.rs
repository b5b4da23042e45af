use std::collections::BTreeMap;

use crate::{
    domain::logic::variance_classifier::classify_variance,
    entities::{
        AssetDepreciation, GlReconciliationRecord, GlReconciliationSummary, LinkedTransaction,
        QuarterlyAmounts, YearlyPoFinancial, YearlyQuarters,
    },
};

impl YearlyQuarters {
    pub fn quarter(&self, label: &str) -> Option<QuarterlyAmounts> {
        match label {
            "Q1" => Some(self.q1),
            "Q2" => Some(self.q2),
            "Q3" => Some(self.q3),
            "Q4" => Some(self.q4),
            _ => None,
        }
    }
}

pub(crate) fn summarize(record: &GlReconciliationRecord) -> GlReconciliationSummary {
    let linked_total: f64 = record.linked_transactions.iter().map(|t| t.amount).sum();
    let depreciation_total: f64 = record
        .asset_depreciations
        .iter()
        .map(|a| a.depreciation_amount)
        .sum();
    let po_quarter = record
        .yearly_po_financials
        .iter()
        .filter_map(|po| po.quarters.quarter(&record.fiscal_quarter))
        .fold(QuarterlyAmounts::default(), |acc, q| QuarterlyAmounts {
            actual: acc.actual + q.actual,
            commit: acc.commit + q.commit,
            forecast: acc.forecast + q.forecast,
        });
    let variance_pct = (po_quarter.actual != 0.0 && po_quarter.forecast != 0.0)
        .then(|| (po_quarter.actual - po_quarter.forecast) / po_quarter.forecast * 100.0);

    GlReconciliationSummary {
        id: record.id.clone(),
        dept_number: record.dept_number.clone(),
        fiscal_year: record.fiscal_year.clone(),
        fiscal_quarter: record.fiscal_quarter.clone(),
        actual_amount: record.actual_amount,
        linked_total,
        unreconciled_amount: record.actual_amount - linked_total,
        depreciation_total,
        po_quarter,
        variance_pct,
        variance_class: variance_pct.map(classify_variance),
    }
}

pub trait FilterColumns {
    fn column(&self, name: &str) -> Option<String>;
}

impl FilterColumns for LinkedTransaction {
    fn column(&self, name: &str) -> Option<String> {
        Some(match name {
            "id" => self.id.clone(),
            "date" => self.date.clone(),
            "description" => self.description.clone(),
            "amount" => self.amount.to_string(),
            "glCode" => self.gl_code.clone(),
            "postedBy" => self.posted_by.clone(),
            "deptCode" => self.dept_code.clone(),
            "fiscalQuarter" => self.fiscal_quarter.clone(),
            "fiscalPeriod" => self.fiscal_period.clone(),
            "transactionType" => self.transaction_type.clone(),
            "poNumber" => return self.po_number.clone(),
            _ => return None,
        })
    }
}

impl FilterColumns for AssetDepreciation {
    fn column(&self, name: &str) -> Option<String> {
        Some(match name {
            "id" => self.id.clone(),
            "assetId" => self.asset_id.clone(),
            "assetName" => self.asset_name.clone(),
            "depreciationAmount" => self.depreciation_amount.to_string(),
            "period" => self.period.clone(),
            "accumulatedDepreciation" => self.accumulated_depreciation.to_string(),
            "netBookValue" => self.net_book_value.to_string(),
            _ => return None,
        })
    }
}

impl FilterColumns for YearlyPoFinancial {
    fn column(&self, name: &str) -> Option<String> {
        Some(match name {
            "poNumber" => self.po_number.clone(),
            "vendor" => self.vendor.clone(),
            "project" => self.project.clone(),
            "department" => self.department.clone(),
            "totalAmount" => self.total_amount.to_string(),
            _ => return None,
        })
    }
}

/// Per-column text filters. A row matches when every non-empty filter is a
/// case-insensitive substring of its column; unknown or empty columns never
/// match a non-empty filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnFilters(BTreeMap<String, String>);

impl ColumnFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(column.into(), value.into());
        self
    }

    pub fn matches<T: FilterColumns>(&self, row: &T) -> bool {
        self.0
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .all(|(column, value)| {
                row.column(column)
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&value.to_lowercase())
            })
    }

    pub fn apply<'a, T: FilterColumns>(&self, rows: &'a [T]) -> Vec<&'a T> {
        rows.iter().filter(|row| self.matches(*row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::logic::gl_record_generator::gl_record, entities::VarianceClass};

    #[test]
    fn summary_of_a_q1_record() {
        // Index 0: Q1, where both POs have posted actuals.
        let summary = summarize(&gl_record(0));
        assert_eq!(summary.fiscal_quarter, "Q1");
        assert!(summary.unreconciled_amount.abs() < 1e-9);
        assert_eq!(summary.depreciation_total, 1200.0);
        assert_eq!(
            summary.po_quarter,
            QuarterlyAmounts {
                actual: 37_000.0,
                commit: 42_000.0,
                forecast: 42_000.0
            }
        );
        // (37_000 - 42_000) / 42_000 = -11.9%.
        assert_eq!(summary.variance_class, Some(VarianceClass::Alert));
    }

    #[test]
    fn no_variance_before_actuals_are_posted() {
        // Index 2: Q3, no PO actuals yet.
        let summary = summarize(&gl_record(2));
        assert_eq!(summary.po_quarter.actual, 0.0);
        assert_eq!(summary.variance_pct, None);
        assert_eq!(summary.variance_class, None);
    }

    #[test]
    fn filters_are_case_insensitive_substrings() {
        let record = gl_record(3);
        let storage = ColumnFilters::new().with("description", "STORAGE");
        let rows = storage.apply(&record.linked_transactions);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "TX-3-2");

        let both = ColumnFilters::new()
            .with("glCode", "5001")
            .with("transactionType", "accr");
        assert_eq!(both.apply(&record.linked_transactions).len(), 1);

        let conflicting = ColumnFilters::new()
            .with("glCode", "5001")
            .with("transactionType", "journal");
        assert!(conflicting.apply(&record.linked_transactions).is_empty());
    }

    #[test]
    fn empty_filters_match_and_unknown_columns_do_not() {
        let record = gl_record(1);
        let empty = ColumnFilters::new().with("vendor", "");
        assert_eq!(empty.apply(&record.yearly_po_financials).len(), 2);

        let unknown = ColumnFilters::new().with("nonexistent", "x");
        assert!(unknown.apply(&record.asset_depreciations).is_empty());

        let vendor = ColumnFilters::new().with("vendor", "oracle");
        assert_eq!(vendor.apply(&record.yearly_po_financials)[0].po_number, "PO-4001");
    }
}
