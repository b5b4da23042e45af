use super::fiscal_period::FiscalQuarterKey;

/// A user edit to a generated forecast sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastEdit {
    /// Set the forecast of one month. `target` is either a row id
    /// (`PO-001-007`) or a calendar period (`2026-03`).
    Month { target: String, amount: f64 },
    /// Set the forecast total of a fiscal quarter. The difference to the
    /// current total is spread evenly over the quarter's draft months.
    Quarter { key: FiscalQuarterKey, amount: f64 },
}
