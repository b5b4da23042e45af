use std::collections::BTreeMap;

use super::{
    fiscal_period::{FiscalQuarter, FiscalYear},
    monthly_forecast::MonthlyForecast,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountKind {
    Forecast,
    Commit,
    /// Months without posted actuals contribute 0.
    Actual,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, serde_derive::Serialize)]
pub struct QuarterData {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub q4: f64,
}

pub type QuarterBuckets = BTreeMap<FiscalYear, QuarterData>;

// --

impl AmountKind {
    pub fn amount_of(&self, month: &MonthlyForecast) -> f64 {
        match self {
            AmountKind::Forecast => month.forecast_amount,
            AmountKind::Commit => month.commit_amount,
            AmountKind::Actual => month.actual_amount.unwrap_or(0.0),
        }
    }
}

impl QuarterData {
    pub fn add(&mut self, quarter: FiscalQuarter, amount: f64) {
        match quarter.number() {
            1 => self.q1 += amount,
            2 => self.q2 += amount,
            3 => self.q3 += amount,
            _ => self.q4 += amount,
        }
    }

    pub fn total(&self) -> f64 {
        self.q1 + self.q2 + self.q3 + self.q4
    }
}
