use chrono::{DateTime, Utc};
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    entities::{FiscalQuarterKey, ForecastEdit, MonthlyForecast},
    errors::{ForecastPeriodNotFound, LockedForecastPeriod},
};

/// Applies user edits to a forecast sequence. The input is never modified;
/// every call returns a new sequence.
pub(crate) struct ForecastEditor<'a> {
    modified_by: &'a str,
    modified_at: DateTime<Utc>,
}

impl<'a> ForecastEditor<'a> {
    pub(crate) fn new(modified_by: &'a str, modified_at: DateTime<Utc>) -> Self {
        Self {
            modified_by,
            modified_at,
        }
    }

    pub(crate) fn apply_all(
        &self,
        months: &[MonthlyForecast],
        edits: &[ForecastEdit],
    ) -> Result<Vec<MonthlyForecast>, ServerError> {
        edits
            .iter()
            .try_fold(months.to_vec(), |current, edit| self.apply(&current, edit))
    }

    pub(crate) fn apply(
        &self,
        months: &[MonthlyForecast],
        edit: &ForecastEdit,
    ) -> Result<Vec<MonthlyForecast>, ServerError> {
        match edit {
            ForecastEdit::Month { target, amount } => self.edit_month(months, target, *amount),
            ForecastEdit::Quarter { key, amount } => self.edit_quarter(months, key, *amount),
        }
    }

    fn stamp(&self, month: &mut MonthlyForecast, amount: f64) {
        month.forecast_amount = amount;
        month.variance = 0.0;
        month.modified_by = self.modified_by.to_string();
        month.last_modified = self.modified_at;
    }

    fn edit_month(
        &self,
        months: &[MonthlyForecast],
        target: &str,
        amount: f64,
    ) -> Result<Vec<MonthlyForecast>, ServerError> {
        let matches = |m: &MonthlyForecast| m.id == target || m.period == target;
        let existing = months
            .iter()
            .find(|m| matches(m))
            .ok_or_else(|| ForecastPeriodNotFound::new(target))?;
        if existing.is_locked() {
            return Err(LockedForecastPeriod::new(target));
        }
        debug!(period = target, amount, "editing forecast month");

        Ok(months
            .iter()
            .cloned()
            .map(|mut m| {
                if matches(&m) {
                    self.stamp(&mut m, amount);
                }
                m
            })
            .collect())
    }

    fn edit_quarter(
        &self,
        months: &[MonthlyForecast],
        key: &FiscalQuarterKey,
        amount: f64,
    ) -> Result<Vec<MonthlyForecast>, ServerError> {
        let in_quarter =
            |m: &MonthlyForecast| m.fiscal_year == key.fiscal_year && m.quarter == key.quarter;
        let quarter_months: Vec<&MonthlyForecast> = months.iter().filter(|m| in_quarter(m)).collect();
        if quarter_months.is_empty() {
            return Err(ForecastPeriodNotFound::new(&key.to_string()));
        }
        let draft_count = quarter_months.iter().filter(|m| !m.is_locked()).count();
        if draft_count == 0 {
            return Err(LockedForecastPeriod::new(&key.to_string()));
        }

        // Locked months keep their amounts; the draft months absorb the
        // whole difference so the quarter total matches `amount`.
        let current_total: f64 = quarter_months.iter().map(|m| m.forecast_amount).sum();
        let split = (amount - current_total) / draft_count as f64;
        debug!(quarter = %key, amount, split, "editing forecast quarter");

        Ok(months
            .iter()
            .cloned()
            .map(|mut m| {
                if in_quarter(&m) && !m.is_locked() {
                    let new_amount = m.forecast_amount + split;
                    self.stamp(&mut m, new_amount);
                }
                m
            })
            .collect())
    }
}
