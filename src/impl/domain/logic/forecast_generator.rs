use chrono::Datelike as _;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    domain::logic::{aggregator::aggregate_to_quarters, seed::seed_from_id, utils::month_start_after},
    entities::{
        AmountKind, FiscalCalendar, ForecastBasis, ForecastConfig, ForecastStatus,
        MonthlyForecast, PoFinancials, Uplift,
    },
    errors::InvalidForecastConfig,
    presentation::utils::{period_label, period_string},
};

/// Lower bound of the synthetic annual amount.
const BASE_ANNUAL_FLOOR: u64 = 100_000;
/// Width of the synthetic annual amount range.
const BASE_ANNUAL_SPAN: u64 = 500_000;

impl ForecastConfig {
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.horizon_months == 0 {
            return Err(InvalidForecastConfig::new("horizon_months must be positive"));
        }
        if self.closed_months > self.horizon_months {
            return Err(InvalidForecastConfig::new(
                "closed_months cannot exceed horizon_months",
            ));
        }
        if self.approved_months > self.horizon_months {
            return Err(InvalidForecastConfig::new(
                "approved_months cannot exceed horizon_months",
            ));
        }
        FiscalCalendar::new(self.fiscal_year_start_month).map(|_| ())
    }
}

/// Deterministic mock financials keyed by PO id. The same id and config
/// always produce the same output.
#[derive(Debug, Clone)]
pub(crate) struct ForecastGenerator {
    config: ForecastConfig,
    calendar: FiscalCalendar,
}

impl ForecastGenerator {
    pub(crate) fn new(config: ForecastConfig) -> Result<Self, ServerError> {
        config.validate()?;
        let calendar = FiscalCalendar::new(config.fiscal_year_start_month)?;
        Ok(Self { config, calendar })
    }

    pub(crate) fn monthly_forecasts(&self, po_id: &str) -> Result<Vec<MonthlyForecast>, ServerError> {
        let seed = u64::from(seed_from_id(po_id));
        let base_annual_amount = (seed % BASE_ANNUAL_SPAN + BASE_ANNUAL_FLOOR) as f64;
        let monthly_amount = base_annual_amount / 12.0;
        debug!(po_id, seed, monthly_amount, "generating monthly forecasts");

        (0..self.config.horizon_months)
            .map(|i| {
                let month_start = month_start_after(self.config.anchor, i)?;
                let (year, month) = (month_start.year(), month_start.month());
                let is_closed = i < self.config.closed_months;

                // Bounded to [-500, 499].
                let month_variance = ((seed + u64::from(i)) % 1000) as f64 - 500.0;
                let forecast_amount = monthly_amount + month_variance;

                Ok(MonthlyForecast {
                    id: format!("{}-{:03}", po_id, i),
                    po_id: po_id.to_string(),
                    year,
                    month,
                    quarter: self.calendar.fiscal_quarter(month),
                    fiscal_year: self.calendar.fiscal_year(year, month),
                    period: period_string(month_start),
                    period_label: period_label(month_start),
                    forecast_amount,
                    actual_amount: is_closed
                        .then(|| forecast_amount + ((seed % 200) as f64 - 100.0)),
                    commit_amount: monthly_amount * 0.95 + month_variance * 0.8,
                    variance: if is_closed {
                        (seed % 10) as f64 - 5.0
                    } else {
                        0.0
                    },
                    status: if is_closed {
                        ForecastStatus::Locked
                    } else {
                        ForecastStatus::Draft
                    },
                    basis: if i < self.config.approved_months {
                        ForecastBasis::Approved
                    } else {
                        ForecastBasis::Auto
                    },
                    last_modified: self.config.last_modified,
                    modified_by: self.config.modified_by.clone(),
                })
            })
            .collect()
    }

    pub(crate) fn po_financials(&self, po_id: &str) -> Result<PoFinancials, ServerError> {
        let seed = seed_from_id(po_id);
        let monthly_data = self.monthly_forecasts(po_id)?;
        let forecast = aggregate_to_quarters(&monthly_data, AmountKind::Forecast);
        Ok(PoFinancials {
            po_number: po_id.to_string(),
            commit: aggregate_to_quarters(&monthly_data, AmountKind::Commit),
            actuals: aggregate_to_quarters(&monthly_data, AmountKind::Actual),
            liability: forecast.clone(),
            forecast,
            uplift: Uplift {
                price: seed % 5 + 2,
                volume: seed % 3 + 1,
                expansion: seed % 4,
            },
            monthly_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::FiscalQuarter;

    fn generator() -> ForecastGenerator {
        ForecastGenerator::new(ForecastConfig::default()).unwrap()
    }

    fn monthly_amount(po_id: &str) -> f64 {
        ((seed_from_id(po_id) as u64 % 500_000) + 100_000) as f64 / 12.0
    }

    #[test]
    fn generation_is_deterministic() {
        let g = generator();
        for id in ["PO-001", "", "PO-2024-005", "発注-7"] {
            assert_eq!(g.monthly_forecasts(id).unwrap(), g.monthly_forecasts(id).unwrap());
            assert_eq!(g.po_financials(id).unwrap(), g.po_financials(id).unwrap());
        }
    }

    #[test]
    fn always_generates_72_months() {
        let g = generator();
        for id in ["", "x", "PO-001", "a much longer purchase order identifier"] {
            assert_eq!(g.monthly_forecasts(id).unwrap().len(), 72);
        }
    }

    #[test]
    fn first_six_months_are_closed() {
        let months = generator().monthly_forecasts("PO-013").unwrap();
        for (i, m) in months.iter().enumerate() {
            if i < 6 {
                assert_eq!(m.status, ForecastStatus::Locked, "month {}", i);
                assert!(m.actual_amount.is_some());
            } else {
                assert_eq!(m.status, ForecastStatus::Draft, "month {}", i);
                assert!(m.actual_amount.is_none());
                assert_eq!(m.variance, 0.0);
            }
        }
        assert_eq!(months[5].status, ForecastStatus::Locked);
        assert_eq!(months[6].status, ForecastStatus::Draft);
    }

    #[test]
    fn basis_switches_to_auto_after_approved_term() {
        let months = generator().monthly_forecasts("PO-001").unwrap();
        assert!(months[..36].iter().all(|m| m.basis == ForecastBasis::Approved));
        assert!(months[36..].iter().all(|m| m.basis == ForecastBasis::Auto));
    }

    #[test]
    fn po_001_starts_in_fy26_q1() {
        let months = generator().monthly_forecasts("PO-001").unwrap();
        let first = &months[0];
        assert_eq!(first.id, "PO-001-000");
        assert_eq!(first.month, 8);
        assert_eq!(first.year, 2025);
        assert_eq!(first.quarter, FiscalQuarter::Q1);
        assert_eq!(first.fiscal_year.label(), "FY26");
        assert_eq!(first.period, "2025-08");
        assert_eq!(first.period_label, "Aug 2025");

        let last = &months[71];
        assert_eq!(last.id, "PO-001-071");
        assert_eq!(last.period, "2031-07");
        assert_eq!(last.quarter, FiscalQuarter::Q4);
        assert_eq!(last.fiscal_year.label(), "FY31");
    }

    #[test]
    fn po_001_amounts_match_known_seed() {
        // seed 1_930_288_797 -> base 388_797 -> 32_399.75 per month.
        let months = generator().monthly_forecasts("PO-001").unwrap();
        let monthly = 388_797.0 / 12.0;
        // (seed + 0) % 1000 = 797 -> variance 297.
        assert_eq!(months[0].forecast_amount, monthly + 297.0);
        // seed % 200 = 197 -> actual offset 97.
        assert_eq!(months[0].actual_amount, Some(monthly + 297.0 + 97.0));
        assert_eq!(months[0].commit_amount, monthly * 0.95 + 297.0 * 0.8);
        // seed % 10 = 7 -> reported variance 2.
        assert_eq!(months[0].variance, 2.0);
    }

    #[test]
    fn forecast_stays_within_variance_band() {
        let g = generator();
        for id in ["", "PO-001", "PO-002", "zzz", "ПО-42"] {
            let monthly = monthly_amount(id);
            for m in g.monthly_forecasts(id).unwrap() {
                assert!(m.forecast_amount >= monthly - 500.0);
                assert!(m.forecast_amount < monthly + 500.0);
            }
        }
    }

    #[test]
    fn fiscal_year_rollover_matches_calendar_month() {
        for m in generator().monthly_forecasts("PO-001").unwrap() {
            let expected = if m.month >= 8 { m.year + 1 } else { m.year };
            assert_eq!(m.fiscal_year.end_year(), expected);
        }
    }

    #[test]
    fn po_financials_liability_mirrors_forecast() {
        let financials = generator().po_financials("PO-001").unwrap();
        assert_eq!(financials.liability, financials.forecast);
        assert_eq!(financials.monthly_data.len(), 72);
        // 1_930_288_797 % 5 = 2, % 3 = 0, % 4 = 1.
        assert_eq!(
            financials.uplift,
            Uplift {
                price: 4,
                volume: 1,
                expansion: 1
            }
        );
    }

    #[test]
    fn custom_config_changes_horizon_and_closed_months() {
        let config = ForecastConfig {
            horizon_months: 12,
            closed_months: 3,
            approved_months: 12,
            ..ForecastConfig::default()
        };
        let months = ForecastGenerator::new(config).unwrap().monthly_forecasts("PO-9").unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(months.iter().filter(|m| m.is_locked()).count(), 3);
    }

    #[test]
    fn rejects_inconsistent_config() {
        let config = ForecastConfig {
            closed_months: 80,
            ..ForecastConfig::default()
        };
        assert!(ForecastGenerator::new(config).is_err());
    }
}
