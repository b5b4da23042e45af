use iso_currency::Currency;

use crate::{entities::ForecastRollup, presentation::utils::format_amount};

/// Fixed-width text report of forecast roll-up rows.
pub(crate) struct RollupReportPrinter {
    currency: Currency,
}

impl RollupReportPrinter {
    pub(crate) fn new(currency: Currency) -> Self {
        Self { currency }
    }

    pub(crate) fn print(&self, rows: &[ForecastRollup]) -> String {
        let mut output = format!(
            "{:<10} {:>16} {:>16} {:>16} {:>9} {:<8}\n",
            "Period", "Forecast", "Actual", "Commit", "Var %", "Class"
        );
        for row in rows {
            let (pct, class) = match row.variance_pct() {
                Some(pct) => (format!("{:.1}", pct), row.variance_class().map(|c| c.label())),
                None => ("-".to_string(), None),
            };
            output.push_str(&format!(
                "{:<10} {:>16} {:>16} {:>16} {:>9} {:<8}\n",
                row.label,
                format_amount(row.forecast, self.currency),
                format_amount(row.actual, self.currency),
                format_amount(row.commit, self.currency),
                pct,
                class.unwrap_or("-"),
            ));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::logic::{aggregator::rollup, forecast_generator::ForecastGenerator},
        entities::{ForecastConfig, Granularity},
    };

    #[test]
    fn prints_one_line_per_row() {
        let months = ForecastGenerator::new(ForecastConfig::default())
            .unwrap()
            .monthly_forecasts("PO-001")
            .unwrap();
        let rows = rollup(&months, Granularity::Quarterly);
        let report = RollupReportPrinter::new(Currency::USD).print(&rows);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 25);
        assert!(lines[0].starts_with("Period"));
        // FY26-Q1 is closed: actual = forecast + 97 per month.
        assert!(lines[1].starts_with("FY26-Q1"));
        assert!(lines[1].contains("on-track"));
        // FY26-Q3 has no actuals.
        assert!(lines[3].starts_with("FY26-Q3"));
        assert!(lines[3].trim_end().ends_with('-'));
    }
}
