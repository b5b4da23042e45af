use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    domain::logic::variance_classifier::classify_variance,
    entities::{
        AmountKind, FiscalQuarter, FiscalYear, ForecastRollup, Granularity, MonthlyForecast,
        QuarterBuckets, QuarterData, VarianceClass,
    },
};

/// Months in period order, so sums do not depend on the input order.
fn in_period_order(months: &[MonthlyForecast]) -> Vec<&MonthlyForecast> {
    let mut ordered: Vec<&MonthlyForecast> = months.iter().collect();
    ordered.sort_by(|a, b| {
        (a.year, a.month, &a.id).cmp(&(b.year, b.month, &b.id))
    });
    ordered
}

/// Sums one amount kind per fiscal year and quarter.
pub(crate) fn aggregate_to_quarters(months: &[MonthlyForecast], kind: AmountKind) -> QuarterBuckets {
    debug!(months = months.len(), ?kind, "aggregating to quarters");
    in_period_order(months)
        .into_iter()
        .fold(BTreeMap::new(), |mut buckets, m| {
            buckets
                .entry(m.fiscal_year)
                .or_insert_with(QuarterData::default)
                .add(m.quarter, kind.amount_of(m));
            buckets
        })
}

/// Rolls months up into grid rows at the requested granularity. Quarterly
/// and yearly rows are sorted by fiscal year, then quarter.
pub(crate) fn rollup(months: &[MonthlyForecast], granularity: Granularity) -> Vec<ForecastRollup> {
    let mut rows: BTreeMap<(FiscalYear, Option<FiscalQuarter>, i32, u32), ForecastRollup> =
        BTreeMap::new();
    for m in in_period_order(months) {
        let (key, label) = match granularity {
            Granularity::Monthly => (
                (m.fiscal_year, Some(m.quarter), m.year, m.month),
                m.period.clone(),
            ),
            Granularity::Quarterly => (
                (m.fiscal_year, Some(m.quarter), 0, 0),
                format!("{}-{}", m.fiscal_year, m.quarter),
            ),
            Granularity::Yearly => ((m.fiscal_year, None, 0, 0), m.fiscal_year.label()),
        };
        let row = rows.entry(key).or_insert_with(|| ForecastRollup {
            label,
            fiscal_year: m.fiscal_year,
            quarter: key.1,
            forecast: 0.0,
            actual: 0.0,
            commit: 0.0,
            variance: 0.0,
            status: m.status,
            month_ids: Vec::new(),
        });
        row.forecast += m.forecast_amount;
        row.actual += m.actual_amount.unwrap_or(0.0);
        row.commit += m.commit_amount;
        row.variance += m.variance;
        row.month_ids.push(m.id.clone());
    }
    rows.into_values().collect()
}

impl ForecastRollup {
    /// Actual vs. forecast in percent; `None` while no actuals are posted.
    pub fn variance_pct(&self) -> Option<f64> {
        (self.actual != 0.0 && self.forecast != 0.0)
            .then(|| (self.actual - self.forecast) / self.forecast * 100.0)
    }

    pub fn variance_class(&self) -> Option<VarianceClass> {
        self.variance_pct().map(classify_variance)
    }
}
