use chrono::{DateTime, NaiveDate, Utc};
use serde_derive::Deserialize;

use crate::{data::models::iso_date_model::ISODateModel, entities::ForecastConfig};

/// RON form of [`ForecastConfig`]. Every field is optional; missing fields
/// take the default value.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ForecastConfigModel {
    anchor: Option<ISODateModel>,
    horizon_months: Option<u32>,
    closed_months: Option<u32>,
    approved_months: Option<u32>,
    fiscal_year_start_month: Option<u32>,
    modified_by: Option<String>,
    /// RFC 3339, e.g. `2026-08-01T00:00:00Z`.
    last_modified: Option<DateTime<Utc>>,
}

impl From<ForecastConfigModel> for ForecastConfig {
    fn from(model: ForecastConfigModel) -> Self {
        let defaults = ForecastConfig::default();
        let anchor: NaiveDate = model.anchor.map(Into::into).unwrap_or(defaults.anchor);
        ForecastConfig {
            anchor,
            horizon_months: model.horizon_months.unwrap_or(defaults.horizon_months),
            closed_months: model.closed_months.unwrap_or(defaults.closed_months),
            approved_months: model.approved_months.unwrap_or(defaults.approved_months),
            fiscal_year_start_month: model
                .fiscal_year_start_month
                .unwrap_or(defaults.fiscal_year_start_month),
            modified_by: model.modified_by.unwrap_or(defaults.modified_by),
            // A moved anchor moves the default stamp with it.
            last_modified: model
                .last_modified
                .unwrap_or_else(|| anchor.and_time(chrono::NaiveTime::MIN).and_utc()),
        }
    }
}
