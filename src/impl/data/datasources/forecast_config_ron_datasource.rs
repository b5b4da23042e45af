use std::fs;

use fractic_server_error::ServerError;
use ron::{extensions::Extensions, Options};

use crate::{
    data::models::forecast_config_model::ForecastConfigModel,
    entities::ForecastConfig,
    errors::{InvalidRon, ReadError},
};

pub(crate) trait ForecastConfigRonDatasource {
    fn from_string(&self, s: &str) -> Result<ForecastConfig, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<ForecastConfig, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct ForecastConfigRonDatasourceImpl;

impl ForecastConfigRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl ForecastConfigRonDatasource for ForecastConfigRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<ForecastConfig, ServerError> {
        // Optional fields are written without `Some(..)`.
        let model: ForecastConfigModel = Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(s)
            .map_err(|e| InvalidRon::with_debug("ForecastConfig", &e))?;
        let config: ForecastConfig = model.into();
        config.validate()?;
        Ok(config)
    }

    fn from_file<P>(&self, path: P) -> Result<ForecastConfig, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}

impl ForecastConfig {
    /// Parses and validates a RON configuration. Omitted fields keep their
    /// default values.
    pub fn from_ron_str(s: &str) -> Result<Self, ServerError> {
        ForecastConfigRonDatasourceImpl::new().from_string(s)
    }

    pub fn from_ron_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        ForecastConfigRonDatasourceImpl::new().from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone as _, Utc};

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(ForecastConfig::from_ron_str("()").unwrap(), ForecastConfig::default());
    }

    #[test]
    fn overrides_and_moves_default_stamp_with_anchor() {
        let config = ForecastConfig::from_ron_str(
            r#"(anchor: "2026-08-01", horizon_months: 24, closed_months: 3, approved_months: 12, modified_by: "fp&a")"#,
        )
        .unwrap();
        assert_eq!(config.anchor, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
        assert_eq!(config.horizon_months, 24);
        assert_eq!(config.modified_by, "fp&a");
        assert_eq!(
            config.last_modified,
            Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn explicit_timestamp_is_kept() {
        let config =
            ForecastConfig::from_ron_str(r#"(last_modified: "2025-09-01T12:30:00Z")"#).unwrap();
        assert_eq!(
            config.last_modified,
            Utc.with_ymd_and_hms(2025, 9, 1, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn rejects_bad_documents() {
        assert!(ForecastConfig::from_ron_str("(horizon_months: 0)").is_err());
        assert!(ForecastConfig::from_ron_str("(fiscal_year_start_month: 13)").is_err());
        assert!(ForecastConfig::from_ron_str(r#"(anchor: "01/08/2025")"#).is_err());
        assert!(ForecastConfig::from_ron_str("(unknown_field: 1)").is_err());
        assert!(ForecastConfig::from_ron_str("not ron").is_err());
    }
}
