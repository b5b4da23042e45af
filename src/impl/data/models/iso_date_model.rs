use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use fractic_server_error::ServerError;
use serde::Deserialize;

use crate::errors::InvalidIsoDate;

#[derive(Debug)]
pub(crate) struct ISODateModel(NaiveDate);
impl FromStr for ISODateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| InvalidIsoDate::with_debug(s, &e))?;
        Ok(ISODateModel(d))
    }
}
impl<'de> Deserialize<'de> for ISODateModel {
    fn deserialize<D>(deserializer: D) -> Result<ISODateModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ISODateModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}
impl From<ISODateModel> for NaiveDate {
    fn from(model: ISODateModel) -> Self {
        model.0
    }
}

/// Purchase order datetimes, as exported by the procurement system
/// (`2025/08/01 00:00:00`). Only the date is kept.
#[derive(Debug)]
pub(crate) struct PoDateTimeModel(NaiveDate);
impl FromStr for PoDateTimeModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let d = NaiveDateTime::parse_from_str(raw, "%Y/%m/%d %H:%M:%S")
            .map(|dt| dt.date())
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y/%m/%d"))
            .map_err(|e| InvalidIsoDate::with_debug(s, &e))?;
        Ok(PoDateTimeModel(d))
    }
}
impl From<PoDateTimeModel> for NaiveDate {
    fn from(model: PoDateTimeModel) -> Self {
        model.0
    }
}
