use std::{str::FromStr, sync::LazyLock};

use fractic_server_error::ServerError;
use regex::Regex;

use crate::{
    entities::{FiscalCalendar, FiscalQuarter, FiscalQuarterKey, FiscalYear},
    errors::{InvalidForecastConfig, InvalidQuarterKey},
};

impl FiscalCalendar {
    /// Calendar whose fiscal year starts on the first day of `start_month`.
    pub fn new(start_month: u32) -> Result<Self, ServerError> {
        if !(1..=12).contains(&start_month) {
            return Err(InvalidForecastConfig::new(&format!(
                "fiscal year start month must be in 1..=12 (got {})",
                start_month
            )));
        }
        Ok(Self { start_month })
    }

    /// Fiscal years are named after the calendar year they end in. When the
    /// fiscal year coincides with the calendar year, that year is used.
    pub fn fiscal_year(&self, year: i32, month: u32) -> FiscalYear {
        if self.start_month > 1 && month >= self.start_month {
            FiscalYear(year + 1)
        } else {
            FiscalYear(year)
        }
    }

    pub fn fiscal_quarter(&self, month: u32) -> FiscalQuarter {
        let fiscal_month_index = (month + 12 - self.start_month) % 12;
        FiscalQuarter((fiscal_month_index / 3 + 1) as u8)
    }

    pub fn quarter_key(&self, year: i32, month: u32) -> FiscalQuarterKey {
        FiscalQuarterKey {
            fiscal_year: self.fiscal_year(year, month),
            quarter: self.fiscal_quarter(month),
        }
    }
}

impl Default for FiscalCalendar {
    /// Fiscal year starting in August.
    fn default() -> Self {
        Self { start_month: 8 }
    }
}

impl FromStr for FiscalQuarter {
    type Err = ServerError;

    /// Parses `Q1`..`Q4` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "Q1" => Ok(FiscalQuarter::Q1),
            "Q2" => Ok(FiscalQuarter::Q2),
            "Q3" => Ok(FiscalQuarter::Q3),
            "Q4" => Ok(FiscalQuarter::Q4),
            _ => Err(InvalidQuarterKey::new(s)),
        }
    }
}

static QUARTER_KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^FY(\d{2}|\d{4})-(Q[1-4])$").expect("hardcoded regex should be valid")
});

impl FromStr for FiscalQuarterKey {
    type Err = ServerError;

    /// Parses keys of the form `FY26-Q1`. Two-digit years are taken to be in
    /// the 2000s.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = QUARTER_KEY_PATTERN
            .captures(s.trim())
            .ok_or_else(|| InvalidQuarterKey::new(s))?;
        let raw_year = &caps[1];
        let year: i32 = raw_year
            .parse()
            .map_err(|e| InvalidQuarterKey::with_debug(s, &e))?;
        let year = if raw_year.len() == 2 { 2000 + year } else { year };
        Ok(FiscalQuarterKey {
            fiscal_year: FiscalYear(year),
            quarter: caps[2].parse()?,
        })
    }
}
