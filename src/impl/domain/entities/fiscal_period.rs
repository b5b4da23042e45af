use serde::{Serialize, Serializer};

/// Fiscal year, identified by the calendar year in which it ends (a fiscal
/// year starting in August 2025 is FY26).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FiscalYear(pub(crate) i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde_derive::Serialize)]
#[serde(transparent)]
pub struct FiscalQuarter(pub(crate) u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FiscalQuarterKey {
    pub fiscal_year: FiscalYear,
    pub quarter: FiscalQuarter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiscalCalendar {
    pub(crate) start_month: u32,
}

// --

impl FiscalYear {
    pub fn new(end_year: i32) -> Self {
        Self(end_year)
    }

    pub fn end_year(&self) -> i32 {
        self.0
    }

    pub fn label(&self) -> String {
        format!("FY{:02}", self.0.rem_euclid(100))
    }
}

impl FiscalQuarter {
    pub const Q1: FiscalQuarter = FiscalQuarter(1);
    pub const Q2: FiscalQuarter = FiscalQuarter(2);
    pub const Q3: FiscalQuarter = FiscalQuarter(3);
    pub const Q4: FiscalQuarter = FiscalQuarter(4);

    pub fn number(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::fmt::Display for FiscalQuarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

impl std::fmt::Display for FiscalQuarterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.fiscal_year, self.quarter)
    }
}

impl Serialize for FiscalYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for FiscalQuarterKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
