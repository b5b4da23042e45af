use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidCurrencyAmount;

/// Amount as typed in spreadsheets: optional `$`, thousands separators, and
/// parentheses for negatives (`(1,200.00)`).
#[derive(Debug)]
pub(crate) struct CurrencyAmountModel(pub f64);
impl FromStr for CurrencyAmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace([',', '$'], "");
        let raw = raw.trim();
        let is_negative = raw.starts_with('(') && raw.ends_with(')');
        let numeric_part = raw.trim_matches(|c| c == '(' || c == ')').trim();
        let amount = numeric_part
            .parse::<f64>()
            .map_err(|e| InvalidCurrencyAmount::with_debug(s, &e))?;
        Ok(CurrencyAmountModel(if is_negative { -amount } else { amount }))
    }
}

impl From<CurrencyAmountModel> for f64 {
    fn from(model: CurrencyAmountModel) -> Self {
        model.0
    }
}
