use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{entities::AttributeType, errors::InvalidCsvContent};

#[derive(Debug)]
pub(crate) struct AttributeTypeModel(AttributeType);
impl FromStr for AttributeTypeModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = match s.trim().to_ascii_uppercase().as_str() {
            "STRING" => AttributeType::String,
            "INTEGER" => AttributeType::Integer,
            "CURRENCY" => AttributeType::Currency,
            "DATETIME" => AttributeType::Datetime,
            _ => {
                return Err(InvalidCsvContent::new(&format!(
                    "unknown attribute type '{}'",
                    s
                )))
            }
        };
        Ok(AttributeTypeModel(t))
    }
}
impl From<AttributeTypeModel> for AttributeType {
    fn from(model: AttributeTypeModel) -> Self {
        model.0
    }
}
