use std::collections::BTreeMap;

pub mod attribute_keys {
    pub const PO_NUMBER: &str = "PO_NUMBER";
    pub const VENDOR_NAME: &str = "VENDOR_NAME";
    pub const PO_DESCRIPTION: &str = "PO_DESCRIPTION";
    pub const TOTAL_AMOUNT_USD: &str = "TOTAL_AMOUNT_USD";
    pub const PO_START_DATE: &str = "PO_START_DATE";
    pub const PO_END_DATE: &str = "PO_END_DATE";
    pub const PO_STATUS: &str = "PO_STATUS";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttributeType {
    String,
    Integer,
    Currency,
    Datetime,
}

#[derive(
    Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize,
)]
#[serde(untagged)]
pub enum AttributeValue {
    Null,
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoAttribute {
    pub key: String,
    pub value: AttributeValue,
    pub name: String,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    pub read_only: bool,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(transparent)]
pub struct PurchaseOrder {
    pub attributes: Vec<PoAttribute>,
}

/// `updates` overwrites existing attributes by key. `status` sets
/// `PO_STATUS`, adding the attribute when the row does not have it yet.
#[derive(Debug, Clone, Default, PartialEq, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PurchaseOrderPatch {
    pub updates: BTreeMap<String, AttributeValue>,
    pub status: Option<String>,
}

// --

impl AttributeValue {
    pub fn text(s: impl Into<String>) -> Self {
        AttributeValue::Text(s.into())
    }

    pub fn as_text(&self) -> Option<String> {
        match self {
            AttributeValue::Null => None,
            AttributeValue::Number(n) => Some(n.to_string()),
            AttributeValue::Text(s) => Some(s.clone()),
        }
    }
}

impl PoAttribute {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        attribute_type: AttributeType,
        read_only: bool,
        value: AttributeValue,
    ) -> Self {
        Self {
            key: key.into(),
            value,
            name: name.into(),
            attribute_type,
            read_only,
        }
    }
}

impl PurchaseOrderPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: AttributeValue) -> Self {
        self.updates.insert(key.into(), value);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}
