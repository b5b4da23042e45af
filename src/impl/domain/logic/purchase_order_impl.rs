use std::str::FromStr as _;

use chrono::NaiveDate;
use fractic_server_error::ServerError;
use tracing::warn;

use crate::{
    data::models::{currency_amount_model::CurrencyAmountModel, iso_date_model::PoDateTimeModel},
    domain::logic::utils::whole_months_between,
    entities::{
        attribute_keys, AttributeType, AttributeValue, PoAttribute, PurchaseOrder,
        PurchaseOrderPatch,
    },
    errors::ReadOnlyAttribute,
};

impl PurchaseOrder {
    pub fn attribute(&self, key: &str) -> Option<&PoAttribute> {
        self.attributes.iter().find(|a| a.key == key)
    }

    /// Attribute value as text; `None` when absent, null or blank.
    pub fn text(&self, key: &str) -> Option<String> {
        self.attribute(key)
            .and_then(|a| a.value.as_text())
            .filter(|s| !s.trim().is_empty())
    }

    pub fn po_number(&self) -> Option<String> {
        self.text(attribute_keys::PO_NUMBER)
    }

    pub fn vendor_name(&self) -> Option<String> {
        self.text(attribute_keys::VENDOR_NAME)
    }

    pub fn description(&self) -> Option<String> {
        self.text(attribute_keys::PO_DESCRIPTION)
    }

    pub fn status(&self) -> Option<String> {
        self.text(attribute_keys::PO_STATUS)
    }

    pub fn total_amount(&self) -> Result<Option<f64>, ServerError> {
        match self.attribute(attribute_keys::TOTAL_AMOUNT_USD).map(|a| &a.value) {
            None | Some(AttributeValue::Null) => Ok(None),
            Some(AttributeValue::Number(n)) => Ok(Some(*n)),
            Some(AttributeValue::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(AttributeValue::Text(s)) => Ok(Some(CurrencyAmountModel::from_str(s)?.into())),
        }
    }

    pub fn start_date(&self) -> Result<Option<NaiveDate>, ServerError> {
        self.date(attribute_keys::PO_START_DATE)
    }

    pub fn end_date(&self) -> Result<Option<NaiveDate>, ServerError> {
        self.date(attribute_keys::PO_END_DATE)
    }

    pub fn term_months(&self) -> Result<Option<u32>, ServerError> {
        Ok(match (self.start_date()?, self.end_date()?) {
            (Some(start), Some(end)) => whole_months_between(start, end),
            _ => None,
        })
    }

    fn date(&self, key: &str) -> Result<Option<NaiveDate>, ServerError> {
        self.text(key)
            .map(|s| PoDateTimeModel::from_str(&s).map(Into::into))
            .transpose()
    }

    /// All writes are checked before any is applied, so a rejected patch
    /// leaves no partial update behind.
    pub(crate) fn patched(&self, po_number: &str, patch: &PurchaseOrderPatch) -> Result<Self, ServerError> {
        if let Some(read_only) = patch
            .updates
            .keys()
            .filter_map(|key| self.attribute(key))
            .find(|a| a.read_only)
        {
            return Err(ReadOnlyAttribute::new(po_number, &read_only.key));
        }

        let mut updated = self.clone();
        for (key, value) in &patch.updates {
            match updated.attributes.iter_mut().find(|a| &a.key == key) {
                Some(attribute) => attribute.value = value.clone(),
                None => warn!(po_number, key = key.as_str(), "ignoring update of unknown attribute"),
            }
        }

        // Status is workflow-owned: it bypasses the read-only flag.
        if let Some(status) = &patch.status {
            let value = AttributeValue::text(status.as_str());
            match updated
                .attributes
                .iter_mut()
                .find(|a| a.key == attribute_keys::PO_STATUS)
            {
                Some(attribute) => attribute.value = value,
                None => updated.attributes.push(PoAttribute::new(
                    attribute_keys::PO_STATUS,
                    "PO Status",
                    AttributeType::String,
                    true,
                    value,
                )),
            }
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::error_message;

    fn order() -> PurchaseOrder {
        PurchaseOrder {
            attributes: vec![
                PoAttribute::new("PO_NUMBER", "PO Number", AttributeType::String, true, AttributeValue::text("PO-001")),
                PoAttribute::new("VENDOR_NAME", "Vendor Name", AttributeType::String, true, AttributeValue::text("TECHNOLOGY LLC")),
                PoAttribute::new("PO_DESCRIPTION", "PO Description", AttributeType::String, false, AttributeValue::text("Tech Refresh 2025")),
                PoAttribute::new("TOTAL_AMOUNT_USD", "PO Amount", AttributeType::Currency, true, AttributeValue::text("1,200,000.00")),
                PoAttribute::new("PO_START_DATE", "Start Date", AttributeType::Datetime, false, AttributeValue::text("2025/08/01 00:00:00")),
                PoAttribute::new("PO_END_DATE", "End Date", AttributeType::Datetime, false, AttributeValue::text("2028/07/31 00:00:00")),
            ],
        }
    }

    #[test]
    fn typed_accessors() {
        let po = order();
        assert_eq!(po.po_number().as_deref(), Some("PO-001"));
        assert_eq!(po.vendor_name().as_deref(), Some("TECHNOLOGY LLC"));
        assert_eq!(po.total_amount().unwrap(), Some(1_200_000.0));
        assert_eq!(po.start_date().unwrap(), NaiveDate::from_ymd_opt(2025, 8, 1));
        assert_eq!(po.term_months().unwrap(), Some(36));
        assert_eq!(po.status(), None);
    }

    #[test]
    fn malformed_amount_is_an_error() {
        let mut po = order();
        po.attributes[3].value = AttributeValue::text("lots");
        assert!(error_message(po.total_amount()).contains("Invalid currency amount: 'lots'"));
    }

    #[test]
    fn patch_overwrites_and_ignores_unknown_keys() {
        let patch = PurchaseOrderPatch::new()
            .set("PO_DESCRIPTION", AttributeValue::text("Tech Refresh 2026"))
            .set("NOT_A_KEY", AttributeValue::Number(1.0));
        let updated = order().patched("PO-001", &patch).unwrap();
        assert_eq!(updated.description().as_deref(), Some("Tech Refresh 2026"));
        assert_eq!(updated.attributes.len(), order().attributes.len());
    }

    #[test]
    fn patch_of_read_only_attribute_is_rejected() {
        let patch = PurchaseOrderPatch::new()
            .set("PO_DESCRIPTION", AttributeValue::text("changed"))
            .set("VENDOR_NAME", AttributeValue::text("OTHER"));
        assert!(error_message(order().patched("PO-001", &patch))
            .contains("Attribute 'VENDOR_NAME' of purchase order 'PO-001' is read-only"));
    }

    #[test]
    fn status_patch_appends_read_only_attribute() {
        let patch = PurchaseOrderPatch::new().with_status("Approved");
        let updated = order().patched("PO-001", &patch).unwrap();
        let status = updated.attribute("PO_STATUS").unwrap();
        assert!(status.read_only);
        assert_eq!(status.attribute_type, AttributeType::String);
        assert_eq!(updated.status().as_deref(), Some("Approved"));

        // Second status change overwrites in place.
        let again = updated
            .patched("PO-001", &PurchaseOrderPatch::new().with_status("Closed"))
            .unwrap();
        assert_eq!(again.attributes.len(), updated.attributes.len());
        assert_eq!(again.status().as_deref(), Some("Closed"));
    }
}
