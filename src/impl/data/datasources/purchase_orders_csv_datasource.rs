use std::{collections::BTreeMap, fs, str::FromStr as _};

use fractic_server_error::ServerError;

use crate::{
    data::models::attribute_type_model::AttributeTypeModel,
    entities::{attribute_keys, AttributeValue, PoAttribute, PurchaseOrder},
    errors::{InvalidCsv, InvalidCsvContent, ReadError},
};

/// Reads purchase orders from a long-format CSV, one attribute per row.
/// Rows are grouped by `po_number`; purchase orders and their attributes
/// keep the order in which they first appear. An empty `value` is null.
pub(crate) trait PurchaseOrdersCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<PurchaseOrder>, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<Vec<PurchaseOrder>, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct PurchaseOrdersCsvDatasourceImpl;

impl PurchaseOrdersCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

fn parse_read_only(raw: &str) -> Result<bool, ServerError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" | "" => Ok(false),
        _ => Err(InvalidCsvContent::new(&format!(
            "read_only must be true or false (got '{}')",
            raw
        ))),
    }
}

impl PurchaseOrdersCsvDatasource for PurchaseOrdersCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<PurchaseOrder>, ServerError> {
        let mut order: Vec<(String, Vec<PoAttribute>)> = Vec::new();
        let mut index: BTreeMap<String, usize> = BTreeMap::new();

        for r in csv::Reader::from_reader(s.as_bytes()).records() {
            let r = r.map_err(|e| InvalidCsv::with_debug(&e))?;

            // Extract from CSV record.
            let raw_po_number = r.get(0).unwrap_or("").trim();
            let raw_key = r.get(1).unwrap_or("").trim();
            let raw_name = r.get(2).unwrap_or("");
            let raw_type = r.get(3).unwrap_or("STRING");
            let raw_read_only = r.get(4).unwrap_or("false");
            let raw_value = r.get(5).unwrap_or("");

            if raw_po_number.is_empty() || raw_key.is_empty() {
                return Err(InvalidCsvContent::new("po_number and key are required"));
            }

            // Parse.
            let attribute_type = AttributeTypeModel::from_str(raw_type)?;
            let read_only = parse_read_only(raw_read_only)?;
            let value = if raw_value.is_empty() {
                AttributeValue::Null
            } else {
                AttributeValue::text(raw_value)
            };

            // Build.
            let slot = *index.entry(raw_po_number.to_string()).or_insert_with(|| {
                order.push((raw_po_number.to_string(), Vec::new()));
                order.len() - 1
            });
            order[slot].1.push(PoAttribute::new(
                raw_key,
                raw_name,
                attribute_type.into(),
                read_only,
                value,
            ));
        }

        order
            .into_iter()
            .map(|(po_number, attributes)| {
                let declared = attributes
                    .iter()
                    .find(|a| a.key == attribute_keys::PO_NUMBER)
                    .and_then(|a| a.value.as_text());
                if declared.as_deref() != Some(po_number.as_str()) {
                    return Err(InvalidCsvContent::new(&format!(
                        "rows of '{}' must carry a matching {} attribute",
                        po_number,
                        attribute_keys::PO_NUMBER
                    )));
                }
                Ok(PurchaseOrder { attributes })
            })
            .collect()
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<PurchaseOrder>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}
