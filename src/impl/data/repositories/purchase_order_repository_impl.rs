use std::sync::RwLock;

use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    data::datasources::purchase_orders_csv_datasource::{
        PurchaseOrdersCsvDatasource, PurchaseOrdersCsvDatasourceImpl,
    },
    domain::repositories::purchase_order_repository::PurchaseOrderRepository,
    entities::{PurchaseOrder, PurchaseOrderPatch},
    errors::{PurchaseOrderNotFound, RepositoryPoisoned},
};

const STORE: &str = "purchase order";

pub(crate) struct PurchaseOrderRepositoryImpl {
    orders: RwLock<Vec<PurchaseOrder>>,
}

impl PurchaseOrderRepository for PurchaseOrderRepositoryImpl {
    fn list(&self) -> Result<Vec<PurchaseOrder>, ServerError> {
        let orders = self.orders.read().map_err(|_| RepositoryPoisoned::new(STORE))?;
        Ok(orders.clone())
    }

    fn get(&self, po_number: &str) -> Result<PurchaseOrder, ServerError> {
        let orders = self.orders.read().map_err(|_| RepositoryPoisoned::new(STORE))?;
        orders
            .iter()
            .find(|po| po.po_number().as_deref() == Some(po_number))
            .cloned()
            .ok_or_else(|| PurchaseOrderNotFound::new(po_number))
    }

    fn update(&self, po_number: &str, patch: &PurchaseOrderPatch) -> Result<PurchaseOrder, ServerError> {
        let mut orders = self.orders.write().map_err(|_| RepositoryPoisoned::new(STORE))?;
        let slot = orders
            .iter_mut()
            .find(|po| po.po_number().as_deref() == Some(po_number))
            .ok_or_else(|| PurchaseOrderNotFound::new(po_number))?;
        let updated = slot.patched(po_number, patch)?;
        *slot = updated.clone();
        info!(
            po_number,
            updates = patch.updates.len(),
            status = ?patch.status,
            "purchase order updated"
        );
        Ok(updated)
    }
}

impl PurchaseOrderRepositoryImpl {
    pub(crate) fn new(orders: Vec<PurchaseOrder>) -> Self {
        Self {
            orders: RwLock::new(orders),
        }
    }

    pub(crate) fn from_string(csv: &str) -> Result<Self, ServerError> {
        Self::from_datasource_string(&PurchaseOrdersCsvDatasourceImpl::new(), csv)
    }

    pub(crate) fn from_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Ok(Self::new(PurchaseOrdersCsvDatasourceImpl::new().from_file(path)?))
    }

    pub(crate) fn from_datasource_string<DS: PurchaseOrdersCsvDatasource>(
        datasource: &DS,
        csv: &str,
    ) -> Result<Self, ServerError> {
        let orders = datasource.from_string(csv)?;
        info!(count = orders.len(), "loaded purchase orders");
        Ok(Self::new(orders))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entities::AttributeValue, errors::error_message, ext::sample_data::PURCHASE_ORDERS_CSV};

    fn repository() -> PurchaseOrderRepositoryImpl {
        PurchaseOrderRepositoryImpl::from_string(PURCHASE_ORDERS_CSV).unwrap()
    }

    #[test]
    fn lists_and_gets_sample_orders() {
        let repo = repository();
        let orders = repo.list().unwrap();
        assert!(orders.len() >= 6);
        assert_eq!(orders[0].po_number().as_deref(), Some("PO-001"));
        assert_eq!(
            repo.get("PO-002").unwrap().vendor_name().as_deref(),
            Some("MICROSOFT")
        );
        assert!(error_message(repo.get("PO-404")).contains("Purchase order 'PO-404' not found"));
    }

    #[test]
    fn update_persists_and_unknown_po_is_rejected() {
        let repo = repository();
        let patch = PurchaseOrderPatch::new()
            .set("PO_DESCRIPTION", AttributeValue::text("Tech Refresh 2026"))
            .with_status("Approved");
        let updated = repo.update("PO-001", &patch).unwrap();
        assert_eq!(updated.status().as_deref(), Some("Approved"));
        assert_eq!(repo.get("PO-001").unwrap(), updated);
        assert!(error_message(repo.update("PO-404", &patch))
            .contains("Purchase order 'PO-404' not found"));
    }

    #[test]
    fn rejected_patch_leaves_store_unchanged() {
        let repo = repository();
        let before = repo.get("PO-001").unwrap();
        let patch = PurchaseOrderPatch::new()
            .set("PO_DESCRIPTION", AttributeValue::text("changed"))
            .set("VENDOR_NAME", AttributeValue::text("OTHER"));
        assert!(error_message(repo.update("PO-001", &patch))
            .contains("Attribute 'VENDOR_NAME' of purchase order 'PO-001' is read-only"));
        assert_eq!(repo.get("PO-001").unwrap(), before);
    }
}
