use fractic_server_error::ServerError;

use crate::entities::{PurchaseOrder, PurchaseOrderPatch};

pub trait PurchaseOrderRepository: Send + Sync {
    fn list(&self) -> Result<Vec<PurchaseOrder>, ServerError>;

    fn get(&self, po_number: &str) -> Result<PurchaseOrder, ServerError>;

    /// Applies `patch` and returns the stored result. A rejected patch
    /// leaves the stored purchase order unchanged.
    fn update(&self, po_number: &str, patch: &PurchaseOrderPatch) -> Result<PurchaseOrder, ServerError>;
}
