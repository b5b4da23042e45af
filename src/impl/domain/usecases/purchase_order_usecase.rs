use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::purchase_order_repository_impl::PurchaseOrderRepositoryImpl,
    domain::repositories::purchase_order_repository::PurchaseOrderRepository,
    entities::{PurchaseOrder, PurchaseOrderPatch},
    errors::MissingPoId,
};

#[async_trait]
pub trait PurchaseOrderUsecase: Send + Sync {
    async fn list(&self) -> Result<Vec<PurchaseOrder>, ServerError>;

    async fn get(&self, po_number: &str) -> Result<PurchaseOrder, ServerError>;

    async fn patch(
        &self,
        po_number: &str,
        patch: &PurchaseOrderPatch,
    ) -> Result<PurchaseOrder, ServerError>;
}

pub(crate) struct PurchaseOrderUsecaseImpl<R = PurchaseOrderRepositoryImpl>
where
    R: PurchaseOrderRepository,
{
    purchase_order_repository: Arc<R>,
}

#[async_trait]
impl<R> PurchaseOrderUsecase for PurchaseOrderUsecaseImpl<R>
where
    R: PurchaseOrderRepository,
{
    async fn list(&self) -> Result<Vec<PurchaseOrder>, ServerError> {
        self.purchase_order_repository.list()
    }

    async fn get(&self, po_number: &str) -> Result<PurchaseOrder, ServerError> {
        if po_number.trim().is_empty() {
            return Err(MissingPoId::new());
        }
        self.purchase_order_repository.get(po_number)
    }

    async fn patch(
        &self,
        po_number: &str,
        patch: &PurchaseOrderPatch,
    ) -> Result<PurchaseOrder, ServerError> {
        if po_number.trim().is_empty() {
            return Err(MissingPoId::new());
        }
        self.purchase_order_repository.update(po_number, patch)
    }
}

impl<R> PurchaseOrderUsecaseImpl<R>
where
    R: PurchaseOrderRepository,
{
    pub(crate) fn new(purchase_order_repository: Arc<R>) -> Self {
        Self {
            purchase_order_repository,
        }
    }
}
