use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    data::repositories::purchase_order_repository_impl::PurchaseOrderRepositoryImpl,
    domain::{
        logic::{
            aggregator::rollup, forecast_editor::ForecastEditor,
            forecast_generator::ForecastGenerator,
        },
        repositories::purchase_order_repository::PurchaseOrderRepository,
    },
    entities::{ForecastConfig, ForecastEdit, ForecastRollup, Granularity, PoFinancials, PoForecast},
    errors::MissingPoId,
};

const PO_CURRENCY: &str = "USD";

#[async_trait]
pub trait ForecastUsecase: Send + Sync {
    /// Mock financials for any PO id, known to the repository or not.
    async fn po_financials(&self, po_id: &str) -> Result<PoFinancials, ServerError>;

    async fn po_forecast(&self, po_number: &str) -> Result<PoForecast, ServerError>;

    /// Applies edits in order and returns the edited forecast. Nothing is
    /// stored.
    async fn edit_forecast(
        &self,
        forecast: PoForecast,
        edits: &[ForecastEdit],
        modified_by: &str,
        modified_at: DateTime<Utc>,
    ) -> Result<PoForecast, ServerError>;

    async fn rollup(
        &self,
        po_id: &str,
        granularity: Granularity,
    ) -> Result<Vec<ForecastRollup>, ServerError>;
}

pub(crate) struct ForecastUsecaseImpl<R = PurchaseOrderRepositoryImpl>
where
    R: PurchaseOrderRepository,
{
    generator: ForecastGenerator,
    purchase_order_repository: Arc<R>,
}

/// Blank ids are rejected; any other id is used exactly as given.
fn require_id(po_id: &str) -> Result<&str, ServerError> {
    if po_id.trim().is_empty() {
        Err(MissingPoId::new())
    } else {
        Ok(po_id)
    }
}

#[async_trait]
impl<R> ForecastUsecase for ForecastUsecaseImpl<R>
where
    R: PurchaseOrderRepository,
{
    async fn po_financials(&self, po_id: &str) -> Result<PoFinancials, ServerError> {
        self.generator.po_financials(require_id(po_id)?)
    }

    async fn po_forecast(&self, po_number: &str) -> Result<PoForecast, ServerError> {
        let po_number = require_id(po_number)?;
        let po = self.purchase_order_repository.get(po_number)?;
        debug!(po_number, "building PO forecast");
        Ok(PoForecast {
            po_number: po_number.to_string(),
            vendor: po.vendor_name(),
            total_amount: po.total_amount()?,
            start_date: po.start_date()?,
            end_date: po.end_date()?,
            term_months: po.term_months()?,
            currency: PO_CURRENCY.to_string(),
            monthly_forecasts: self.generator.monthly_forecasts(po_number)?,
        })
    }

    async fn edit_forecast(
        &self,
        forecast: PoForecast,
        edits: &[ForecastEdit],
        modified_by: &str,
        modified_at: DateTime<Utc>,
    ) -> Result<PoForecast, ServerError> {
        let monthly_forecasts = ForecastEditor::new(modified_by, modified_at)
            .apply_all(&forecast.monthly_forecasts, edits)?;
        Ok(PoForecast {
            monthly_forecasts,
            ..forecast
        })
    }

    async fn rollup(
        &self,
        po_id: &str,
        granularity: Granularity,
    ) -> Result<Vec<ForecastRollup>, ServerError> {
        let months = self.generator.monthly_forecasts(require_id(po_id)?)?;
        Ok(rollup(&months, granularity))
    }
}

impl<R> ForecastUsecaseImpl<R>
where
    R: PurchaseOrderRepository,
{
    pub(crate) fn new(config: ForecastConfig, purchase_order_repository: Arc<R>) -> Result<Self, ServerError> {
        Ok(Self {
            generator: ForecastGenerator::new(config)?,
            purchase_order_repository,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;
    use crate::{
        entities::FiscalQuarterKey, errors::error_message, ext::sample_data::PURCHASE_ORDERS_CSV,
    };

    fn usecase() -> ForecastUsecaseImpl {
        let repository = PurchaseOrderRepositoryImpl::from_string(PURCHASE_ORDERS_CSV).unwrap();
        ForecastUsecaseImpl::new(ForecastConfig::default(), Arc::new(repository)).unwrap()
    }

    #[tokio::test]
    async fn financials_require_an_id() {
        let usecase = usecase();
        for blank in ["", "   "] {
            assert!(error_message(usecase.po_financials(blank).await)
                .contains("A purchase order id is required"));
        }
        let financials = usecase.po_financials("PO-001").await.unwrap();
        assert_eq!(financials.po_number, "PO-001");
        assert_eq!(financials.monthly_data.len(), 72);
    }

    #[tokio::test]
    async fn ids_are_used_verbatim() {
        let usecase = usecase();
        let padded = usecase.po_financials(" PO-001 ").await.unwrap();
        assert_eq!(padded.po_number, " PO-001 ");
        assert_eq!(padded.monthly_data[0].id, " PO-001 -000");
        assert_ne!(padded, usecase.po_financials("PO-001").await.unwrap());
    }

    #[tokio::test]
    async fn forecast_header_comes_from_the_repository() {
        let forecast = usecase().po_forecast("PO-001").await.unwrap();
        assert_eq!(forecast.vendor.as_deref(), Some("TECHNOLOGY LLC"));
        assert_eq!(forecast.term_months, Some(36));
        assert_eq!(forecast.currency, "USD");
        assert_eq!(forecast.monthly_forecasts.len(), 72);
        assert!(error_message(usecase().po_forecast("PO-404").await)
            .contains("Purchase order 'PO-404' not found"));
    }

    #[tokio::test]
    async fn edits_return_a_new_forecast() {
        let usecase = usecase();
        let original = usecase.po_forecast("PO-002").await.unwrap();
        let key: FiscalQuarterKey = "FY27-Q2".parse().unwrap();
        let edited = usecase
            .edit_forecast(
                original.clone(),
                &[ForecastEdit::Quarter {
                    key,
                    amount: 60_000.0,
                }],
                "analyst",
                Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(edited.vendor, original.vendor);
        let quarter_total: f64 = edited
            .monthly_forecasts
            .iter()
            .filter(|m| m.fiscal_year == key.fiscal_year && m.quarter == key.quarter)
            .map(|m| m.forecast_amount)
            .sum();
        assert!((quarter_total - 60_000.0).abs() < 1e-6);
        assert_ne!(edited, original);
    }

    #[tokio::test]
    async fn rollup_by_quarter() {
        let rows = usecase().rollup("PO-001", Granularity::Quarterly).await.unwrap();
        assert_eq!(rows.len(), 24);
        assert!(error_message(usecase().rollup("", Granularity::Yearly).await)
            .contains("A purchase order id is required"));
    }
}
