use std::sync::Arc;

use chrono::{DateTime, Utc};
use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    data::repositories::{
        leaders_view_repository_impl::LeadersViewRepositoryImpl,
        portfolio_overview_repository_impl::PortfolioOverviewRepositoryImpl,
        publisher_repository_impl::PublisherRepositoryImpl,
        purchase_order_repository_impl::PurchaseOrderRepositoryImpl,
    },
    domain::usecases::{
        forecast_usecase::{ForecastUsecase as _, ForecastUsecaseImpl},
        gl_reconciliation_usecase::{GlReconciliationUsecase as _, GlReconciliationUsecaseImpl},
        leaders_view_usecase::{LeadersViewUsecase as _, LeadersViewUsecaseImpl},
        portfolio_overview_usecase::{PortfolioOverviewUsecase as _, PortfolioOverviewUsecaseImpl},
        publisher_usecase::{PublisherUsecase as _, PublisherUsecaseImpl},
        purchase_order_usecase::{PurchaseOrderUsecase as _, PurchaseOrderUsecaseImpl},
    },
    entities::{
        ForecastConfig, ForecastEdit, ForecastRollup, GlReconciliationRecord,
        GlReconciliationSummary, Granularity, LeadersView, PoFinancials, PoForecast,
        PortfolioOverview, Publisher, Publisher360Data, PublisherEdit, PurchaseOrder,
        PurchaseOrderPatch,
    },
    ext::sample_data::{
        LEADERS_VIEW_RON, PORTFOLIO_OVERVIEW_RON, PUBLISHERS_RON, PURCHASE_ORDERS_CSV,
    },
    presentation::{json_printer::JsonPrinter, rollup_report_printer::RollupReportPrinter},
};

pub type Json = String;
pub type Report = String;

/// Entry point of the library: forecasts, purchase orders, publishers, GL
/// reconciliation and the leaders view, backed by in-memory stores.
pub struct SamPortfolioUtil {
    forecast_usecase: ForecastUsecaseImpl,
    purchase_order_usecase: PurchaseOrderUsecaseImpl,
    publisher_usecase: PublisherUsecaseImpl,
    gl_reconciliation_usecase: GlReconciliationUsecaseImpl,
    leaders_view_usecase: LeadersViewUsecaseImpl,
    portfolio_overview_usecase: PortfolioOverviewUsecaseImpl,
    json_printer: JsonPrinter,
    report_printer: RollupReportPrinter,
}

impl SamPortfolioUtil {
    pub fn new() -> Result<Self, ServerError> {
        Self::with_config(ForecastConfig::default())
    }

    pub fn with_config(config: ForecastConfig) -> Result<Self, ServerError> {
        Self::from_string(
            config,
            PURCHASE_ORDERS_CSV,
            PUBLISHERS_RON,
            LEADERS_VIEW_RON,
            PORTFOLIO_OVERVIEW_RON,
        )
    }

    pub fn from_string(
        config: ForecastConfig,
        purchase_orders_csv: &str,
        publishers_ron: &str,
        leaders_view_ron: &str,
        portfolio_overview_ron: &str,
    ) -> Result<Self, ServerError> {
        Self::build(
            config,
            PurchaseOrderRepositoryImpl::from_string(purchase_orders_csv)?,
            PublisherRepositoryImpl::from_string(publishers_ron)?,
            LeadersViewRepositoryImpl::from_string(leaders_view_ron)?,
            PortfolioOverviewRepositoryImpl::from_string(portfolio_overview_ron)?,
        )
    }

    pub fn from_file<P>(
        config: ForecastConfig,
        purchase_orders_csv: P,
        publishers_ron: P,
        leaders_view_ron: P,
        portfolio_overview_ron: P,
    ) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Self::build(
            config,
            PurchaseOrderRepositoryImpl::from_file(purchase_orders_csv)?,
            PublisherRepositoryImpl::from_file(publishers_ron)?,
            LeadersViewRepositoryImpl::from_file(leaders_view_ron)?,
            PortfolioOverviewRepositoryImpl::from_file(portfolio_overview_ron)?,
        )
    }

    fn build(
        config: ForecastConfig,
        purchase_orders: PurchaseOrderRepositoryImpl,
        publishers: PublisherRepositoryImpl,
        leaders_view: LeadersViewRepositoryImpl,
        portfolio_overview: PortfolioOverviewRepositoryImpl,
    ) -> Result<Self, ServerError> {
        let purchase_orders = Arc::new(purchase_orders);
        Ok(Self {
            forecast_usecase: ForecastUsecaseImpl::new(config, purchase_orders.clone())?,
            purchase_order_usecase: PurchaseOrderUsecaseImpl::new(purchase_orders),
            publisher_usecase: PublisherUsecaseImpl::new(Arc::new(publishers)),
            gl_reconciliation_usecase: GlReconciliationUsecaseImpl::new(),
            leaders_view_usecase: LeadersViewUsecaseImpl::new(Arc::new(leaders_view)),
            portfolio_overview_usecase: PortfolioOverviewUsecaseImpl::new(Arc::new(
                portfolio_overview,
            )),
            json_printer: JsonPrinter::new(true),
            report_printer: RollupReportPrinter::new(Currency::USD),
        })
    }

    // Forecasts.

    pub async fn po_financials(&self, po_id: &str) -> Result<PoFinancials, ServerError> {
        self.forecast_usecase.po_financials(po_id).await
    }

    pub async fn po_financials_json(&self, po_id: &str) -> Result<Json, ServerError> {
        let financials = self.forecast_usecase.po_financials(po_id).await?;
        self.json_printer.print(&financials, "PoFinancials")
    }

    pub async fn po_forecast(&self, po_number: &str) -> Result<PoForecast, ServerError> {
        self.forecast_usecase.po_forecast(po_number).await
    }

    pub async fn edit_forecast(
        &self,
        forecast: PoForecast,
        edits: &[ForecastEdit],
        modified_by: &str,
        modified_at: DateTime<Utc>,
    ) -> Result<PoForecast, ServerError> {
        self.forecast_usecase
            .edit_forecast(forecast, edits, modified_by, modified_at)
            .await
    }

    pub async fn rollup(
        &self,
        po_id: &str,
        granularity: Granularity,
    ) -> Result<Vec<ForecastRollup>, ServerError> {
        self.forecast_usecase.rollup(po_id, granularity).await
    }

    pub async fn rollup_report(
        &self,
        po_id: &str,
        granularity: Granularity,
    ) -> Result<Report, ServerError> {
        let rows = self.forecast_usecase.rollup(po_id, granularity).await?;
        Ok(self.report_printer.print(&rows))
    }

    // Purchase orders.

    pub async fn purchase_orders(&self) -> Result<Vec<PurchaseOrder>, ServerError> {
        self.purchase_order_usecase.list().await
    }

    pub async fn purchase_order(&self, po_number: &str) -> Result<PurchaseOrder, ServerError> {
        self.purchase_order_usecase.get(po_number).await
    }

    pub async fn patch_purchase_order(
        &self,
        po_number: &str,
        patch: &PurchaseOrderPatch,
    ) -> Result<PurchaseOrder, ServerError> {
        self.purchase_order_usecase.patch(po_number, patch).await
    }

    // Publishers.

    pub async fn publishers(&self) -> Result<Vec<Publisher>, ServerError> {
        self.publisher_usecase.list().await
    }

    pub async fn publisher_360(&self, publisher_id: &str) -> Result<Publisher360Data, ServerError> {
        self.publisher_usecase.get_360(publisher_id).await
    }

    pub async fn save_publisher(
        &self,
        publisher_id: &str,
        edit: PublisherEdit,
    ) -> Result<Publisher360Data, ServerError> {
        self.publisher_usecase.save(publisher_id, edit).await
    }

    // GL reconciliation.

    pub async fn gl_records(
        &self,
        fiscal_year: Option<&str>,
    ) -> Result<Vec<GlReconciliationRecord>, ServerError> {
        self.gl_reconciliation_usecase.records(fiscal_year).await
    }

    pub async fn gl_summaries(
        &self,
        fiscal_year: Option<&str>,
    ) -> Result<Vec<GlReconciliationSummary>, ServerError> {
        self.gl_reconciliation_usecase.summaries(fiscal_year).await
    }

    // Leaders view.

    pub async fn leaders_view(&self) -> Result<LeadersView, ServerError> {
        self.leaders_view_usecase.leaders_view().await
    }

    // Portfolio overview.

    pub async fn portfolio_overview(&self) -> Result<PortfolioOverview, ServerError> {
        self.portfolio_overview_usecase.portfolio_overview().await
    }

    pub async fn portfolio_overview_json(&self) -> Result<Json, ServerError> {
        let overview = self.portfolio_overview_usecase.portfolio_overview().await?;
        self.json_printer.print(&overview, "PortfolioOverview")
    }
}
