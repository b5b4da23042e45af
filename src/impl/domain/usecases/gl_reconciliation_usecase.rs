use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    domain::logic::{gl_reconciler::summarize, gl_record_generator::gl_records},
    entities::{GlReconciliationRecord, GlReconciliationSummary},
};

#[async_trait]
pub trait GlReconciliationUsecase: Send + Sync {
    /// Records of one fiscal year (e.g. `"2025"`), or all of them.
    async fn records(
        &self,
        fiscal_year: Option<&str>,
    ) -> Result<Vec<GlReconciliationRecord>, ServerError>;

    async fn summaries(
        &self,
        fiscal_year: Option<&str>,
    ) -> Result<Vec<GlReconciliationSummary>, ServerError>;
}

pub(crate) struct GlReconciliationUsecaseImpl;

#[async_trait]
impl GlReconciliationUsecase for GlReconciliationUsecaseImpl {
    async fn records(
        &self,
        fiscal_year: Option<&str>,
    ) -> Result<Vec<GlReconciliationRecord>, ServerError> {
        Ok(gl_records()
            .into_iter()
            .filter(|r| fiscal_year.map_or(true, |fy| r.fiscal_year == fy.trim()))
            .collect())
    }

    async fn summaries(
        &self,
        fiscal_year: Option<&str>,
    ) -> Result<Vec<GlReconciliationSummary>, ServerError> {
        Ok(self.records(fiscal_year).await?.iter().map(summarize).collect())
    }
}

impl GlReconciliationUsecaseImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}
