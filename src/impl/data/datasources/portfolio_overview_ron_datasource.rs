use std::fs;

use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::portfolio_overview_model::PortfolioOverviewModel,
    errors::{InvalidRon, ReadError},
};

pub(crate) trait PortfolioOverviewRonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<PortfolioOverviewModel, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<PortfolioOverviewModel, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct PortfolioOverviewRonDatasourceImpl;

impl PortfolioOverviewRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl PortfolioOverviewRonDatasource for PortfolioOverviewRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<PortfolioOverviewModel, ServerError> {
        from_str(s).map_err(|e| InvalidRon::with_debug("PortfolioOverview", &e))
    }

    fn from_file<P>(&self, path: P) -> Result<PortfolioOverviewModel, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}
