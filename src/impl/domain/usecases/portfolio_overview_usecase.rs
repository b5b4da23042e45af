use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::portfolio_overview_repository_impl::PortfolioOverviewRepositoryImpl,
    domain::repositories::portfolio_overview_repository::PortfolioOverviewRepository,
    entities::PortfolioOverview,
};

#[async_trait]
pub trait PortfolioOverviewUsecase: Send + Sync {
    async fn portfolio_overview(&self) -> Result<PortfolioOverview, ServerError>;
}

pub(crate) struct PortfolioOverviewUsecaseImpl<R = PortfolioOverviewRepositoryImpl>
where
    R: PortfolioOverviewRepository,
{
    portfolio_overview_repository: Arc<R>,
}

#[async_trait]
impl<R> PortfolioOverviewUsecase for PortfolioOverviewUsecaseImpl<R>
where
    R: PortfolioOverviewRepository,
{
    async fn portfolio_overview(&self) -> Result<PortfolioOverview, ServerError> {
        self.portfolio_overview_repository.load()
    }
}

impl<R> PortfolioOverviewUsecaseImpl<R>
where
    R: PortfolioOverviewRepository,
{
    pub(crate) fn new(portfolio_overview_repository: Arc<R>) -> Self {
        Self {
            portfolio_overview_repository,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ext::sample_data::PORTFOLIO_OVERVIEW_RON;

    #[tokio::test]
    async fn serves_the_loaded_overview() {
        let repository = PortfolioOverviewRepositoryImpl::from_string(PORTFOLIO_OVERVIEW_RON).unwrap();
        let usecase = PortfolioOverviewUsecaseImpl::new(Arc::new(repository));
        let overview = usecase.portfolio_overview().await.unwrap();
        assert_eq!(overview.kpis.forecast.fy, 13_000_000.0);
        assert_eq!(overview.pos[4].status, "Pending Renewal");
        assert_eq!(overview, usecase.portfolio_overview().await.unwrap());
    }
}
