use fractic_server_error::ServerError;

use crate::entities::PortfolioOverview;

pub trait PortfolioOverviewRepository: Send + Sync {
    fn load(&self) -> Result<PortfolioOverview, ServerError>;
}
