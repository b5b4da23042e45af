use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::leaders_view_repository_impl::LeadersViewRepositoryImpl,
    domain::repositories::leaders_view_repository::LeadersViewRepository,
    entities::LeadersView,
};

#[async_trait]
pub trait LeadersViewUsecase: Send + Sync {
    async fn leaders_view(&self) -> Result<LeadersView, ServerError>;
}

pub(crate) struct LeadersViewUsecaseImpl<R = LeadersViewRepositoryImpl>
where
    R: LeadersViewRepository,
{
    leaders_view_repository: Arc<R>,
}

#[async_trait]
impl<R> LeadersViewUsecase for LeadersViewUsecaseImpl<R>
where
    R: LeadersViewRepository,
{
    async fn leaders_view(&self) -> Result<LeadersView, ServerError> {
        self.leaders_view_repository.load()
    }
}

impl<R> LeadersViewUsecaseImpl<R>
where
    R: LeadersViewRepository,
{
    pub(crate) fn new(leaders_view_repository: Arc<R>) -> Self {
        Self {
            leaders_view_repository,
        }
    }
}
