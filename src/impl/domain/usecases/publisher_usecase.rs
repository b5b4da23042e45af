use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::publisher_repository_impl::PublisherRepositoryImpl,
    domain::repositories::publisher_repository::PublisherRepository,
    entities::{Publisher, Publisher360Data, PublisherEdit},
};

#[async_trait]
pub trait PublisherUsecase: Send + Sync {
    async fn list(&self) -> Result<Vec<Publisher>, ServerError>;

    async fn get_360(&self, publisher_id: &str) -> Result<Publisher360Data, ServerError>;

    async fn save(
        &self,
        publisher_id: &str,
        edit: PublisherEdit,
    ) -> Result<Publisher360Data, ServerError>;
}

pub(crate) struct PublisherUsecaseImpl<R = PublisherRepositoryImpl>
where
    R: PublisherRepository,
{
    publisher_repository: Arc<R>,
}

#[async_trait]
impl<R> PublisherUsecase for PublisherUsecaseImpl<R>
where
    R: PublisherRepository,
{
    async fn list(&self) -> Result<Vec<Publisher>, ServerError> {
        self.publisher_repository.list()
    }

    async fn get_360(&self, publisher_id: &str) -> Result<Publisher360Data, ServerError> {
        self.publisher_repository.get(publisher_id)
    }

    async fn save(
        &self,
        publisher_id: &str,
        edit: PublisherEdit,
    ) -> Result<Publisher360Data, ServerError> {
        self.publisher_repository.save(publisher_id, edit)
    }
}

impl<R> PublisherUsecaseImpl<R>
where
    R: PublisherRepository,
{
    pub(crate) fn new(publisher_repository: Arc<R>) -> Self {
        Self {
            publisher_repository,
        }
    }
}
