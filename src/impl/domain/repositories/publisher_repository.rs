use fractic_server_error::ServerError;

use crate::entities::{Publisher, Publisher360Data, PublisherEdit};

pub trait PublisherRepository: Send + Sync {
    fn list(&self) -> Result<Vec<Publisher>, ServerError>;

    fn get(&self, publisher_id: &str) -> Result<Publisher360Data, ServerError>;

    fn save(&self, publisher_id: &str, edit: PublisherEdit) -> Result<Publisher360Data, ServerError>;
}
