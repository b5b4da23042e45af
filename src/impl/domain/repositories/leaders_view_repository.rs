use fractic_server_error::ServerError;

use crate::entities::LeadersView;

pub trait LeadersViewRepository: Send + Sync {
    fn load(&self) -> Result<LeadersView, ServerError>;
}
