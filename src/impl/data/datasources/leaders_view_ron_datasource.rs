use std::fs;

use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::leaders_view_model::LeadersViewModel,
    errors::{InvalidRon, ReadError},
};

pub(crate) trait LeadersViewRonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<LeadersViewModel, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<LeadersViewModel, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct LeadersViewRonDatasourceImpl;

impl LeadersViewRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl LeadersViewRonDatasource for LeadersViewRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<LeadersViewModel, ServerError> {
        from_str(s).map_err(|e| InvalidRon::with_debug("LeadersView", &e))
    }

    fn from_file<P>(&self, path: P) -> Result<LeadersViewModel, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}
