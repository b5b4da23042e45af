use std::fs;

use fractic_server_error::ServerError;
use ron::{extensions::Extensions, Options};

use crate::{
    data::models::publisher_catalog_model::PublisherCatalogModel,
    errors::{InvalidRon, ReadError},
};

pub(crate) trait PublishersRonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<PublisherCatalogModel, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<PublisherCatalogModel, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct PublishersRonDatasourceImpl;

impl PublishersRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl PublishersRonDatasource for PublishersRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<PublisherCatalogModel, ServerError> {
        Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(s)
            .map_err(|e| InvalidRon::with_debug("PublisherCatalog", &e))
    }

    fn from_file<P>(&self, path: P) -> Result<PublisherCatalogModel, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ext::sample_data::PUBLISHERS_RON;

    #[test]
    fn parses_sample_catalogue() {
        let catalog = PublishersRonDatasourceImpl::new()
            .from_string(PUBLISHERS_RON)
            .unwrap();
        assert_eq!(catalog.publishers.len(), 5);
        assert_eq!(catalog.details.len(), 2);
        assert_eq!(catalog.details[0].publisher.id, "oracle");
        assert_eq!(catalog.details[0].contracts.len(), 4);
    }

    #[test]
    fn rejects_invalid_ron() {
        assert!(PublishersRonDatasourceImpl::new()
            .from_string("(publishers: [(id: \"x\")])")
            .is_err());
    }
}
