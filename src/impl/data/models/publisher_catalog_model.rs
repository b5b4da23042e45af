use serde_derive::Deserialize;

use crate::entities::{Publisher, Publisher360Data};

#[derive(Debug, Deserialize)]
pub(crate) struct PublisherCatalogModel {
    pub(crate) publishers: Vec<Publisher>,
    #[serde(default)]
    pub(crate) details: Vec<Publisher360Data>,
}
