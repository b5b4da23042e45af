use std::{collections::BTreeMap, sync::RwLock};

use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    data::{
        datasources::publishers_ron_datasource::{
            PublishersRonDatasource, PublishersRonDatasourceImpl,
        },
        models::publisher_catalog_model::PublisherCatalogModel,
    },
    domain::repositories::publisher_repository::PublisherRepository,
    entities::{Publisher, Publisher360Data, PublisherEdit},
    errors::{PublisherNotFound, RepositoryPoisoned},
};

const STORE: &str = "publisher";

struct PublisherStore {
    publishers: Vec<Publisher>,
    details: BTreeMap<String, Publisher360Data>,
}

pub(crate) struct PublisherRepositoryImpl {
    store: RwLock<PublisherStore>,
}

fn upsert<T>(items: &mut Vec<T>, item: T, id: impl Fn(&T) -> &str) {
    let key = id(&item).to_string();
    match items.iter().position(|existing| id(existing) == key) {
        Some(i) => items[i] = item,
        None => items.push(item),
    }
}

impl PublisherRepository for PublisherRepositoryImpl {
    fn list(&self) -> Result<Vec<Publisher>, ServerError> {
        let store = self.store.read().map_err(|_| RepositoryPoisoned::new(STORE))?;
        Ok(store.publishers.clone())
    }

    fn get(&self, publisher_id: &str) -> Result<Publisher360Data, ServerError> {
        let store = self.store.read().map_err(|_| RepositoryPoisoned::new(STORE))?;
        store
            .details
            .get(publisher_id)
            .cloned()
            .ok_or_else(|| PublisherNotFound::new(publisher_id))
    }

    fn save(&self, publisher_id: &str, edit: PublisherEdit) -> Result<Publisher360Data, ServerError> {
        let mut store = self.store.write().map_err(|_| RepositoryPoisoned::new(STORE))?;
        let data = store
            .details
            .get_mut(publisher_id)
            .ok_or_else(|| PublisherNotFound::new(publisher_id))?;
        let section = edit.section();
        match edit {
            PublisherEdit::Contract(c) => upsert(&mut data.contracts, c, |c| c.id.as_str()),
            PublisherEdit::Product(p) => upsert(&mut data.products, p, |p| p.id.as_str()),
            PublisherEdit::PublisherContact(c) => {
                upsert(&mut data.publisher_contacts, c, |c| c.id.as_str())
            }
            PublisherEdit::InternalContact(c) => upsert(&mut data.internal_contacts, c, |c| c.id.as_str()),
            PublisherEdit::Stakeholder(s) => upsert(&mut data.stakeholders, s, |s| s.id.as_str()),
        }
        info!(publisher_id, section, "publisher section saved");
        Ok(data.clone())
    }
}

impl From<PublisherCatalogModel> for PublisherRepositoryImpl {
    fn from(catalog: PublisherCatalogModel) -> Self {
        let details = catalog
            .details
            .into_iter()
            .map(|d| (d.publisher.id.clone(), d))
            .collect();
        Self {
            store: RwLock::new(PublisherStore {
                publishers: catalog.publishers,
                details,
            }),
        }
    }
}

impl PublisherRepositoryImpl {
    pub(crate) fn from_string(ron: &str) -> Result<Self, ServerError> {
        Ok(PublishersRonDatasourceImpl::new().from_string(ron)?.into())
    }

    pub(crate) fn from_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Ok(PublishersRonDatasourceImpl::new().from_file(path)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::{Influence, Stakeholder},
        errors::error_message,
        ext::sample_data::PUBLISHERS_RON,
    };

    fn repository() -> PublisherRepositoryImpl {
        PublisherRepositoryImpl::from_string(PUBLISHERS_RON).unwrap()
    }

    fn stakeholder(id: &str, influence: Influence) -> Stakeholder {
        Stakeholder {
            id: id.to_string(),
            name: "Nick Fury".to_string(),
            org_bu: "Security / Operations".to_string(),
            role: "Director".to_string(),
            influence,
            notes: "Joined the renewal committee".to_string(),
            email: None,
        }
    }

    #[test]
    fn lists_publishers_and_details() {
        let repo = repository();
        assert_eq!(repo.list().unwrap().len(), 5);
        assert_eq!(repo.get("oracle").unwrap().publisher.name, "Oracle");
        // Listed, but without a 360° view.
        assert!(error_message(repo.get("sap")).contains("Publisher 'sap' not found"));
        assert!(error_message(repo.get("nobody")).contains("Publisher 'nobody' not found"));
    }

    #[test]
    fn save_upserts_by_id() {
        let repo = repository();
        let before = repo.get("microsoft").unwrap().stakeholders.len();

        let added = repo
            .save("microsoft", PublisherEdit::Stakeholder(stakeholder("ms9", Influence::Low)))
            .unwrap();
        assert_eq!(added.stakeholders.len(), before + 1);

        let replaced = repo
            .save("microsoft", PublisherEdit::Stakeholder(stakeholder("ms9", Influence::High)))
            .unwrap();
        assert_eq!(replaced.stakeholders.len(), before + 1);
        assert_eq!(replaced.stakeholders.last().unwrap().influence, Influence::High);
        assert_eq!(repo.get("microsoft").unwrap(), replaced);
    }

    #[test]
    fn save_to_unknown_publisher_fails() {
        let result =
            repository().save("nobody", PublisherEdit::Stakeholder(stakeholder("x", Influence::Low)));
        assert!(error_message(result).contains("Publisher 'nobody' not found"));
    }
}
