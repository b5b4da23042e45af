use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::leaders_view_ron_datasource::{
            LeadersViewRonDatasource, LeadersViewRonDatasourceImpl,
        },
        models::leaders_view_model::LeadersViewModel,
    },
    domain::repositories::leaders_view_repository::LeadersViewRepository,
    entities::{DepartmentSpend, FundingSource, FundingSources, LeadersView, SpendTiers},
};

pub(crate) struct LeadersViewRepositoryImpl {
    view: LeadersView,
}

impl From<LeadersViewModel> for LeadersView {
    fn from(model: LeadersViewModel) -> Self {
        let funding = |total: f64, count: u32| FundingSource {
            total,
            tiers: SpendTiers::from_total(total),
            count,
        };
        LeadersView {
            level4_spend: model
                .level4_spend
                .into_iter()
                .map(|d| DepartmentSpend {
                    tiers: SpendTiers::from_total(d.total),
                    name: d.name,
                    total: d.total,
                })
                .collect(),
            level5_spend: model.level5_spend,
            funding_source: FundingSources {
                central: funding(model.central_funding.total, model.central_funding.count),
                functional: funding(
                    model.functional_funding.total,
                    model.functional_funding.count,
                ),
            },
            metrics: model.metrics,
        }
    }
}

impl LeadersViewRepository for LeadersViewRepositoryImpl {
    fn load(&self) -> Result<LeadersView, ServerError> {
        Ok(self.view.clone())
    }
}

impl LeadersViewRepositoryImpl {
    pub(crate) fn from_string(ron: &str) -> Result<Self, ServerError> {
        Ok(Self {
            view: LeadersViewRonDatasourceImpl::new().from_string(ron)?.into(),
        })
    }

    pub(crate) fn from_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Ok(Self {
            view: LeadersViewRonDatasourceImpl::new().from_file(path)?.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ext::sample_data::LEADERS_VIEW_RON;

    #[test]
    fn derives_tiers_from_totals() {
        let view = LeadersViewRepositoryImpl::from_string(LEADERS_VIEW_RON)
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(view.level4_spend.len(), 10);
        assert_eq!(view.level4_spend[0].name, "Engineering");
        assert_eq!(view.level4_spend[0].tiers.mega, 60_800_000.0);
        assert_eq!(view.funding_source.central.count, 238);
        assert_eq!(view.funding_source.functional.tiers.tail, 1_270_000.0);
        assert_eq!(view.metrics.tcv, 450_000_000.0);
    }

    #[test]
    fn rejects_invalid_ron() {
        assert!(LeadersViewRonDatasourceImpl::new().from_string("(metrics: ())").is_err());
    }
}
