use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::portfolio_overview_ron_datasource::{
            PortfolioOverviewRonDatasource, PortfolioOverviewRonDatasourceImpl,
        },
        models::portfolio_overview_model::{PortfolioOverviewModel, RenewalModel},
    },
    domain::repositories::portfolio_overview_repository::PortfolioOverviewRepository,
    entities::{PortfolioOverview, Renewal},
};

pub(crate) struct PortfolioOverviewRepositoryImpl {
    overview: PortfolioOverview,
}

impl From<RenewalModel> for Renewal {
    fn from(model: RenewalModel) -> Self {
        Renewal {
            expected_amount: f64::from(model.expected_quantity) * model.unit_price,
            po_number: model.po_number,
            next_renewal_date: model.next_renewal_date,
            expected_quantity: model.expected_quantity,
            unit_price: model.unit_price,
            term: model.term,
            risk: model.risk,
            notes: model.notes,
        }
    }
}

impl From<PortfolioOverviewModel> for PortfolioOverview {
    fn from(model: PortfolioOverviewModel) -> Self {
        let mut renewals: Vec<Renewal> = model.renewals.into_iter().map(Into::into).collect();
        renewals.sort_by(|a, b| {
            (a.next_renewal_date, &a.po_number).cmp(&(b.next_renewal_date, &b.po_number))
        });
        PortfolioOverview {
            kpis: model.kpis,
            pos: model.pos,
            forecast_matrix: model.forecast_matrix,
            actuals: model.actuals,
            renewals,
        }
    }
}

impl PortfolioOverviewRepository for PortfolioOverviewRepositoryImpl {
    fn load(&self) -> Result<PortfolioOverview, ServerError> {
        Ok(self.overview.clone())
    }
}

impl PortfolioOverviewRepositoryImpl {
    pub(crate) fn from_string(ron: &str) -> Result<Self, ServerError> {
        Ok(Self {
            overview: PortfolioOverviewRonDatasourceImpl::new().from_string(ron)?.into(),
        })
    }

    pub(crate) fn from_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Ok(Self {
            overview: PortfolioOverviewRonDatasourceImpl::new().from_file(path)?.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{entities::RenewalRisk, errors::error_message, ext::sample_data::PORTFOLIO_OVERVIEW_RON};

    #[test]
    fn loads_sample_overview() {
        let overview = PortfolioOverviewRepositoryImpl::from_string(PORTFOLIO_OVERVIEW_RON)
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(overview.kpis.total_annualized_spend, 12_500_000.0);
        assert_eq!(overview.kpis.actuals.ytd, 9_000_000.0);
        assert_eq!(overview.pos.len(), 5);
        assert_eq!(overview.pos[0].start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(overview.forecast_matrix[1].buckets["2024-Q1"], 0.0);
        assert_eq!(overview.actuals.len(), 2);

        let renewal = &overview.renewals[0];
        assert_eq!(renewal.po_number, "PO-2024-005");
        assert_eq!(renewal.expected_amount, 200_000.0);
        assert_eq!(renewal.risk, RenewalRisk::Low);
    }

    #[test]
    fn renewals_are_ordered_by_date() {
        let ron = r#"(
            kpis: (
                totalAnnualizedSpend: 1.0,
                forecast: (cy: 1.0, fy: 1.0),
                commit: (cy: 1.0, fy: 1.0),
                actuals: (mtd: 0.0, qtd: 0.0, ytd: 0.0),
                variance: 0.0,
            ),
            pos: [],
            renewals: [
                (poNumber: "B", nextRenewalDate: "2026-03-31", expectedQuantity: 2,
                 unitPrice: 10.0, term: "12 Months", risk: High),
                (poNumber: "A", nextRenewalDate: "2025-12-31", expectedQuantity: 3,
                 unitPrice: 5.5, term: "12 Months", risk: Medium, notes: "Budget cut"),
            ],
        )"#;
        let overview = PortfolioOverviewRepositoryImpl::from_string(ron).unwrap().load().unwrap();
        let order: Vec<&str> = overview.renewals.iter().map(|r| r.po_number.as_str()).collect();
        assert_eq!(order, vec!["A", "B"]);
        assert_eq!(overview.renewals[0].expected_amount, 16.5);
        assert_eq!(overview.renewals[1].notes, "");
        assert!(overview.forecast_matrix.is_empty());
    }

    #[test]
    fn rejects_invalid_ron() {
        let result = PortfolioOverviewRepositoryImpl::from_string("(pos: [])");
        assert!(error_message(result).contains("Invalid PortfolioOverview"));
    }
}
