// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod forecast_config_ron_datasource;
        pub(crate) mod leaders_view_ron_datasource;
        pub(crate) mod portfolio_overview_ron_datasource;
        pub(crate) mod publishers_ron_datasource;
        pub(crate) mod purchase_orders_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod attribute_type_model;
        pub(crate) mod currency_amount_model;
        pub(crate) mod forecast_config_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod leaders_view_model;
        pub(crate) mod portfolio_overview_model;
        pub(crate) mod publisher_catalog_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod leaders_view_repository_impl;
        pub(crate) mod portfolio_overview_repository_impl;
        pub(crate) mod publisher_repository_impl;
        pub(crate) mod purchase_order_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod fiscal_period;
        pub(crate) mod forecast_config;
        pub(crate) mod forecast_edit;
        pub(crate) mod forecast_rollup;
        pub(crate) mod gl_reconciliation;
        pub(crate) mod leaders_view;
        pub(crate) mod monthly_forecast;
        pub(crate) mod po_financials;
        pub(crate) mod portfolio_overview;
        pub(crate) mod publisher;
        pub(crate) mod purchase_order;
        pub(crate) mod quarter_data;
        pub(crate) mod variance_class;
    }
    pub(crate) mod logic {
        pub(crate) mod aggregator;
        pub(crate) mod fiscal_calendar;
        pub(crate) mod forecast_editor;
        pub(crate) mod forecast_generator;
        pub(crate) mod gl_reconciler;
        pub(crate) mod gl_record_generator;
        pub(crate) mod purchase_order_impl;
        pub(crate) mod seed;
        pub(crate) mod spend_tiers;
        pub(crate) mod utils;
        pub(crate) mod variance_classifier;
    }
    pub(crate) mod repositories {
        pub(crate) mod leaders_view_repository;
        pub(crate) mod portfolio_overview_repository;
        pub(crate) mod publisher_repository;
        pub(crate) mod purchase_order_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod forecast_usecase;
        pub(crate) mod gl_reconciliation_usecase;
        pub(crate) mod leaders_view_usecase;
        pub(crate) mod portfolio_overview_usecase;
        pub(crate) mod publisher_usecase;
        pub(crate) mod purchase_order_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod json_printer;
    pub(crate) mod rollup_report_printer;
    pub(crate) mod utils;
    pub(crate) mod variance_class_fmt;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::fiscal_period::*;
        pub use crate::domain::entities::forecast_config::*;
        pub use crate::domain::entities::forecast_edit::*;
        pub use crate::domain::entities::forecast_rollup::*;
        pub use crate::domain::entities::gl_reconciliation::*;
        pub use crate::domain::entities::leaders_view::*;
        pub use crate::domain::entities::monthly_forecast::*;
        pub use crate::domain::entities::po_financials::*;
        pub use crate::domain::entities::portfolio_overview::*;
        pub use crate::domain::entities::publisher::*;
        pub use crate::domain::entities::purchase_order::*;
        pub use crate::domain::entities::quarter_data::*;
        pub use crate::domain::entities::variance_class::*;
    }

    pub mod logic {
        pub use crate::domain::logic::gl_reconciler::{ColumnFilters, FilterColumns};
        pub use crate::domain::logic::seed::seed_from_id;
        pub use crate::domain::logic::variance_classifier::classify_variance;
    }

    pub mod formatting {
        pub use crate::presentation::utils::format_amount;
    }
}
