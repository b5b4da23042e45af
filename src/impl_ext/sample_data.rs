//! Bundled sample inputs, matching the data the portfolio dashboard ships
//! with.

/// Seven purchase orders in long attribute format.
pub const PURCHASE_ORDERS_CSV: &str = include_str!("sample_data/purchase_orders.csv");

/// Five publishers, with 360° details for `oracle` and `microsoft`.
pub const PUBLISHERS_RON: &str = include_str!("sample_data/publishers.ron");

pub const LEADERS_VIEW_RON: &str = include_str!("sample_data/leaders_view.ron");

pub const PORTFOLIO_OVERVIEW_RON: &str = include_str!("sample_data/portfolio_overview.ron");
