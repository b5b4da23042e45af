// Field and variant names follow the camelCase JSON shape the dashboard
// consumes. Aliases accept the identifier spelling used in RON catalogues.

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct Publisher {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractKpis {
    pub tcv: f64,
    pub acv: f64,
    pub tcv_trend: f64,
    pub acv_trend: f64,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyDates {
    pub next_renewal_date: String,
    #[serde(rename = "renewalPOAmount")]
    pub renewal_po_amount: f64,
    pub vendor_fiscal_year_end: String,
    pub days_until_renewal: i64,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseByBu {
    pub bu_name: String,
    pub active_count: u32,
    pub inactive_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize, serde_derive::Deserialize)]
pub enum EntitlementStatus {
    Active,
    Expiring,
    Overage,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entitlement {
    pub id: String,
    pub product_name: String,
    pub quantity: u32,
    pub consumed: u32,
    pub consumed_percent: f64,
    pub status: EntitlementStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize, serde_derive::Deserialize)]
pub enum ContractStatus {
    Active,
    #[serde(rename = "Expiring Soon", alias = "ExpiringSoon")]
    ExpiringSoon,
    Closed,
    Draft,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub contract_number: String,
    pub po_number: String,
    pub tcv: f64,
    pub acv: f64,
    pub renewal_date: String,
    pub description: String,
    pub business_unit: String,
    pub status: ContractStatus,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize, serde_derive::Deserialize)]
pub enum DataClassification {
    #[serde(rename = "Highly Confidential", alias = "HighlyConfidential")]
    HighlyConfidential,
    Confidential,
    #[serde(rename = "Internal Use", alias = "InternalUse")]
    InternalUse,
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize, serde_derive::Deserialize)]
pub enum ProductStatus {
    Active,
    #[serde(rename = "Pending Review", alias = "PendingReview")]
    PendingReview,
    Deprecated,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub product_name: String,
    /// `On-Premise`, `Cloud`, `Hybrid` or free text.
    pub infrastructure: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure_details: Option<String>,
    pub service_level_objectives: String,
    pub data_classification: DataClassification,
    pub status: ProductStatus,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct PublisherContact {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize, serde_derive::Deserialize)]
pub enum InternalTeam {
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "GPS")]
    Gps,
    #[serde(rename = "Financial Analysts", alias = "FinancialAnalysts")]
    FinancialAnalysts,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct InternalContact {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub team: InternalTeam,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize, serde_derive::Deserialize)]
pub enum Influence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stakeholder {
    pub id: String,
    pub name: String,
    #[serde(rename = "orgBU")]
    pub org_bu: String,
    pub role: String,
    pub influence: Influence,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publisher360Data {
    pub publisher: Publisher,
    pub kpis: ContractKpis,
    pub key_dates: KeyDates,
    #[serde(rename = "licensesByBU")]
    pub licenses_by_bu: Vec<LicenseByBu>,
    pub entitlements: Vec<Entitlement>,
    pub contracts: Vec<Contract>,
    pub products: Vec<Product>,
    pub publisher_contacts: Vec<PublisherContact>,
    pub internal_contacts: Vec<InternalContact>,
    pub stakeholders: Vec<Stakeholder>,
}

/// One item saved from the publisher edit panel. Items are upserted by id
/// into the matching section.
#[derive(Debug, Clone, PartialEq)]
pub enum PublisherEdit {
    Contract(Contract),
    Product(Product),
    PublisherContact(PublisherContact),
    InternalContact(InternalContact),
    Stakeholder(Stakeholder),
}

impl PublisherEdit {
    pub fn section(&self) -> &'static str {
        match self {
            PublisherEdit::Contract(_) => "contracts",
            PublisherEdit::Product(_) => "products",
            PublisherEdit::PublisherContact(_) => "publisherContacts",
            PublisherEdit::InternalContact(_) => "internalContacts",
            PublisherEdit::Stakeholder(_) => "stakeholders",
        }
    }
}
