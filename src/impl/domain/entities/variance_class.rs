#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VarianceClass {
    /// |variance| < 2%.
    OnTrack,
    /// 2% <= |variance| < 5%.
    Watch,
    /// |variance| >= 5%.
    Alert,
}
