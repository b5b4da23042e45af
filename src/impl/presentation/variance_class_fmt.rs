use crate::entities::VarianceClass;

impl VarianceClass {
    pub fn label(&self) -> &'static str {
        match self {
            VarianceClass::OnTrack => "on-track",
            VarianceClass::Watch => "watch",
            VarianceClass::Alert => "alert",
        }
    }
}

impl std::fmt::Display for VarianceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
