use crate::entities::SpendTiers;

impl SpendTiers {
    /// Fixed split of a spend total across vendor tiers, each share rounded
    /// to whole currency units (half away from zero).
    pub fn from_total(total: f64) -> Self {
        Self {
            mega: (total * 0.40).round(),
            platinum: (total * 0.30).round(),
            gold: (total * 0.15).round(),
            silver: (total * 0.10).round(),
            bronze: (total * 0.04).round(),
            tail: (total * 0.01).round(),
        }
    }

    pub fn total(&self) -> f64 {
        self.mega + self.platinum + self.gold + self.silver + self.bronze + self.tail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_fixed_shares() {
        let tiers = SpendTiers::from_total(152_000_000.0);
        assert_eq!(tiers.mega, 60_800_000.0);
        assert_eq!(tiers.platinum, 45_600_000.0);
        assert_eq!(tiers.gold, 22_800_000.0);
        assert_eq!(tiers.silver, 15_200_000.0);
        assert_eq!(tiers.bronze, 6_080_000.0);
        assert_eq!(tiers.tail, 1_520_000.0);
        assert_eq!(tiers.total(), 152_000_000.0);
    }

    #[test]
    fn rounds_each_share() {
        let tiers = SpendTiers::from_total(1_005.0);
        assert_eq!(tiers.mega, 402.0);
        assert_eq!(tiers.tail, 10.0);
        assert_eq!(tiers.bronze, 40.0);
    }
}
