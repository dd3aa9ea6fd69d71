use rust_decimal::Decimal;

/// Point values and squad constraints. Defaults are the published contract
/// (1 pt/run, 25 pt/wicket, 8 pt/catch, 2x captain, 1.5x vice-captain,
/// 11-player squads, 100-credit budget); downstream consumers depend on
/// these exact numbers.
#[derive(Debug, Clone)]
pub struct ScoringRules {
    pub run_points: i32,
    pub wicket_points: i32,
    pub catch_points: i32,
    pub captain_multiplier: Decimal,
    pub vice_captain_multiplier: Decimal,
    pub squad_size: usize,
    pub credit_cap: Decimal,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            run_points: 1,
            wicket_points: 25,
            catch_points: 8,
            captain_multiplier: Decimal::from(2),
            vice_captain_multiplier: Decimal::new(15, 1),
            squad_size: 11,
            credit_cap: Decimal::from(100),
        }
    }
}

impl ScoringRules {
    /// Base fantasy points for one player's raw match stats.
    pub fn points_for(&self, runs: i32, wickets: i32, catches: i32) -> i32 {
        runs * self.run_points + wickets * self.wicket_points + catches * self.catch_points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let rules = ScoringRules::default();
        assert_eq!(rules.run_points, 1);
        assert_eq!(rules.wicket_points, 25);
        assert_eq!(rules.catch_points, 8);
        assert_eq!(rules.captain_multiplier, Decimal::from(2));
        assert_eq!(rules.vice_captain_multiplier, Decimal::new(15, 1));
        assert_eq!(rules.squad_size, 11);
        assert_eq!(rules.credit_cap, Decimal::from(100));
    }

    #[test]
    fn test_points_formula() {
        let rules = ScoringRules::default();
        assert_eq!(rules.points_for(0, 0, 0), 0);
        assert_eq!(rules.points_for(1, 0, 0), 1);
        assert_eq!(rules.points_for(0, 1, 0), 25);
        assert_eq!(rules.points_for(0, 0, 1), 8);
        assert_eq!(rules.points_for(47, 2, 3), 47 + 50 + 24);
    }

    #[test]
    fn test_points_are_non_negative_for_valid_stats() {
        let rules = ScoringRules::default();
        for runs in 0..5 {
            for wickets in 0..5 {
                for catches in 0..5 {
                    assert!(rules.points_for(runs, wickets, catches) >= 0);
                }
            }
        }
    }
}
