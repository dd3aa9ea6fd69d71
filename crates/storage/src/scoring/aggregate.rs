use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::Squad;

use super::rules::ScoringRules;

/// Applies the captain / vice-captain multiplier to one player's base
/// points. The two designations are distinct members of the roster, so at
/// most one branch can match.
pub fn adjusted_points(
    rules: &ScoringRules,
    base_points: i32,
    player_id: Uuid,
    squad: &Squad,
) -> Decimal {
    let base = Decimal::from(base_points);

    if player_id == squad.captain_id {
        base * rules.captain_multiplier
    } else if player_id == squad.vice_captain_id {
        base * rules.vice_captain_multiplier
    } else {
        base
    }
}

/// Sums multiplier-adjusted points over the squad's roster. A player with
/// no recorded performance contributes 0 ("did not play" is not an error).
/// Decimal keeps the vice-captain half-points exact.
pub fn squad_total(
    rules: &ScoringRules,
    squad: &Squad,
    points_by_player: &HashMap<Uuid, i32>,
) -> Decimal {
    squad
        .player_ids
        .iter()
        .map(|player_id| {
            let base = points_by_player.get(player_id).copied().unwrap_or(0);
            adjusted_points(rules, base, *player_id, squad)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squad_of(player_ids: Vec<Uuid>, captain_id: Uuid, vice_captain_id: Uuid) -> Squad {
        Squad {
            squad_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            match_id: Uuid::new_v4(),
            squad_name: "Test XI".to_string(),
            player_ids,
            captain_id,
            vice_captain_id,
            total_points: Decimal::ZERO,
            rank: 0,
            created_at: chrono::DateTime::<chrono::Utc>::UNIX_EPOCH.naive_utc(),
        }
    }

    fn eleven() -> Vec<Uuid> {
        (0..11).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn test_captain_doubles_base_points() {
        let rules = ScoringRules::default();
        let players = eleven();
        let squad = squad_of(players.clone(), players[0], players[1]);

        assert_eq!(
            adjusted_points(&rules, 30, players[0], &squad),
            Decimal::from(60)
        );
    }

    #[test]
    fn test_vice_captain_gets_one_and_a_half() {
        let rules = ScoringRules::default();
        let players = eleven();
        let squad = squad_of(players.clone(), players[0], players[1]);

        assert_eq!(
            adjusted_points(&rules, 21, players[1], &squad),
            Decimal::new(315, 1)
        );
    }

    #[test]
    fn test_regular_player_unchanged() {
        let rules = ScoringRules::default();
        let players = eleven();
        let squad = squad_of(players.clone(), players[0], players[1]);

        assert_eq!(
            adjusted_points(&rules, 42, players[5], &squad),
            Decimal::from(42)
        );
    }

    #[test]
    fn test_total_captain_50_vice_20_rest_0_is_130() {
        let rules = ScoringRules::default();
        let players = eleven();
        let squad = squad_of(players.clone(), players[0], players[1]);

        let mut points = HashMap::new();
        points.insert(players[0], 50);
        points.insert(players[1], 20);

        assert_eq!(squad_total(&rules, &squad, &points), Decimal::from(130));
    }

    #[test]
    fn test_missing_performance_counts_as_zero() {
        let rules = ScoringRules::default();
        let players = eleven();
        let squad = squad_of(players.clone(), players[0], players[1]);

        let points = HashMap::new();
        assert_eq!(squad_total(&rules, &squad, &points), Decimal::ZERO);
    }

    #[test]
    fn test_total_invariant_under_roster_permutation() {
        let rules = ScoringRules::default();
        let players = eleven();
        let mut points = HashMap::new();
        for (i, player_id) in players.iter().enumerate() {
            points.insert(*player_id, (i as i32) * 7);
        }

        let squad = squad_of(players.clone(), players[0], players[1]);
        let expected = squad_total(&rules, &squad, &points);

        let mut reversed = players.clone();
        reversed.reverse();
        let permuted = squad_of(reversed, players[0], players[1]);

        assert_eq!(squad_total(&rules, &permuted, &points), expected);
    }

    #[test]
    fn test_half_points_are_exact() {
        let rules = ScoringRules::default();
        let players = eleven();
        let squad = squad_of(players.clone(), players[0], players[1]);

        let mut points = HashMap::new();
        points.insert(players[1], 1);

        // 1 * 1.5 must be exactly 1.5, not a float approximation.
        assert_eq!(squad_total(&rules, &squad, &points), Decimal::new(15, 1));
    }
}
