use anyhow::{Context, Result, bail};
use rust_decimal::Decimal;
use storage::scoring::ScoringRules;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub api_keys: String,
    pub scoring_rules: ScoringRules,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("HOST env variable is required")?,
            port: std::env::var("PORT")
                .context("PORT env variable is required")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("DATABASE_URL env variable is required")?,
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
            scoring_rules: scoring_rules_from_env()?,
        })
    }
}

/// Point values and multipliers start from the published defaults; each can
/// be overridden through its env variable for a non-standard deployment.
fn scoring_rules_from_env() -> Result<ScoringRules> {
    let defaults = ScoringRules::default();

    Ok(ScoringRules {
        run_points: override_i32("RUN_POINTS", defaults.run_points)?,
        wicket_points: override_i32("WICKET_POINTS", defaults.wicket_points)?,
        catch_points: override_i32("CATCH_POINTS", defaults.catch_points)?,
        captain_multiplier: override_decimal("CAPTAIN_MULTIPLIER", defaults.captain_multiplier)?,
        vice_captain_multiplier: override_decimal(
            "VICE_CAPTAIN_MULTIPLIER",
            defaults.vice_captain_multiplier,
        )?,
        squad_size: defaults.squad_size,
        credit_cap: override_decimal("CREDIT_CAP", defaults.credit_cap)?,
    })
}

fn override_i32(var: &str, default: i32) -> Result<i32> {
    parse_i32(var, std::env::var(var).ok(), default)
}

fn override_decimal(var: &str, default: Decimal) -> Result<Decimal> {
    parse_decimal(var, std::env::var(var).ok(), default)
}

fn parse_i32(var: &str, raw: Option<String>, default: i32) -> Result<i32> {
    match raw {
        Some(value) => value
            .parse()
            .with_context(|| format!("{var} must be an integer")),
        None => Ok(default),
    }
}

fn parse_decimal(var: &str, raw: Option<String>, default: Decimal) -> Result<Decimal> {
    match raw {
        Some(value) => {
            let parsed: Decimal = value
                .parse()
                .with_context(|| format!("{var} must be a decimal number"))?;
            if parsed <= Decimal::ZERO {
                bail!("{var} must be positive");
            }
            Ok(parsed)
        }
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_override_keeps_default() {
        assert_eq!(parse_i32("RUN_POINTS", None, 1).unwrap(), 1);
        assert_eq!(
            parse_decimal("CAPTAIN_MULTIPLIER", None, Decimal::from(2)).unwrap(),
            Decimal::from(2)
        );
    }

    #[test]
    fn test_decimal_override_is_exact() {
        let parsed =
            parse_decimal("VICE_CAPTAIN_MULTIPLIER", Some("1.75".to_string()), Decimal::ONE)
                .unwrap();
        assert_eq!(parsed, Decimal::new(175, 2));
    }

    #[test]
    fn test_garbage_and_non_positive_overrides_rejected() {
        assert!(parse_i32("WICKET_POINTS", Some("lots".to_string()), 25).is_err());
        assert!(parse_decimal("CREDIT_CAP", Some("0".to_string()), Decimal::from(100)).is_err());
    }
}
