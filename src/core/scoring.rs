use crate::models::{NeedWeights, Urgency};

/// Calculate the need score for a victim using the default weights
///
/// Scoring formula:
/// score = (
///     urgency_weight * (1 / max(income, 1)) * 10000   # High=3, Medium=2, Low=1
///     + homeless_bonus                                # 1.0 when has_home is false
///     + amount_needed / 10000                         # Larger requests rank higher
/// )
///
/// The result is rounded to 3 decimal places.
pub fn calculate_need_score(urgency: &str, income: i64, has_home: bool, amount_needed: i64) -> f64 {
    calculate_need_score_with(&NeedWeights::default(), urgency, income, has_home, amount_needed)
}

/// Calculate the need score with explicit weights
pub fn calculate_need_score_with(
    weights: &NeedWeights,
    urgency: &str,
    income: i64,
    has_home: bool,
    amount_needed: i64,
) -> f64 {
    let urgency_weight = weights.urgency_weight(Urgency::from_label(urgency));
    let income_factor = calculate_income_factor(income);
    let asset_bonus = if has_home { 0.0 } else { weights.homeless_bonus };
    let money_factor = amount_needed as f64 / weights.amount_divisor;

    let score = urgency_weight * income_factor * weights.income_scale + asset_bonus + money_factor;

    round_to_millis(score)
}

/// Inverse income, floored at an income of 1.
///
/// Zero and negative incomes all clamp to a factor of 1.0.
#[inline]
fn calculate_income_factor(income: i64) -> f64 {
    1.0 / income.max(1) as f64
}

/// Round half away from zero to 3 decimal places
#[inline]
fn round_to_millis(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_need_score_reference() {
        // 3 * (1/1000) * 10000 + 1 + 200/10000
        assert_eq!(calculate_need_score("High", 1000, false, 200), 31.02);
    }

    #[test]
    fn test_income_factor_clamp() {
        assert_eq!(calculate_income_factor(0), 1.0);
        assert_eq!(calculate_income_factor(-500), 1.0);
        assert_eq!(calculate_income_factor(1), 1.0);
        assert_eq!(calculate_income_factor(4), 0.25);
    }

    #[test]
    fn test_negative_income_matches_unit_income() {
        let negative = calculate_need_score("Low", -500, true, 0);
        let unit = calculate_need_score("Low", 1, true, 0);
        assert_eq!(negative, unit);
        assert_eq!(negative, 10000.0);
    }

    #[test]
    fn test_homeless_bonus() {
        let homeless = calculate_need_score("Low", 10000, false, 0);
        let housed = calculate_need_score("Low", 10000, true, 0);
        assert_eq!(homeless, 2.0);
        assert_eq!(housed, 1.0);
    }

    #[test]
    fn test_unknown_urgency_weighs_as_low() {
        let unknown = calculate_need_score("Critical", 500, true, 100);
        let low = calculate_need_score("Low", 500, true, 100);
        assert_eq!(unknown, low);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_to_millis(1.23449), 1.234);
        assert_eq!(round_to_millis(1.2346), 1.235);
        // income 3 gives 3333.333...
        assert_eq!(calculate_need_score("Low", 3, true, 0), 3333.333);
    }

    #[test]
    fn test_custom_weights() {
        let weights = NeedWeights {
            high: 5.0,
            homeless_bonus: 2.0,
            ..NeedWeights::default()
        };
        assert_eq!(calculate_need_score_with(&weights, "High", 10000, false, 0), 7.0);
    }
}
