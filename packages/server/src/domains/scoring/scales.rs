//! Ordered categorical scales used by the scoring rules.
//!
//! Scale values come from the journal's intake vocabulary. A value that is
//! not on its scale (typo, legacy data, adversarial input) simply has no
//! position, and every rule treats a missing position as unknown, meaning no
//! adjustment. Scoring must never fail on bad input.

/// Political leaning, left to right, with explicit positions.
///
/// The right-of-center values sit across a gap from the center-left cluster:
/// adjacent labels within each cluster are one step apart, but liberal to
/// conservative is a three-step jump (the penalty threshold).
pub const POLITICS_POSITIONS: &[(&str, usize)] = &[
    ("progressive", 0),
    ("liberal", 1),
    ("moderate", 2),
    ("conservative", 4),
    ("traditional", 5),
];

/// Position of a political leaning. `None` when absent or unrecognized.
pub fn politics_position(value: Option<&str>) -> Option<usize> {
    let value = value?;
    POLITICS_POSITIONS
        .iter()
        .find(|(entry, _)| *entry == value)
        .map(|(_, pos)| *pos)
}

/// The user's self-reported activity level.
pub const ACTIVITY_SCALE: &[&str] = &["sedentary", "light", "moderate", "active", "very_active"];

/// The candidate's observed exercise habit. Positionally aligned with
/// `ACTIVITY_SCALE` so the two can be compared by index distance.
pub const EXERCISE_SCALE: &[&str] = &["never", "rarely", "sometimes", "regularly", "daily"];

/// Education, roughly by attainment.
pub const EDUCATION_SCALE: &[&str] = &[
    "high_school",
    "some_college",
    "associates",
    "trade_school",
    "bachelors",
    "masters",
    "doctorate",
];

/// Relationship goals that signal commitment.
pub const SERIOUS_GOALS: &[&str] = &["serious", "marriage"];

/// Relationship goals that signal keeping it light.
pub const CASUAL_GOALS: &[&str] = &["casual", "dating"];

/// Position of a value on an ordered scale. `None` when the value is absent
/// or not on the scale.
pub fn position(scale: &[&str], value: Option<&str>) -> Option<usize> {
    let value = value?;
    scale.iter().position(|entry| *entry == value)
}

/// Index distance between two values on (positionally aligned) scales.
/// `None` unless both sides have a position.
pub fn distance(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    Some(a?.abs_diff(b?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_on_scale() {
        assert_eq!(position(ACTIVITY_SCALE, Some("sedentary")), Some(0));
        assert_eq!(position(ACTIVITY_SCALE, Some("very_active")), Some(4));
        assert_eq!(position(ACTIVITY_SCALE, Some("marathoner")), None);
        assert_eq!(position(ACTIVITY_SCALE, None), None);
    }

    #[test]
    fn test_aligned_scales_have_equal_length() {
        assert_eq!(ACTIVITY_SCALE.len(), EXERCISE_SCALE.len());
    }

    #[test]
    fn test_politics_positions() {
        assert_eq!(politics_position(Some("progressive")), Some(0));
        assert_eq!(politics_position(Some("moderate")), Some(2));
        // Across the center gap: liberal to conservative is three steps
        assert_eq!(
            distance(
                politics_position(Some("liberal")),
                politics_position(Some("conservative"))
            ),
            Some(3)
        );
        assert_eq!(politics_position(Some("anarchist")), None);
        assert_eq!(politics_position(None), None);
    }

    #[test]
    fn test_distance() {
        let active = position(ACTIVITY_SCALE, Some("active"));
        let never = position(EXERCISE_SCALE, Some("never"));
        assert_eq!(distance(active, never), Some(3));
        assert_eq!(distance(active, None), None);
    }
}
