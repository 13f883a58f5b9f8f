//! Compatibility scoring rules.
//!
//! Each sub-score is an ordered list of independent `(name, rule)` pairs.
//! A rule inspects the user profile and the candidate and returns a point
//! delta to apply to the running total (which starts at the 50 midpoint).
//! A rule that doesn't apply (including any rule whose inputs are unknown)
//! returns 0. Rules never fail.

use crate::domains::candidates::Candidate;
use crate::domains::profiles::UserProfile;
use crate::domains::scoring::scales::{
    distance, politics_position, position, ACTIVITY_SCALE, CASUAL_GOALS, EDUCATION_SCALE,
    EXERCISE_SCALE, SERIOUS_GOALS,
};

/// A named scoring rule: inspects the pair, returns a point delta.
pub type Rule = (&'static str, fn(&UserProfile, &Candidate) -> i32);

/// Importance level (1-5) at which a mismatch starts to cost points.
const DEALBREAKER_IMPORTANCE: i16 = 4;

fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref()
}

// =============================================================================
// Values alignment: religion and politics
// =============================================================================

pub const VALUES_ALIGNMENT_RULES: &[Rule] = &[
    ("religion_match", religion_match),
    ("religion_mismatch", religion_mismatch),
    ("politics_alignment", politics_alignment),
];

/// Shared religion: +25
fn religion_match(user: &UserProfile, candidate: &Candidate) -> i32 {
    match (text(&user.religion), text(&candidate.their_religion)) {
        (Some(a), Some(b)) if a == b => 25,
        _ => 0,
    }
}

/// Different religion when faith matters a lot to the user: -20
fn religion_mismatch(user: &UserProfile, candidate: &Candidate) -> i32 {
    match (text(&user.religion), text(&candidate.their_religion)) {
        (Some(a), Some(b)) if a != b && user.faith_importance.unwrap_or(0) >= DEALBREAKER_IMPORTANCE => {
            -20
        }
        _ => 0,
    }
}

/// Political distance on the left-right scale: aligned +20, adjacent +10,
/// far apart (and politics matters a lot to the user) -20
fn politics_alignment(user: &UserProfile, candidate: &Candidate) -> i32 {
    let user_pos = politics_position(text(&user.politics));
    let candidate_pos = politics_position(text(&candidate.their_politics));

    match distance(user_pos, candidate_pos) {
        Some(0) => 20,
        Some(1) => 10,
        Some(d) if d >= 3 && user.politics_importance.unwrap_or(0) >= DEALBREAKER_IMPORTANCE => -20,
        _ => 0,
    }
}

// =============================================================================
// Future goals: relationship goal and kids
// =============================================================================

pub const FUTURE_GOALS_RULES: &[Rule] = &[
    ("goal_match", goal_match),
    ("goal_camp_clash", goal_camp_clash),
    ("kids_conflict", kids_conflict),
    ("kids_agreement", kids_agreement),
];

/// Identical relationship goal: +30
fn goal_match(user: &UserProfile, candidate: &Candidate) -> i32 {
    match (
        text(&user.relationship_goal),
        text(&candidate.their_relationship_goal),
    ) {
        (Some(a), Some(b)) if a == b => 30,
        _ => 0,
    }
}

/// One side wants serious, the other wants casual: -25.
/// Identical goals never clash (they can't sit in opposite camps).
fn goal_camp_clash(user: &UserProfile, candidate: &Candidate) -> i32 {
    let (Some(a), Some(b)) = (
        text(&user.relationship_goal),
        text(&candidate.their_relationship_goal),
    ) else {
        return 0;
    };

    let serious_casual = SERIOUS_GOALS.contains(&a) && CASUAL_GOALS.contains(&b);
    let casual_serious = CASUAL_GOALS.contains(&a) && SERIOUS_GOALS.contains(&b);
    if serious_casual || casual_serious {
        -25
    } else {
        0
    }
}

/// Hard kids conflict, symmetric: one side definitely doesn't want kids, the
/// other definitely does (or already has them): -30
fn kids_conflict(user: &UserProfile, candidate: &Candidate) -> i32 {
    let (Some(a), Some(b)) = (text(&user.kids_desire), text(&candidate.their_kids_desire)) else {
        return 0;
    };

    let wants = |v: &str| v == "definitely_yes" || v == "already_have";
    if (a == "definitely_no" && wants(b)) || (b == "definitely_no" && wants(a)) {
        -30
    } else {
        0
    }
}

/// Identical kids desire: +15
fn kids_agreement(user: &UserProfile, candidate: &Candidate) -> i32 {
    match (text(&user.kids_desire), text(&candidate.their_kids_desire)) {
        (Some(a), Some(b)) if a == b => 15,
        _ => 0,
    }
}

// =============================================================================
// Emotional compatibility: attachment styles
// =============================================================================

pub const EMOTIONAL_RULES: &[Rule] = &[
    ("secure_base", secure_base),
    ("anxious_avoidant_trap", anxious_avoidant_trap),
];

/// A secure user steadies any known attachment style: +20
fn secure_base(user: &UserProfile, candidate: &Candidate) -> i32 {
    let (Some(a), Some(b)) = (
        text(&user.attachment_style),
        text(&candidate.their_attachment_style),
    ) else {
        return 0;
    };

    if a == "secure" && matches!(b, "secure" | "anxious" | "avoidant") {
        20
    } else {
        0
    }
}

/// The anxious-avoidant pursue/withdraw pairing, either direction: -25
fn anxious_avoidant_trap(user: &UserProfile, candidate: &Candidate) -> i32 {
    let (Some(a), Some(b)) = (
        text(&user.attachment_style),
        text(&candidate.their_attachment_style),
    ) else {
        return 0;
    };

    if (a == "anxious" && b == "avoidant") || (a == "avoidant" && b == "anxious") {
        -25
    } else {
        0
    }
}

// =============================================================================
// Lifestyle compatibility: activity and education
// =============================================================================

pub const LIFESTYLE_RULES: &[Rule] = &[
    ("activity_alignment", activity_alignment),
    ("education_alignment", education_alignment),
];

/// Activity level vs exercise habit on aligned five-step scales:
/// same step +20, one apart +10, three or more apart -15
fn activity_alignment(user: &UserProfile, candidate: &Candidate) -> i32 {
    let user_pos = position(ACTIVITY_SCALE, text(&user.activity_level));
    let candidate_pos = position(EXERCISE_SCALE, text(&candidate.their_exercise_habit));

    match distance(user_pos, candidate_pos) {
        Some(0) => 20,
        Some(1) => 10,
        Some(d) if d >= 3 => -15,
        _ => 0,
    }
}

/// Education comparison, applied only when the user says education matters:
/// candidate at or above the user +10, two or more steps below -10
fn education_alignment(user: &UserProfile, candidate: &Candidate) -> i32 {
    if user.education_matters != Some(true) {
        return 0;
    }

    let (Some(user_pos), Some(candidate_pos)) = (
        position(EDUCATION_SCALE, text(&user.education_level)),
        position(EDUCATION_SCALE, text(&candidate.their_education_level)),
    ) else {
        return 0;
    };

    if candidate_pos >= user_pos {
        10
    } else if user_pos - candidate_pos >= 2 {
        -10
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::UserId;

    fn pair() -> (UserProfile, Candidate) {
        let user_id = UserId::new();
        (UserProfile::empty(user_id), Candidate::blank(user_id, "Sam"))
    }

    // -- values alignment ----------------------------------------------------

    #[test]
    fn test_religion_match_adds_25() {
        let (mut user, mut candidate) = pair();
        user.religion = Some("christian_catholic".into());
        candidate.their_religion = Some("christian_catholic".into());
        assert_eq!(religion_match(&user, &candidate), 25);
        assert_eq!(religion_mismatch(&user, &candidate), 0);
    }

    #[test]
    fn test_religion_mismatch_requires_high_importance() {
        let (mut user, mut candidate) = pair();
        user.religion = Some("christian_catholic".into());
        candidate.their_religion = Some("muslim".into());

        user.faith_importance = Some(3);
        assert_eq!(religion_mismatch(&user, &candidate), 0);

        user.faith_importance = Some(4);
        assert_eq!(religion_mismatch(&user, &candidate), -20);
    }

    #[test]
    fn test_religion_unknown_is_neutral() {
        let (user, mut candidate) = pair();
        candidate.their_religion = Some("muslim".into());
        assert_eq!(religion_match(&user, &candidate), 0);
        assert_eq!(religion_mismatch(&user, &candidate), 0);
    }

    #[test]
    fn test_politics_alignment_graded() {
        let (mut user, mut candidate) = pair();
        user.politics = Some("liberal".into());

        candidate.their_politics = Some("liberal".into());
        assert_eq!(politics_alignment(&user, &candidate), 20);

        candidate.their_politics = Some("moderate".into());
        assert_eq!(politics_alignment(&user, &candidate), 10);

        // Across the gap (distance 3+) costs points only when politics
        // matters a lot to the user
        candidate.their_politics = Some("conservative".into());
        user.politics_importance = Some(5);
        assert_eq!(politics_alignment(&user, &candidate), -20);
        user.politics_importance = Some(2);
        assert_eq!(politics_alignment(&user, &candidate), 0);
    }

    #[test]
    fn test_politics_distance_two_is_neutral() {
        let (mut user, mut candidate) = pair();
        user.politics = Some("moderate".into());
        user.politics_importance = Some(5);
        candidate.their_politics = Some("conservative".into());
        assert_eq!(politics_alignment(&user, &candidate), 0);
    }

    #[test]
    fn test_politics_unknown_value_is_neutral() {
        let (mut user, mut candidate) = pair();
        user.politics = Some("liberal".into());
        user.politics_importance = Some(5);
        candidate.their_politics = Some("monarchist".into());
        assert_eq!(politics_alignment(&user, &candidate), 0);
    }

    // -- future goals --------------------------------------------------------

    #[test]
    fn test_goal_match_adds_30() {
        let (mut user, mut candidate) = pair();
        user.relationship_goal = Some("dating".into());
        candidate.their_relationship_goal = Some("dating".into());
        assert_eq!(goal_match(&user, &candidate), 30);
        assert_eq!(goal_camp_clash(&user, &candidate), 0);
    }

    #[test]
    fn test_goal_camp_clash_both_directions() {
        let (mut user, mut candidate) = pair();
        user.relationship_goal = Some("marriage".into());
        candidate.their_relationship_goal = Some("casual".into());
        assert_eq!(goal_camp_clash(&user, &candidate), -25);

        user.relationship_goal = Some("dating".into());
        candidate.their_relationship_goal = Some("serious".into());
        assert_eq!(goal_camp_clash(&user, &candidate), -25);
    }

    #[test]
    fn test_same_camp_not_identical_is_neutral() {
        let (mut user, mut candidate) = pair();
        user.relationship_goal = Some("serious".into());
        candidate.their_relationship_goal = Some("marriage".into());
        assert_eq!(goal_match(&user, &candidate), 0);
        assert_eq!(goal_camp_clash(&user, &candidate), 0);
    }

    #[test]
    fn test_goal_outside_camps_is_neutral() {
        let (mut user, mut candidate) = pair();
        user.relationship_goal = Some("figuring_it_out".into());
        candidate.their_relationship_goal = Some("casual".into());
        assert_eq!(goal_camp_clash(&user, &candidate), 0);
    }

    #[test]
    fn test_kids_conflict_is_symmetric() {
        let (mut user, mut candidate) = pair();
        user.kids_desire = Some("definitely_no".into());
        candidate.their_kids_desire = Some("definitely_yes".into());
        assert_eq!(kids_conflict(&user, &candidate), -30);

        user.kids_desire = Some("already_have".into());
        candidate.their_kids_desire = Some("definitely_no".into());
        assert_eq!(kids_conflict(&user, &candidate), -30);
    }

    #[test]
    fn test_kids_agreement_adds_15() {
        let (mut user, mut candidate) = pair();
        user.kids_desire = Some("open".into());
        candidate.their_kids_desire = Some("open".into());
        assert_eq!(kids_agreement(&user, &candidate), 15);
        assert_eq!(kids_conflict(&user, &candidate), 0);
    }

    #[test]
    fn test_kids_soft_difference_is_neutral() {
        let (mut user, mut candidate) = pair();
        user.kids_desire = Some("open".into());
        candidate.their_kids_desire = Some("definitely_yes".into());
        assert_eq!(kids_conflict(&user, &candidate), 0);
        assert_eq!(kids_agreement(&user, &candidate), 0);
    }

    // -- emotional compatibility ---------------------------------------------

    #[test]
    fn test_secure_base_covers_known_styles() {
        let (mut user, mut candidate) = pair();
        user.attachment_style = Some("secure".into());

        for style in ["secure", "anxious", "avoidant"] {
            candidate.their_attachment_style = Some(style.into());
            assert_eq!(secure_base(&user, &candidate), 20, "style {}", style);
        }

        candidate.their_attachment_style = Some("disorganized".into());
        assert_eq!(secure_base(&user, &candidate), 0);
    }

    #[test]
    fn test_secure_candidate_alone_is_not_enough() {
        let (mut user, mut candidate) = pair();
        user.attachment_style = Some("anxious".into());
        candidate.their_attachment_style = Some("secure".into());
        assert_eq!(secure_base(&user, &candidate), 0);
    }

    #[test]
    fn test_anxious_avoidant_trap_both_directions() {
        let (mut user, mut candidate) = pair();
        user.attachment_style = Some("anxious".into());
        candidate.their_attachment_style = Some("avoidant".into());
        assert_eq!(anxious_avoidant_trap(&user, &candidate), -25);

        user.attachment_style = Some("avoidant".into());
        candidate.their_attachment_style = Some("anxious".into());
        assert_eq!(anxious_avoidant_trap(&user, &candidate), -25);

        user.attachment_style = Some("anxious".into());
        candidate.their_attachment_style = Some("anxious".into());
        assert_eq!(anxious_avoidant_trap(&user, &candidate), 0);
    }

    // -- lifestyle compatibility ---------------------------------------------

    #[test]
    fn test_activity_alignment_graded() {
        let (mut user, mut candidate) = pair();
        user.activity_level = Some("active".into());

        candidate.their_exercise_habit = Some("regularly".into());
        assert_eq!(activity_alignment(&user, &candidate), 20);

        candidate.their_exercise_habit = Some("daily".into());
        assert_eq!(activity_alignment(&user, &candidate), 10);

        candidate.their_exercise_habit = Some("rarely".into());
        assert_eq!(activity_alignment(&user, &candidate), 0);

        candidate.their_exercise_habit = Some("never".into());
        assert_eq!(activity_alignment(&user, &candidate), -15);
    }

    #[test]
    fn test_education_gated_by_matters_flag() {
        let (mut user, mut candidate) = pair();
        user.education_level = Some("masters".into());
        candidate.their_education_level = Some("doctorate".into());

        assert_eq!(education_alignment(&user, &candidate), 0);

        user.education_matters = Some(true);
        assert_eq!(education_alignment(&user, &candidate), 10);
    }

    #[test]
    fn test_education_two_steps_below_penalized() {
        let (mut user, mut candidate) = pair();
        user.education_matters = Some(true);
        user.education_level = Some("bachelors".into());

        candidate.their_education_level = Some("associates".into());
        assert_eq!(education_alignment(&user, &candidate), -10);

        // One step below is neutral
        candidate.their_education_level = Some("trade_school".into());
        assert_eq!(education_alignment(&user, &candidate), 0);
    }
}
