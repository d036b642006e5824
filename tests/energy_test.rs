#[macro_use]
extern crate assert_float_eq;

use meal_planner_rs::models::{ActivityLevel, BiometricProfile, Gender, WeightGoal};
use meal_planner_rs::planner::{
    activity_multiplier, basal_metabolic_rate, estimate, split_budget, GOAL_ADJUSTMENT,
    SEDENTARY_MULT,
};

fn make_profile(age: i64, weight: f64, height: f64, gender: Gender, level: &str) -> BiometricProfile {
    BiometricProfile {
        age,
        weight,
        height,
        gender,
        activity_level: ActivityLevel::parse(level),
    }
}

fn sample_profiles() -> Vec<BiometricProfile> {
    let mut profiles = Vec::new();
    for gender in [Gender::Male, Gender::Female] {
        for level in ActivityLevel::KNOWN_NAMES {
            profiles.push(make_profile(25, 60.0, 165.0, gender, level));
            profiles.push(make_profile(58, 92.5, 181.0, gender, level));
        }
    }
    profiles
}

#[test]
fn test_reference_male_sedentary() {
    let profile = make_profile(30, 70.0, 175.0, Gender::Male, "sedentary");

    assert_float_absolute_eq!(basal_metabolic_rate(&profile), 1701.845, 1e-9);

    let daily = estimate(&profile, WeightGoal::Maintain);
    assert_float_absolute_eq!(daily, 2042.214, 1e-9);

    let budget = split_budget(daily);
    assert_float_absolute_eq!(budget.breakfast_calories, 449.28708, 1e-6);
    assert_eq!(budget.breakfast_bucket, 450);
    assert_eq!(budget.lunch_bucket, 650);
    assert_eq!(budget.dinner_bucket, 700);
}

#[test]
fn test_maintain_is_unadjusted() {
    for profile in sample_profiles() {
        let expected = basal_metabolic_rate(&profile) * activity_multiplier(&profile.activity_level);
        assert_eq!(estimate(&profile, WeightGoal::Maintain), expected);
    }
}

#[test]
fn test_loss_and_gain_shift_by_200() {
    for profile in sample_profiles() {
        let maintain = estimate(&profile, WeightGoal::Maintain);
        assert_float_absolute_eq!(
            estimate(&profile, WeightGoal::Loss),
            maintain - GOAL_ADJUSTMENT,
            1e-9
        );
        assert_float_absolute_eq!(
            estimate(&profile, WeightGoal::Gain),
            maintain + GOAL_ADJUSTMENT,
            1e-9
        );
    }
}

#[test]
fn test_unrecognized_goal_means_maintain() {
    let profile = make_profile(40, 80.0, 180.0, Gender::Female, "active");
    for raw in ["maintain", "bulk", "Loss", ""] {
        assert_eq!(
            estimate(&profile, WeightGoal::parse(raw)),
            estimate(&profile, WeightGoal::Maintain)
        );
    }
}

#[test]
fn test_unrecognized_activity_uses_sedentary_multiplier() {
    assert_eq!(activity_multiplier(&ActivityLevel::parse("extreme")), SEDENTARY_MULT);
    assert_eq!(activity_multiplier(&ActivityLevel::parse("SEDENTARY")), 1.2);
    assert_eq!(activity_multiplier(&ActivityLevel::parse("Very_Active")), 1.9);

    let extreme = make_profile(30, 70.0, 175.0, Gender::Male, "extreme");
    let sedentary = make_profile(30, 70.0, 175.0, Gender::Male, "sedentary");
    assert_eq!(
        estimate(&extreme, WeightGoal::Maintain),
        estimate(&sedentary, WeightGoal::Maintain)
    );
}

#[test]
fn test_gender_spellings() {
    assert!("MALE".parse::<Gender>().is_ok());
    assert!("fEmAlE".parse::<Gender>().is_ok());
    assert!("other".parse::<Gender>().is_err());
    assert!("".parse::<Gender>().is_err());
}
