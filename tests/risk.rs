use lung_triage::scores::risk::{RiskScorer, RiskThresholds, RiskTier, score};
use lung_triage::symptoms::{Symptom, SymptomSet};

fn first_n(n: usize) -> SymptomSet {
    Symptom::ALL.into_iter().take(n).collect()
}

#[test]
fn score_counts_present_symptoms() {
    for k in 0..=10 {
        assert_eq!(score(first_n(k)).score, k);
    }
}

#[test]
fn tier_boundaries() {
    assert_eq!(score(first_n(0)).tier, RiskTier::Low);
    assert_eq!(score(first_n(1)).tier, RiskTier::Moderate);
    assert_eq!(score(first_n(2)).tier, RiskTier::Moderate);
    assert_eq!(score(first_n(3)).tier, RiskTier::High);
    assert_eq!(score(first_n(10)).tier, RiskTier::High);
}

#[test]
fn tier_depends_on_count_only() {
    let a = SymptomSet::new()
        .with(Symptom::Fatigue)
        .with(Symptom::Hoarseness);
    let b = SymptomSet::new()
        .with(Symptom::CoughingUpBlood)
        .with(Symptom::SwellingInNeckOrFace);
    let ra = score(a);
    let rb = score(b);
    assert_eq!(ra.tier, rb.tier);
    assert_eq!(ra.recommendations, rb.recommendations);
}

#[test]
fn recommendations_non_empty_and_tier_specific() {
    let low = score(first_n(0));
    let moderate = score(first_n(1));
    let high = score(first_n(5));
    for r in [&low, &moderate, &high] {
        assert!(!r.recommendations.is_empty());
    }
    assert_ne!(low.recommendations, moderate.recommendations);
    assert_ne!(moderate.recommendations, high.recommendations);
    assert_ne!(low.recommendations, high.recommendations);
}

#[test]
fn scoring_is_idempotent() {
    let set = SymptomSet::new()
        .with(Symptom::ChestPain)
        .with(Symptom::LossOfAppetite);
    assert_eq!(score(set), score(set));
}

#[test]
fn scenario_no_symptoms() {
    let r = score(SymptomSet::new());
    assert_eq!(r.score, 0);
    assert_eq!(r.tier, RiskTier::Low);
    assert_eq!(r.headline(), "Low Risk: No major symptoms detected.");
}

#[test]
fn scenario_cough_and_fatigue() {
    let r = score(
        SymptomSet::new()
            .with(Symptom::PersistentCough)
            .with(Symptom::Fatigue),
    );
    assert_eq!(r.score, 2);
    assert_eq!(r.tier, RiskTier::Moderate);
}

#[test]
fn scenario_three_symptoms_is_high() {
    let r = score(
        SymptomSet::new()
            .with(Symptom::PersistentCough)
            .with(Symptom::ChestPain)
            .with(Symptom::CoughingUpBlood),
    );
    assert_eq!(r.score, 3);
    assert_eq!(r.tier, RiskTier::High);
}

#[test]
fn scenario_all_symptoms() {
    let r = score(SymptomSet::all());
    assert_eq!(r.score, 10);
    assert_eq!(r.tier, RiskTier::High);
}

#[test]
fn custom_thresholds() {
    let scorer = RiskScorer::new(RiskThresholds {
        moderate: 2,
        high: 5,
    });
    assert_eq!(scorer.score(first_n(1)).tier, RiskTier::Low);
    assert_eq!(scorer.score(first_n(2)).tier, RiskTier::Moderate);
    assert_eq!(scorer.score(first_n(4)).tier, RiskTier::Moderate);
    assert_eq!(scorer.score(first_n(5)).tier, RiskTier::High);
}

#[test]
fn invalid_thresholds_rejected() {
    assert!(RiskThresholds { moderate: 0, high: 3 }.validate().is_err());
    assert!(RiskThresholds { moderate: 3, high: 3 }.validate().is_err());
    assert!(RiskThresholds::default().validate().is_ok());
}
