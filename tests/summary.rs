use lung_triage::config::Config;
use lung_triage::ctx::Ctx;
use lung_triage::io::summary::format_summary;
use lung_triage::model::{ClassificationResult, ModelVariant, PredictionOutcome};
use lung_triage::scores::risk::score;
use lung_triage::symptoms::{Symptom, SymptomSet};
use lung_triage::upload::Upload;

fn scored_ctx(set: SymptomSet) -> Ctx {
    let mut ctx = Ctx::new(
        Config::default(),
        std::path::PathBuf::from("out"),
        false,
        "0.0.0-test",
    );
    ctx.symptoms = Some(set);
    ctx.assessment = Some(score(set));
    ctx
}

#[test]
fn summary_format() {
    let ctx = scored_ctx(
        SymptomSet::new()
            .with(Symptom::PersistentCough)
            .with(Symptom::Fatigue),
    );
    let s = format_summary(&ctx).unwrap();
    assert!(s.contains("lung-triage v0.0.0-test"));
    assert!(s.contains("Symptoms: 2 of 10 (Persistent Cough, Fatigue)"));
    assert!(s.contains("Risk: Moderate (score 2)"));
    assert!(s.contains(
        "Moderate Risk: Monitor symptoms.\nYou have some symptoms associated with lung conditions."
    ));
    assert!(s.contains("- Keep track of symptoms."));
    assert!(!s.contains("Prediction:"));
}

#[test]
fn summary_no_symptoms() {
    let s = format_summary(&scored_ctx(SymptomSet::new())).unwrap();
    assert!(s.contains("Symptoms: 0 of 10\n"));
    assert!(s.contains("Risk: Low (score 0)"));
}

#[test]
fn summary_prediction_lines() {
    let mut ctx = scored_ctx(SymptomSet::new());
    ctx.prediction = PredictionOutcome::Classified(
        ClassificationResult::from_outputs(&[0.8, 0.1, 0.05, 0.05], ModelVariant::Staging4)
            .unwrap(),
    );
    let s = format_summary(&ctx).unwrap();
    assert!(s.contains("Prediction: Stage 1 (confidence 0.80)"));
    assert!(s.contains("Result: No Cancer Detected"));
}

#[test]
fn summary_upload_without_predict() {
    let mut ctx = scored_ctx(SymptomSet::new());
    ctx.upload = Some(Upload {
        file_name: "scan.jpg".to_string(),
        bytes: Vec::new(),
    });
    let s = format_summary(&ctx).unwrap();
    assert!(s.contains("re-run with --predict"));
}

#[test]
fn summary_failure_message() {
    let mut ctx = scored_ctx(SymptomSet::all());
    ctx.prediction = PredictionOutcome::Unavailable {
        message: "Prediction unavailable: offline".to_string(),
    };
    let s = format_summary(&ctx).unwrap();
    assert!(s.contains("Risk: High (score 10)"));
    assert!(s.contains("Prediction: Prediction unavailable: offline"));
}
