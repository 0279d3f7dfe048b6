use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::model::PredictionOutcome;
use crate::symptoms::SYMPTOM_COUNT;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let symptoms = ctx.symptoms.as_ref().context("symptom set missing")?;
    let assessment = ctx
        .assessment
        .as_ref()
        .context("risk assessment missing")?;

    let mut out = String::new();
    out.push_str(&format!("lung-triage v{}\n", ctx.tool_version));

    let present: Vec<&str> = symptoms.present().map(|s| s.label()).collect();
    if present.is_empty() {
        out.push_str(&format!("Symptoms: 0 of {}\n", SYMPTOM_COUNT));
    } else {
        out.push_str(&format!(
            "Symptoms: {} of {} ({})\n",
            present.len(),
            SYMPTOM_COUNT,
            present.join(", ")
        ));
    }

    out.push_str(&format!(
        "Risk: {} (score {})\n",
        assessment.tier.as_str(),
        assessment.score
    ));
    out.push_str(assessment.headline());
    out.push('\n');
    out.push_str(assessment.tier.advice());
    out.push('\n');
    out.push_str("Recommendations:\n");
    for rec in assessment.recommendations {
        out.push_str(&format!("- {}\n", rec));
    }

    match &ctx.prediction {
        PredictionOutcome::NotRequested => {
            if ctx.upload.is_some() {
                out.push_str("Prediction: image ready, re-run with --predict to analyze the X-ray\n");
            }
        }
        PredictionOutcome::Classified(result) => {
            out.push_str(&format!(
                "Prediction: {} (confidence {:.2})\n",
                result.label, result.confidence
            ));
            if result.cancer_indicated {
                out.push_str("Result: Cancer Detected\n");
            } else {
                out.push_str("Result: No Cancer Detected\n");
            }
        }
        other => {
            if let Some(message) = other.message() {
                out.push_str(&format!("Prediction: {}\n", message));
            }
        }
    }

    Ok(out)
}
