use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::model::PredictionOutcome;
use crate::schema::v1::{
    ImageSection, PredictionSection, RiskSection, SymptomEntry, TriageReportV1,
};
use crate::symptoms::Symptom;

pub fn build_report(ctx: &Ctx) -> Result<TriageReportV1> {
    let set = ctx.symptoms.as_ref().context("symptom set missing")?;
    let assessment = ctx
        .assessment
        .as_ref()
        .context("risk assessment missing")?;

    let symptoms = Symptom::ALL
        .iter()
        .map(|s| SymptomEntry {
            id: s.id().to_string(),
            label: s.label().to_string(),
            present: set.is_present(*s),
        })
        .collect::<Vec<_>>();

    let risk = RiskSection {
        score: assessment.score,
        tier: assessment.tier.as_str().to_string(),
        headline: assessment.tier.headline().to_string(),
        advice: assessment.tier.advice().to_string(),
        recommendations: assessment
            .recommendations
            .iter()
            .map(|r| r.to_string())
            .collect(),
    };

    let image = ctx.upload.as_ref().map(|u| ImageSection {
        file_name: u.file_name.clone(),
        bytes: u.bytes.len() as u64,
    });

    let classified = match &ctx.prediction {
        PredictionOutcome::Classified(result) => Some(result),
        _ => None,
    };
    let prediction = PredictionSection {
        status: ctx.prediction.status().to_string(),
        enabled: ctx.prediction.prediction_enabled(),
        variant: ctx.config.model.variant.as_str().to_string(),
        label: classified.map(|r| r.label.clone()),
        class_index: classified.map(|r| r.class_index),
        confidence: classified.map(|r| r.confidence),
        cancer_indicated: classified.map(|r| r.cancer_indicated),
        message: ctx.prediction.message().map(str::to_string),
    };

    Ok(TriageReportV1 {
        tool: "lung-triage".to_string(),
        version: ctx.tool_version.clone(),
        schema_version: "v1".to_string(),
        symptoms,
        risk,
        image,
        prediction,
        warnings: ctx.warnings.clone(),
    })
}

pub fn write_json(path: &Path, report: &TriageReportV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
