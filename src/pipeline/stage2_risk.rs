use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::RiskScorer;

pub struct Stage2Risk;

impl Stage2Risk {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Risk {
    fn name(&self) -> &'static str {
        "stage2_risk"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let symptoms = ctx.symptoms.context("symptom set missing")?;
        let assessment = RiskScorer::new(ctx.config.risk).score(symptoms);
        info!(
            score = assessment.score,
            tier = assessment.tier.as_str(),
            "risk_assessment_ready"
        );
        ctx.assessment = Some(assessment);
        Ok(())
    }
}
