use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::symptoms::{self, SymptomSet};

pub struct Stage1Symptoms;

impl Stage1Symptoms {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Symptoms {
    fn name(&self) -> &'static str {
        "stage1_symptoms"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let mut entries: Vec<(String, bool)> = ctx
            .symptom_names
            .iter()
            .map(|name| (name.clone(), true))
            .collect();

        if let Some(path) = &ctx.symptoms_path {
            let input = symptoms::load_symptom_file(path)?;
            entries.extend(input.entries);
            ctx.warnings.extend(input.warnings);
        }

        // A later `false` from the file does not clear a symptom ticked on
        // the command line.
        let (set, unknown) = SymptomSet::from_named_flags(entries);
        for name in unknown {
            warn!(symptom = %name, "unknown symptom ignored");
            ctx.warnings
                .push(format!("unknown symptom '{}' ignored", name));
        }

        info!(present = set.count(), "symptom_set_ready");
        ctx.symptoms = Some(set);
        Ok(())
    }
}
