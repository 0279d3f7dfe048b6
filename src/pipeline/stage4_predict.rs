use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::model::{ModelProvider, PredictionOutcome, predict, preprocess};
use crate::pipeline::Stage;

pub struct Stage4Predict {
    provider: Arc<ModelProvider>,
}

impl Stage4Predict {
    pub fn new(provider: Arc<ModelProvider>) -> Self {
        Self { provider }
    }
}

impl Stage for Stage4Predict {
    fn name(&self) -> &'static str {
        "stage4_predict"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if !ctx.predict || matches!(ctx.prediction, PredictionOutcome::Rejected { .. }) {
            return Ok(());
        }
        let Some(upload) = &ctx.upload else {
            ctx.prediction = PredictionOutcome::Failed {
                message: "Upload an X-ray image (JPG, JPEG, PNG) to run a prediction.".to_string(),
            };
            return Ok(());
        };

        let handle = match self.provider.ensure_model_available() {
            Ok(handle) => handle,
            Err(err) => {
                warn!(error = %err, "prediction disabled");
                ctx.prediction = PredictionOutcome::Unavailable {
                    message: err.user_message(),
                };
                return Ok(());
            }
        };

        let outcome = preprocess(&upload.bytes, handle.variant())
            .and_then(|tensor| predict(&handle, &tensor));
        ctx.prediction = match outcome {
            Ok(result) => {
                info!(
                    label = %result.label,
                    confidence = result.confidence as f64,
                    "prediction_ready"
                );
                PredictionOutcome::Classified(result)
            }
            Err(err) => {
                warn!(error = %err, "prediction_failed");
                PredictionOutcome::Failed {
                    message: err.user_message(),
                }
            }
        };
        Ok(())
    }
}
