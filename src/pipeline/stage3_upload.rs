use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::model::PredictionOutcome;
use crate::pipeline::Stage;
use crate::upload::Upload;

pub struct Stage3Upload;

impl Stage3Upload {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Upload {
    fn name(&self) -> &'static str {
        "stage3_upload"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let Some(path) = &ctx.image_path else {
            return Ok(());
        };
        match Upload::from_path(path) {
            Ok(upload) => {
                info!(
                    file = %upload.file_name,
                    bytes = upload.bytes.len() as u64,
                    "upload_accepted"
                );
                ctx.upload = Some(upload);
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "upload_rejected");
                ctx.prediction = PredictionOutcome::Rejected {
                    message: err.to_string(),
                };
            }
        }
        Ok(())
    }
}
