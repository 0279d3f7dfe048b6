use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::json_writer;
use crate::pipeline::Stage;

pub struct Stage5Output;

impl Stage5Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Output {
    fn name(&self) -> &'static str {
        "stage5_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let report = json_writer::build_report(ctx)?;
        if ctx.write_json {
            json_writer::write_json(&ctx.output.json_path, &report)?;
            info!(path = %ctx.output.json_path.display(), "report_written");
        }
        ctx.report = Some(report);
        Ok(())
    }
}
