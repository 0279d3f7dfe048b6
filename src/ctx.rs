use std::path::PathBuf;

use crate::config::Config;
use crate::model::PredictionOutcome;
use crate::schema::v1::TriageReportV1;
use crate::scores::RiskAssessment;
use crate::symptoms::SymptomSet;
use crate::upload::Upload;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
}

/// State of one interaction, filled in stage by stage.
#[derive(Debug)]
pub struct Ctx {
    pub config: Config,
    pub symptom_names: Vec<String>,
    pub symptoms_path: Option<PathBuf>,
    pub image_path: Option<PathBuf>,
    pub predict: bool,
    pub write_json: bool,
    pub output: OutputPaths,
    pub tool_version: String,
    pub warnings: Vec<String>,
    pub symptoms: Option<SymptomSet>,
    pub assessment: Option<RiskAssessment>,
    pub upload: Option<Upload>,
    pub prediction: PredictionOutcome,
    pub report: Option<TriageReportV1>,
}

impl Ctx {
    pub fn new(config: Config, out_dir: PathBuf, write_json: bool, tool_version: &str) -> Self {
        let json_path = out_dir.join("triage.json");
        Self {
            config,
            symptom_names: Vec::new(),
            symptoms_path: None,
            image_path: None,
            predict: false,
            write_json,
            output: OutputPaths {
                out_dir,
                json_path,
            },
            tool_version: tool_version.to_string(),
            warnings: Vec::new(),
            symptoms: None,
            assessment: None,
            upload: None,
            prediction: PredictionOutcome::NotRequested,
            report: None,
        }
    }
}
