use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub id: String,
    pub label: String,
    pub present: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSection {
    pub score: usize,
    pub tier: String,
    pub headline: String,
    pub advice: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSection {
    pub file_name: String,
    pub bytes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionSection {
    pub status: String,
    pub enabled: bool,
    pub variant: String,
    pub label: Option<String>,
    pub class_index: Option<usize>,
    pub confidence: Option<f32>,
    pub cancer_indicated: Option<bool>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub symptoms: Vec<SymptomEntry>,
    pub risk: RiskSection,
    pub image: Option<ImageSection>,
    pub prediction: PredictionSection,
    pub warnings: Vec<String>,
}
