//! Boundary to the pretrained X-ray classifier: artifact caching, image
//! preprocessing, and a single forward pass per predict action.

pub mod backend;
pub mod fetch;
#[cfg(feature = "onnx")]
pub mod onnx;
#[cfg(not(feature = "onnx"))]
pub mod onnx {
    use std::path::Path;

    use anyhow::{Result, bail};

    use crate::model::ModelVariant;
    use crate::model::backend::{Classifier, ModelLoader};

    #[derive(Debug, Default, Clone, Copy)]
    pub struct OnnxLoader;

    impl ModelLoader for OnnxLoader {
        fn load(&self, _path: &Path, _variant: ModelVariant) -> Result<Box<dyn Classifier>> {
            bail!("ONNX support not enabled. Rebuild with --features onnx");
        }
    }
}
pub mod predict;
pub mod preprocess;
pub mod provider;

use std::path::PathBuf;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use backend::{Classifier, ModelLoader};
pub use fetch::{ArtifactFetcher, HttpFetcher};
pub use predict::{ClassificationResult, predict};
pub use preprocess::{ImageTensor, preprocess};
pub use provider::{ModelHandle, ModelProvider};

pub const INPUT_SIZE: u32 = 350;
pub const DEFAULT_MODEL_PATH: &str = "models/lung_cancer_xception.onnx";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("invalid image: {0}")]
    InvalidImage(String),
    #[error("inference failed: {0}")]
    Inference(String),
}

impl ModelError {
    pub fn user_message(&self) -> String {
        match self {
            ModelError::ModelUnavailable(reason) => {
                format!("Prediction unavailable: the model could not be loaded ({reason}).")
            }
            ModelError::InvalidImage(reason) => {
                format!("Error processing image: {reason}")
            }
            ModelError::Inference(reason) => {
                format!("Prediction failed: {reason}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// Xception convention, maps 0..=255 onto -1..=1.
    Symmetric,
    /// Maps 0..=255 onto 0..=1.
    UnitRange,
}

/// A class table paired with the preprocessing its weights were trained on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelVariant {
    #[default]
    Xception5,
    Staging4,
}

impl ModelVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelVariant::Xception5 => "xception5",
            ModelVariant::Staging4 => "staging4",
        }
    }

    pub fn class_names(self) -> &'static [&'static str] {
        match self {
            ModelVariant::Xception5 => &["No Cancer", "Stage 1", "Stage 2", "Stage 3", "Stage 4"],
            ModelVariant::Staging4 => &["Stage 1", "Stage 2", "Stage 3", "Stage 4"],
        }
    }

    pub fn normalization(self) -> Normalization {
        match self {
            ModelVariant::Xception5 => Normalization::Symmetric,
            ModelVariant::Staging4 => Normalization::UnitRange,
        }
    }

    pub fn resize_filter(self) -> FilterType {
        match self {
            ModelVariant::Xception5 => FilterType::CatmullRom,
            ModelVariant::Staging4 => FilterType::Nearest,
        }
    }

    pub fn indicates_cancer(self, label: &str) -> bool {
        match self {
            ModelVariant::Xception5 => label != "No Cancer",
            ModelVariant::Staging4 => matches!(label, "Stage 3" | "Stage 4"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub path: PathBuf,
    pub url: Option<String>,
    pub variant: ModelVariant,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MODEL_PATH),
            url: None,
            variant: ModelVariant::default(),
        }
    }
}

/// What happened to the predict action during one interaction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PredictionOutcome {
    #[default]
    NotRequested,
    /// The upload was refused at the boundary.
    Rejected { message: String },
    /// The model could not be provided; prediction stays disabled.
    Unavailable { message: String },
    Failed { message: String },
    Classified(ClassificationResult),
}

impl PredictionOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            PredictionOutcome::NotRequested => "not_requested",
            PredictionOutcome::Rejected { .. } => "rejected",
            PredictionOutcome::Unavailable { .. } => "unavailable",
            PredictionOutcome::Failed { .. } => "failed",
            PredictionOutcome::Classified(_) => "classified",
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            PredictionOutcome::Rejected { message }
            | PredictionOutcome::Unavailable { message }
            | PredictionOutcome::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn prediction_enabled(&self) -> bool {
        !matches!(self, PredictionOutcome::Unavailable { .. })
    }
}
