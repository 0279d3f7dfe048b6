use serde::Serialize;

use crate::model::preprocess::ImageTensor;
use crate::model::provider::ModelHandle;
use crate::model::{ModelError, ModelVariant};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub label: String,
    pub class_index: usize,
    pub confidence: f32,
    pub cancer_indicated: bool,
}

impl ClassificationResult {
    /// Picks the highest output; ties go to the lowest class index.
    pub fn from_outputs(outputs: &[f32], variant: ModelVariant) -> Result<Self, ModelError> {
        let names = variant.class_names();
        if outputs.len() != names.len() {
            return Err(ModelError::Inference(format!(
                "model returned {} outputs but the {} variant has {} classes",
                outputs.len(),
                variant.as_str(),
                names.len()
            )));
        }

        let mut best = 0usize;
        for (idx, &value) in outputs.iter().enumerate() {
            if value.is_nan() {
                return Err(ModelError::Inference("NaN in model output".to_string()));
            }
            if value > outputs[best] {
                best = idx;
            }
        }

        let label = names[best].to_string();
        Ok(Self {
            cancer_indicated: variant.indicates_cancer(&label),
            label,
            class_index: best,
            confidence: outputs[best],
        })
    }
}

pub fn predict(model: &ModelHandle, tensor: &ImageTensor) -> Result<ClassificationResult, ModelError> {
    let outputs = model
        .classifier()
        .forward(tensor)
        .map_err(|e| ModelError::Inference(format!("{e:#}")))?;
    ClassificationResult::from_outputs(&outputs, model.variant())
}
