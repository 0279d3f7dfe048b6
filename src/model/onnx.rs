//! ONNX backend on tract. Keras weights must be exported to ONNX with an
//! NHWC `[1, 350, 350, 3]` float input.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::info;
use tract_onnx::prelude::*;

use crate::model::backend::{Classifier, ModelLoader};
use crate::model::preprocess::ImageTensor;
use crate::model::{INPUT_SIZE, ModelVariant};

pub struct OnnxClassifier {
    plan: TypedRunnableModel<TypedModel>,
}

impl Classifier for OnnxClassifier {
    fn backend_name(&self) -> &str {
        "onnx"
    }

    fn forward(&self, input: &ImageTensor) -> Result<Vec<f32>> {
        let shape = input.shape();
        let data = input
            .as_slice()
            .context("input tensor is not contiguous")?;
        let tensor = Tensor::from_shape(&shape, data)?;
        let outputs = guard("inference", || self.plan.run(tvec!(tensor.into())))?;
        let first = outputs.first().context("model produced no outputs")?;
        let view = first.to_array_view::<f32>()?;
        Ok(view.iter().copied().collect())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OnnxLoader;

impl ModelLoader for OnnxLoader {
    fn load(&self, path: &Path, variant: ModelVariant) -> Result<Box<dyn Classifier>> {
        let side = INPUT_SIZE as usize;
        let model = guard("parsing", || tract_onnx::onnx().model_for_path(path))
            .with_context(|| format!("failed to parse ONNX model {}", path.display()))?;
        let plan = guard("optimization", || {
            model
                .with_input_fact(0, f32::fact([1, side, side, 3]).into())?
                .into_optimized()?
                .into_runnable()
        })?;
        info!(
            path = %path.display(),
            variant = variant.as_str(),
            "onnx_model_loaded"
        );
        Ok(Box::new(OnnxClassifier { plan }))
    }
}

/// tract unwraps on some malformed graphs; a panic here must not take the
/// process down with it.
fn guard<T>(phase: &str, f: impl FnOnce() -> TractResult<T>) -> Result<T> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => Err(anyhow!("tract panicked during {phase}: {}", panic_message(&*payload))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}
