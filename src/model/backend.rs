//! Pluggable inference backend.

use std::path::Path;

use anyhow::Result;

use crate::model::ModelVariant;
use crate::model::preprocess::ImageTensor;

/// A loaded network. `forward` takes `&self`; a forward pass never changes
/// the model.
pub trait Classifier: Send + Sync {
    fn backend_name(&self) -> &str;

    /// Runs one batch-of-one pass and returns the per-class output row.
    fn forward(&self, input: &ImageTensor) -> Result<Vec<f32>>;
}

pub trait ModelLoader: Send + Sync {
    fn load(&self, path: &Path, variant: ModelVariant) -> Result<Box<dyn Classifier>>;
}
