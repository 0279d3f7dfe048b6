use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::model::backend::{Classifier, ModelLoader};
use crate::model::fetch::{ArtifactFetcher, HttpFetcher};
use crate::model::onnx::OnnxLoader;
use crate::model::{ModelConfig, ModelError, ModelVariant};

static SHARED: OnceCell<Arc<ModelProvider>> = OnceCell::new();

pub struct ModelHandle {
    variant: ModelVariant,
    classifier: Box<dyn Classifier>,
}

impl ModelHandle {
    pub fn new(variant: ModelVariant, classifier: Box<dyn Classifier>) -> Self {
        Self {
            variant,
            classifier,
        }
    }

    pub fn variant(&self) -> ModelVariant {
        self.variant
    }

    pub fn backend_name(&self) -> &str {
        self.classifier.backend_name()
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }
}

impl fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelHandle")
            .field("variant", &self.variant)
            .field("backend", &self.backend_name())
            .finish()
    }
}

/// Lazily provides the model handle. The first call fetches (if the artifact
/// is missing) and loads; its outcome, success or failure, is kept for the
/// provider's lifetime and later calls never retry.
pub struct ModelProvider {
    config: ModelConfig,
    fetcher: Box<dyn ArtifactFetcher>,
    loader: Box<dyn ModelLoader>,
    handle: OnceCell<Result<Arc<ModelHandle>, ModelError>>,
}

impl ModelProvider {
    pub fn new(
        config: ModelConfig,
        fetcher: Box<dyn ArtifactFetcher>,
        loader: Box<dyn ModelLoader>,
    ) -> Self {
        Self {
            config,
            fetcher,
            loader,
            handle: OnceCell::new(),
        }
    }

    pub fn with_defaults(config: ModelConfig) -> Result<Self> {
        Ok(Self::new(
            config,
            Box::new(HttpFetcher::new()?),
            Box::new(OnnxLoader),
        ))
    }

    /// Process-wide provider. The first caller's config wins.
    pub fn shared(config: &ModelConfig) -> Result<Arc<ModelProvider>> {
        SHARED
            .get_or_try_init(|| ModelProvider::with_defaults(config.clone()).map(Arc::new))
            .cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.handle.get().is_some()
    }

    pub fn ensure_model_available(&self) -> Result<Arc<ModelHandle>, ModelError> {
        self.handle.get_or_init(|| self.initialize()).clone()
    }

    fn initialize(&self) -> Result<Arc<ModelHandle>, ModelError> {
        let path = &self.config.path;
        if path.exists() {
            info!(path = %path.display(), "model_artifact_cached");
        } else {
            let url = self.config.url.as_deref().ok_or_else(|| {
                ModelError::ModelUnavailable(format!(
                    "{} not found and no download URL configured",
                    path.display()
                ))
            })?;
            warn!(path = %path.display(), url, "model not found locally, downloading");
            self.fetcher.fetch(url, path).map_err(|e| {
                warn!(error = %format!("{e:#}"), "model_download_failed");
                ModelError::ModelUnavailable(format!("failed to download model: {e:#}"))
            })?;
        }

        let classifier = self.loader.load(path, self.config.variant).map_err(|e| {
            warn!(error = %format!("{e:#}"), "model_load_failed");
            ModelError::ModelUnavailable(format!("error loading model: {e:#}"))
        })?;
        info!(
            variant = self.config.variant.as_str(),
            backend = classifier.backend_name(),
            "model_ready"
        );
        Ok(Arc::new(ModelHandle::new(self.config.variant, classifier)))
    }
}

impl fmt::Debug for ModelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelProvider")
            .field("config", &self.config)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
