use binwise::ClassificationResult;

use super::{BackendMode, BackendResult, ModelBackend};

/// In-process backend running the deterministic mock classifier. Never
/// fails.
#[derive(Debug, Clone, Default)]
pub struct MockModel;

impl MockModel {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ModelBackend for MockModel {
    fn mode(&self) -> BackendMode {
        BackendMode::Mock
    }

    async fn classify(&self, image: &str) -> BackendResult<ClassificationResult> {
        Ok(binwise::classify(image))
    }
}
