//! Deterministic mock waste classification.
//!
//! Maps arbitrary image data (a data-URI string) to a reproducible ranked
//! label distribution without running any model: the input is hashed, the
//! hash is expanded into two uniform deviates, and those drive synthetic
//! confidences for all eight labels. Same input, same result, always.

pub mod classify;
pub mod hash;
pub mod label;
pub mod rng;
pub mod score;
pub mod tip;

pub use classify::{
    CategoryPrediction, ClassificationResult, ModelKind, Prediction, RecyclePrediction, classify,
    predict,
};
pub use label::{Category, RecycleClass, UnifiedLabel};
pub use score::ScoredLabel;
