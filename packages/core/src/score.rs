//! Synthesizes the eight-label confidence distribution from two uniform
//! draws.
//!
//! The first draw selects the primary category, the second sets how sure the
//! mock pretends to be. Every other label receives a low jittered score
//! seeded from the first draw and the label itself, so the full distribution
//! is a pure function of the input hash.

use crate::label::{Category, RecycleClass, UnifiedLabel};
use serde::{Deserialize, Serialize};

/// One label with its synthesized confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ScoredLabel {
    pub label: UnifiedLabel,
    pub confidence: f64,
}

/// Floor for non-primary scores.
const JITTER_BASE: f64 = 0.15;
/// Width of the jitter band; non-primary scores stay at or below 0.25.
const JITTER_SPAN: f64 = 0.1;

/// Rounds to two decimals, half away from zero.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Maps the first draw onto a category: floor(r1 * 6), clamped to the valid
/// range so r1 = 1.0 still lands on the last category.
pub(crate) fn pick_category(r1: f64) -> Category {
    let idx = (r1 * Category::ALL.len() as f64).floor() as usize;
    Category::ALL[idx.min(Category::ALL.len() - 1)]
}

/// Primary-category confidence: 0.6 + 0.4 * r2, two decimals.
pub(crate) fn category_confidence(r2: f64) -> f64 {
    round2(0.6 + 0.4 * r2)
}

/// Recyclability confidence: 0.7 + 0.3 * (1 - r2), two decimals.
/// Anti-correlated with [`category_confidence`] through the shared draw.
pub(crate) fn recycle_confidence(r2: f64) -> f64 {
    round2(0.7 + 0.3 * (1.0 - r2))
}

/// Low score for a non-primary label. `k` seasons the draw per label so
/// distinct labels rarely collide on the same value.
fn jitter(r1: f64, k: u32) -> f64 {
    round2(JITTER_BASE + ((r1 * f64::from(k + 1)) % JITTER_SPAN))
}

fn category_jitter_seed(category: Category) -> u32 {
    u32::from(category.as_str().as_bytes()[0])
}

fn recycle_jitter_seed(class: RecycleClass) -> u32 {
    match class {
        RecycleClass::Recyclable => 1,
        RecycleClass::NonRecyclable => 2,
    }
}

/// Produces the unranked distribution: exactly one entry per
/// [`UnifiedLabel`], in declaration order. The primary category and its
/// recyclability class carry the high confidences, everything else is
/// jittered low, and every value is clamped to 1.0.
pub fn score_all(r1: f64, r2: f64) -> Vec<ScoredLabel> {
    let primary = pick_category(r1);
    let primary_class = primary.recycle_class();
    let category_conf = category_confidence(r2);
    let recycle_conf = recycle_confidence(r2);

    let mut scores = Vec::with_capacity(UnifiedLabel::ALL.len());
    for category in Category::ALL {
        let confidence = if category == primary {
            category_conf
        } else {
            jitter(r1, category_jitter_seed(category))
        };
        scores.push(ScoredLabel {
            label: category.into(),
            confidence,
        });
    }
    for class in RecycleClass::ALL {
        let confidence = if class == primary_class {
            recycle_conf
        } else {
            jitter(r1, recycle_jitter_seed(class))
        };
        scores.push(ScoredLabel {
            label: class.into(),
            confidence,
        });
    }
    for entry in &mut scores {
        entry.confidence = entry.confidence.min(1.0);
    }
    scores
}
