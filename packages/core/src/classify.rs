//! Ranked classification results and the public entry points.

use crate::hash;
use crate::label::{Category, RecycleClass};
use crate::rng;
use crate::score::{self, ScoredLabel};
use crate::tip;
use serde::{Deserialize, Serialize};

/// A full mock classification: the winning label, the ranked distribution
/// over all eight labels, and the disposal tip for the winner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ClassificationResult {
    pub top: ScoredLabel,
    pub scores: Vec<ScoredLabel>,
    pub tip: String,
}

/// Classifies image data (a data-URI string) deterministically.
///
/// Total over any input, the empty string included. `scores` holds exactly
/// one entry per [`crate::label::UnifiedLabel`], sorted by descending
/// confidence. The sort is stable, so exact ties keep declaration order:
/// materials first, then the recyclability classes. `top` is `scores[0]`.
pub fn classify(image_data: &str) -> ClassificationResult {
    let (r1, r2) = rng::draw_pair(hash::fnv1a(image_data));
    let mut scores = score::score_all(r1, r2);
    scores.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let top = scores[0].clone();
    let tip = tip::tip_for(top.label).to_string();
    ClassificationResult { top, scores, tip }
}

/// Which single-model preset to emulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Six material categories plus the derived recyclability class.
    Six,
    /// Recyclability only.
    Recycle,
}

/// Primary category with its confidence, as reported by the six-category
/// preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CategoryPrediction {
    pub label: Category,
    pub confidence: f64,
}

/// Recyclability class with its confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RecyclePrediction {
    pub label: RecycleClass,
    pub confidence: f64,
}

/// Narrow single-model output: the recyclability call, plus the category
/// call when the preset makes one. `category_prediction` is `None` for
/// [`ModelKind::Recycle`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub model_type: ModelKind,
    pub category_prediction: Option<CategoryPrediction>,
    pub recycle_prediction: RecyclePrediction,
    pub tip: String,
}

/// Runs one single-model preset over the same draws [`classify`] uses, so
/// both views of an input agree on the primary category.
pub fn predict(image_data: &str, kind: ModelKind) -> Prediction {
    let (r1, r2) = rng::draw_pair(hash::fnv1a(image_data));
    let category = score::pick_category(r1);
    let class = category.recycle_class();
    let recycle_prediction = RecyclePrediction {
        label: class,
        confidence: score::recycle_confidence(r2),
    };
    match kind {
        ModelKind::Recycle => Prediction {
            model_type: kind,
            category_prediction: None,
            recycle_prediction,
            tip: tip::tip_for(class.into()).to_string(),
        },
        ModelKind::Six => Prediction {
            model_type: kind,
            category_prediction: Some(CategoryPrediction {
                label: category,
                confidence: score::category_confidence(r2),
            }),
            recycle_prediction,
            tip: tip::tip_for(category.into()).to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::UnifiedLabel;

    fn confidences(result: &ClassificationResult) -> Vec<(UnifiedLabel, f64)> {
        result
            .scores
            .iter()
            .map(|s| (s.label, s.confidence))
            .collect()
    }

    #[test]
    fn golden_png_payload() {
        let result = classify("data:image/png;base64,AAAA");
        assert_eq!(result.top.label, UnifiedLabel::Recyclable);
        assert_eq!(result.top.confidence, 0.97);
        assert_eq!(
            result.tip,
            "Rinse recyclables to remove food residue before placing them in the bin."
        );
        assert_eq!(
            confidences(&result),
            vec![
                (UnifiedLabel::Recyclable, 0.97),
                (UnifiedLabel::Glass, 0.63),
                (UnifiedLabel::Cardboard, 0.21),
                (UnifiedLabel::Metal, 0.18),
                (UnifiedLabel::Paper, 0.18),
                (UnifiedLabel::Plastic, 0.18),
                (UnifiedLabel::Trash, 0.15),
                (UnifiedLabel::NonRecyclable, 0.15),
            ]
        );
    }

    #[test]
    fn golden_empty_string() {
        let result = classify("");
        assert_eq!(
            confidences(&result),
            vec![
                (UnifiedLabel::Recyclable, 0.97),
                (UnifiedLabel::Glass, 0.64),
                (UnifiedLabel::Cardboard, 0.25),
                (UnifiedLabel::Paper, 0.21),
                (UnifiedLabel::Plastic, 0.21),
                (UnifiedLabel::Trash, 0.2),
                (UnifiedLabel::Metal, 0.19),
                (UnifiedLabel::NonRecyclable, 0.17),
            ]
        );
    }

    #[test]
    fn golden_jpeg_payload() {
        let result = classify("data:image/jpeg;base64,/9j/4AAQ");
        assert_eq!(
            confidences(&result),
            vec![
                (UnifiedLabel::Recyclable, 0.85),
                (UnifiedLabel::Plastic, 0.81),
                (UnifiedLabel::Glass, 0.25),
                (UnifiedLabel::NonRecyclable, 0.22),
                (UnifiedLabel::Metal, 0.19),
                (UnifiedLabel::Paper, 0.17),
                (UnifiedLabel::Trash, 0.16),
                (UnifiedLabel::Cardboard, 0.15),
            ]
        );
    }

    #[test]
    fn golden_non_recyclable_top() {
        // One of the inputs whose winning label is a category with a trash
        // stream behind it.
        let result = classify("hello world");
        assert_eq!(result.top.label, UnifiedLabel::Trash);
        assert_eq!(result.top.confidence, 0.87);
        assert_eq!(
            result.tip,
            "If unsure, check your municipality’s waste guide to avoid contamination."
        );
        assert_eq!(
            confidences(&result),
            vec![
                (UnifiedLabel::Trash, 0.87),
                (UnifiedLabel::NonRecyclable, 0.8),
                (UnifiedLabel::Recyclable, 0.23),
                (UnifiedLabel::Cardboard, 0.2),
                (UnifiedLabel::Metal, 0.2),
                (UnifiedLabel::Paper, 0.17),
                (UnifiedLabel::Plastic, 0.17),
                (UnifiedLabel::Glass, 0.16),
            ]
        );
    }

    #[test]
    fn identical_input_identical_result() {
        let input = "data:image/png;base64,iVBORw0KGgo";
        let a = classify(input);
        let b = classify(input);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn single_character_flips_the_distribution() {
        let a = classify("data:image/png;base64,AAAA");
        let b = classify("data:image/png;base64,AAAB");
        assert_ne!(confidences(&a), confidences(&b));
    }

    #[test]
    fn scores_cover_every_label_exactly_once() {
        for input in ["", "a", "data:image/png;base64,AAAA", "hello world"] {
            let result = classify(input);
            assert_eq!(result.scores.len(), UnifiedLabel::ALL.len());
            for label in UnifiedLabel::ALL {
                assert_eq!(
                    result.scores.iter().filter(|s| s.label == label).count(),
                    1,
                    "label {label} in {input:?}"
                );
            }
        }
    }

    #[test]
    fn scores_are_sorted_descending_and_top_leads() {
        for i in 0..100u32 {
            let input = format!("data:image/png;base64,payload{i}");
            let result = classify(&input);
            assert_eq!(result.top, result.scores[0]);
            for pair in result.scores.windows(2) {
                assert!(
                    pair[0].confidence >= pair[1].confidence,
                    "{input}: {:?} before {:?}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn confidences_stay_in_unit_range() {
        for i in 0..100u32 {
            let result = classify(&format!("input-{i}"));
            for entry in &result.scores {
                assert!((0.0..=1.0).contains(&entry.confidence));
            }
        }
    }

    #[test]
    fn tip_matches_the_winner() {
        for i in 0..50u32 {
            let result = classify(&format!("data:image/webp;base64,{i}"));
            assert_eq!(result.tip, crate::tip::tip_for(result.top.label));
        }
    }

    #[test]
    fn dispersion_across_inputs() {
        // Different inputs should land on plenty of distinct winners.
        let mut tops = std::collections::HashSet::new();
        for i in 0..200u32 {
            tops.insert(classify(&format!("data:image/png;base64,img{i}")).top.label);
        }
        assert!(tops.len() >= 4, "only saw {tops:?}");
    }

    #[test]
    fn category_winners_agree_with_their_stream() {
        // When a material category wins, its recyclability class should
        // outscore the opposite class nearly always.
        let mut seen = 0u32;
        let mut agreed = 0u32;
        for i in 0..300u32 {
            let result = classify(&format!("data:image/png;base64,sample{i}"));
            let Some(category) = result.top.label.as_category() else {
                continue;
            };
            seen += 1;
            let conf = |label: UnifiedLabel| {
                result
                    .scores
                    .iter()
                    .find(|s| s.label == label)
                    .map(|s| s.confidence)
                    .unwrap()
            };
            let own = conf(category.recycle_class().into());
            let other = match category.recycle_class() {
                RecycleClass::Recyclable => conf(UnifiedLabel::NonRecyclable),
                RecycleClass::NonRecyclable => conf(UnifiedLabel::Recyclable),
            };
            if own >= other {
                agreed += 1;
            }
        }
        assert!(seen >= 50, "too few category winners: {seen}");
        assert!(
            f64::from(agreed) >= 0.9 * f64::from(seen),
            "{agreed} of {seen} agreed"
        );
    }

    #[test]
    fn long_inputs_collide_on_their_prefix() {
        let prefix: String = std::iter::repeat('q').take(2048).collect();
        let longer = format!("{prefix}-and-many-more-bytes");
        assert_eq!(classify(&prefix), classify(&longer));
    }

    #[test]
    fn predict_six_reports_both_calls() {
        let prediction = predict("data:image/png;base64,AAAA", ModelKind::Six);
        assert_eq!(prediction.model_type, ModelKind::Six);
        let category = prediction.category_prediction.as_ref().unwrap();
        assert_eq!(category.label, Category::Glass);
        assert_eq!(category.confidence, 0.63);
        assert_eq!(prediction.recycle_prediction.label, RecycleClass::Recyclable);
        assert_eq!(prediction.recycle_prediction.confidence, 0.97);
        assert_eq!(
            prediction.tip,
            "Remove caps and rinse glass containers before recycling."
        );
    }

    #[test]
    fn predict_recycle_omits_the_category() {
        let prediction = predict("data:image/png;base64,AAAA", ModelKind::Recycle);
        assert_eq!(prediction.model_type, ModelKind::Recycle);
        assert!(prediction.category_prediction.is_none());
        assert_eq!(prediction.recycle_prediction.label, RecycleClass::Recyclable);
        assert_eq!(prediction.recycle_prediction.confidence, 0.97);
        assert_eq!(
            prediction.tip,
            "Rinse recyclables to remove food residue before placing them in the bin."
        );
    }

    #[test]
    fn predict_and_classify_share_the_primary_category() {
        for i in 0..50u32 {
            let input = format!("data:image/png;base64,shared{i}");
            let prediction = predict(&input, ModelKind::Six);
            let category = prediction.category_prediction.unwrap().label;
            let result = classify(&input);
            let unified: UnifiedLabel = category.into();
            let in_result = result
                .scores
                .iter()
                .find(|s| s.label == unified)
                .map(|s| s.confidence)
                .unwrap();
            // The category's score in the ranked view is the same high
            // confidence the narrow view reports.
            assert!(in_result >= 0.6, "{input}: {unified} at {in_result}");
        }
    }

    #[test]
    fn serialized_shape_uses_wire_names() {
        let json = serde_json::to_value(classify("data:image/png;base64,AAAA")).unwrap();
        assert_eq!(json["top"]["label"], "recyclable");
        assert!(json["top"]["confidence"].is_number());
        assert_eq!(json["scores"].as_array().map(Vec::len), Some(8));
        assert!(json["tip"].is_string());

        let json = serde_json::to_value(predict("x", ModelKind::Recycle)).unwrap();
        assert!(json["categoryPrediction"].is_null());
        assert_eq!(json["modelType"], "recycle");
        assert!(json["recyclePrediction"]["label"].is_string());
    }
}
