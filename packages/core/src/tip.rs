//! Disposal tips keyed by label. Pure data; the strings are user-facing.

use crate::label::UnifiedLabel;

/// Returns the disposal tip for a label.
pub fn tip_for(label: UnifiedLabel) -> &'static str {
    match label {
        UnifiedLabel::Cardboard => "Flatten cardboard boxes to save space in the recycling bin.",
        UnifiedLabel::Glass => "Remove caps and rinse glass containers before recycling.",
        UnifiedLabel::Metal => "Clean metal cans and check local guidelines for aerosol cans.",
        UnifiedLabel::Paper => "Avoid recycling wet or heavily soiled paper.",
        UnifiedLabel::Plastic => "Check resin codes; not all plastics are accepted in every program.",
        UnifiedLabel::Trash => {
            "If unsure, check your municipality’s waste guide to avoid contamination."
        }
        UnifiedLabel::Recyclable => {
            "Rinse recyclables to remove food residue before placing them in the bin."
        }
        UnifiedLabel::NonRecyclable => {
            "Consider reusing or disposing of non-recyclables responsibly."
        }
    }
}
