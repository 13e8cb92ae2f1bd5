//! The closed label sets: six material categories, two recyclability
//! classes, and the eight-value union used in ranked results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A material category.
///
/// Declaration order is load-bearing: the scorer indexes into
/// [`Category::ALL`], and exact confidence ties in ranked output keep this
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cardboard,
    Glass,
    Metal,
    Paper,
    Plastic,
    Trash,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Cardboard,
        Category::Glass,
        Category::Metal,
        Category::Paper,
        Category::Plastic,
        Category::Trash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cardboard => "cardboard",
            Self::Glass => "glass",
            Self::Metal => "metal",
            Self::Paper => "paper",
            Self::Plastic => "plastic",
            Self::Trash => "trash",
        }
    }

    /// Fixed material-to-stream mapping: everything except trash is
    /// recyclable.
    pub fn recycle_class(&self) -> RecycleClass {
        match self {
            Self::Trash => RecycleClass::NonRecyclable,
            _ => RecycleClass::Recyclable,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which waste stream an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum RecycleClass {
    Recyclable,
    NonRecyclable,
}

impl RecycleClass {
    /// Both classes, in declaration order.
    pub const ALL: [RecycleClass; 2] = [RecycleClass::Recyclable, RecycleClass::NonRecyclable];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recyclable => "recyclable",
            Self::NonRecyclable => "non-recyclable",
        }
    }
}

impl fmt::Display for RecycleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Union of both label sets, used in ranked results where categories and
/// recyclability classes compete in one distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum UnifiedLabel {
    Cardboard,
    Glass,
    Metal,
    Paper,
    Plastic,
    Trash,
    Recyclable,
    NonRecyclable,
}

impl UnifiedLabel {
    /// All eight labels: categories first, then the recyclability classes.
    pub const ALL: [UnifiedLabel; 8] = [
        UnifiedLabel::Cardboard,
        UnifiedLabel::Glass,
        UnifiedLabel::Metal,
        UnifiedLabel::Paper,
        UnifiedLabel::Plastic,
        UnifiedLabel::Trash,
        UnifiedLabel::Recyclable,
        UnifiedLabel::NonRecyclable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cardboard => "cardboard",
            Self::Glass => "glass",
            Self::Metal => "metal",
            Self::Paper => "paper",
            Self::Plastic => "plastic",
            Self::Trash => "trash",
            Self::Recyclable => "recyclable",
            Self::NonRecyclable => "non-recyclable",
        }
    }

    /// The material category behind this label, if it is one.
    pub fn as_category(&self) -> Option<Category> {
        match self {
            Self::Cardboard => Some(Category::Cardboard),
            Self::Glass => Some(Category::Glass),
            Self::Metal => Some(Category::Metal),
            Self::Paper => Some(Category::Paper),
            Self::Plastic => Some(Category::Plastic),
            Self::Trash => Some(Category::Trash),
            Self::Recyclable | Self::NonRecyclable => None,
        }
    }
}

impl From<Category> for UnifiedLabel {
    fn from(category: Category) -> Self {
        match category {
            Category::Cardboard => Self::Cardboard,
            Category::Glass => Self::Glass,
            Category::Metal => Self::Metal,
            Category::Paper => Self::Paper,
            Category::Plastic => Self::Plastic,
            Category::Trash => Self::Trash,
        }
    }
}

impl From<RecycleClass> for UnifiedLabel {
    fn from(class: RecycleClass) -> Self {
        match class {
            RecycleClass::Recyclable => Self::Recyclable,
            RecycleClass::NonRecyclable => Self::NonRecyclable,
        }
    }
}

impl fmt::Display for UnifiedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
