//! Concepts - the labelled nodes of a mind map.
//!
//! A concept is created once, through a successful save, and never mutated
//! afterwards. Its bounding region is derived from the label at creation
//! time using a [`SizingPolicy`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    CHAR_WIDTH_RATIO, CONCEPT_PADDING, DEFAULT_FONT_SIZE, LINE_HEIGHT_RATIO, MIN_CONCEPT_SIZE,
};
use crate::types::{CanvasPoint, Rect, Size};

// ============================================================================
// Identity
// ============================================================================

/// Concept identifier - UUID so ids are never reused, even across documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConceptId(pub Uuid);

impl ConceptId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConceptId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ConceptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Label Text
// ============================================================================

/// Optional styling attached to a label.
///
/// Styling is opaque to the interaction core except for the font size, which
/// feeds the bounding region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size: f32,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub color: Option<String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            bold: false,
            color: None,
        }
    }
}

/// Label content with optional rich styling.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

impl RichText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
        }
    }

    /// True when there is no content at all. Whitespace counts as content.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.style = None;
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

// ============================================================================
// Sizing Policy
// ============================================================================

/// Fixed padding / minimum-size policy that turns a label into a bounding size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingPolicy {
    pub default_font_size: f32,
    pub char_width_ratio: f32,
    pub line_height_ratio: f32,
    pub padding: f32,
    pub min_size: Size,
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self {
            default_font_size: DEFAULT_FONT_SIZE,
            char_width_ratio: CHAR_WIDTH_RATIO,
            line_height_ratio: LINE_HEIGHT_RATIO,
            padding: CONCEPT_PADDING,
            min_size: MIN_CONCEPT_SIZE.into(),
        }
    }
}

impl SizingPolicy {
    /// Measure a label and apply padding and the minimum size.
    pub fn measure(&self, text: &RichText) -> Size {
        let font_size = text
            .style
            .as_ref()
            .map(|s| s.font_size)
            .unwrap_or(self.default_font_size);

        let (longest_line, line_count) = text
            .text
            .lines()
            .fold((0usize, 0usize), |(longest, count), line| {
                (longest.max(line.chars().count()), count + 1)
            });
        // A trailing newline still opens a line in an editor
        let line_count = line_count.max(1) + usize::from(text.text.ends_with('\n'));

        let text_width = longest_line as f32 * font_size * self.char_width_ratio;
        let text_height = line_count as f32 * font_size * self.line_height_ratio;

        Size::new(
            (text_width + 2.0 * self.padding).max(self.min_size.width),
            (text_height + 2.0 * self.padding).max(self.min_size.height),
        )
    }

    /// The bounding region a label would occupy when centered on `center`.
    pub fn frame_for(&self, text: &RichText, center: CanvasPoint) -> Rect {
        Rect::from_center(center, self.measure(text))
    }
}

// ============================================================================
// Concept
// ============================================================================

/// A node on the canvas.
///
/// Fields are private: a concept is immutable once created, and its label is
/// guaranteed non-empty by construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    id: ConceptId,
    text: RichText,
    center: CanvasPoint,
    frame: Rect,
    #[serde(default)]
    created_seq: u64,
}

impl Concept {
    /// Build a concept with the default sizing policy. Returns `None` for empty text.
    pub fn new(text: impl Into<RichText>, center: CanvasPoint) -> Option<Self> {
        Self::with_policy(text, center, &SizingPolicy::default())
    }

    /// Build a concept, deriving its frame from `policy`. Returns `None` for empty text.
    pub fn with_policy(
        text: impl Into<RichText>,
        center: CanvasPoint,
        policy: &SizingPolicy,
    ) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }
        let frame = policy.frame_for(&text, center);
        Some(Self {
            id: ConceptId::new(),
            text,
            center,
            frame,
            created_seq: 0,
        })
    }

    pub fn id(&self) -> ConceptId {
        self.id
    }

    pub fn text(&self) -> &RichText {
        &self.text
    }

    pub fn center(&self) -> CanvasPoint {
        self.center
    }

    /// Bounding region used for hit testing
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Position in the store's creation order (assigned on insertion)
    pub fn created_seq(&self) -> u64 {
        self.created_seq
    }

    pub fn contains(&self, point: CanvasPoint) -> bool {
        self.frame.contains(point)
    }

    pub(crate) fn set_created_seq(&mut self, seq: u64) {
        self.created_seq = seq;
    }
}
