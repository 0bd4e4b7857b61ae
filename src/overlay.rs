//! Text-edit overlay controller.
//!
//! There is one overlay per canvas, reused for every naming session. `show`
//! starts a session and `dismiss` ends it. After `dismiss` nothing from the
//! previous session is observable: no text, no editability, and a frame that
//! is no longer centered where the session began.

use tracing::trace;

use crate::concept::RichText;
use crate::constants::{OVERLAY_PARKED_CENTER, OVERLAY_SIZE};
use crate::types::{CanvasPoint, Rect, Size};

#[derive(Clone, Debug)]
pub struct TextEditOverlay {
    visible: bool,
    editable: bool,
    text: RichText,
    frame: Rect,
    size: Size,
    last_shown_at: Option<CanvasPoint>,
}

impl Default for TextEditOverlay {
    fn default() -> Self {
        Self::new(OVERLAY_SIZE.into())
    }
}

impl TextEditOverlay {
    /// A hidden, parked overlay whose frame is `size` while shown.
    pub fn new(size: Size) -> Self {
        Self {
            visible: false,
            editable: false,
            text: RichText::default(),
            frame: Rect::from_center(OVERLAY_PARKED_CENTER.into(), size),
            size,
            last_shown_at: None,
        }
    }

    /// Start a session centered on `point` with empty content.
    ///
    /// Calling this while already shown re-centers and clears.
    pub fn show(&mut self, point: CanvasPoint) {
        self.visible = true;
        self.editable = true;
        self.text.clear();
        self.frame = Rect::from_center(point, self.size);
        self.last_shown_at = Some(point);
        trace!(x = point.x, y = point.y, "Overlay shown");
    }

    /// End the session: hide, lock, clear and park off-canvas.
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.editable = false;
        self.text.clear();
        self.frame = Rect::from_center(self.parked_center(), self.size);
        trace!("Overlay dismissed");
    }

    /// Off-canvas center that never coincides with the last `show` point.
    fn parked_center(&self) -> CanvasPoint {
        let parked: CanvasPoint = OVERLAY_PARKED_CENTER.into();
        match self.last_shown_at {
            Some(last) if last == parked => CanvasPoint::new(parked.x - self.size.width, parked.y),
            _ => parked,
        }
    }

    pub fn current_text(&self) -> &RichText {
        &self.text
    }

    /// Replace the content, as when the host text view reports its buffer.
    /// Ignored while not editable.
    pub fn set_text(&mut self, text: impl Into<RichText>) -> bool {
        if !self.editable {
            return false;
        }
        self.text = text.into();
        true
    }

    /// Append typed text. Ignored while not editable.
    pub fn insert_text(&mut self, input: &str) -> bool {
        if !self.editable {
            return false;
        }
        self.text.text.push_str(input);
        true
    }

    /// Remove the last character. Ignored while not editable.
    pub fn delete_backward(&mut self) -> bool {
        if !self.editable {
            return false;
        }
        self.text.text.pop().is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn center(&self) -> CanvasPoint {
        self.frame.center()
    }

    /// True while shown and `point` lies on the overlay frame.
    pub fn hit(&self, point: CanvasPoint) -> bool {
        self.visible && self.frame.contains(point)
    }
}
