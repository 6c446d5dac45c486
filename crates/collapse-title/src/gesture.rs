use crate::CollapsingTitle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// Not ours; let the host handle it.
    Ignored,
    /// Part of a tap in progress.
    Consumed,
    /// A complete tap on the title text.
    Clicked,
}

/// Turns pointer events over a title into clicks.
///
/// A tap must both start and end inside the title's text rect; a cancel or a
/// release outside only resets the tracker.
#[derive(Clone, Copy, Debug, Default)]
pub struct TitleTap {
    pressed: bool,
}

impl TitleTap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the host should route this event to the title instead of its
    /// children.
    pub fn intercepts(title: &CollapsingTitle, action: PointerAction, x: f32, y: f32) -> bool {
        match action {
            PointerAction::Down | PointerAction::Up => title.is_in_rect(x, y),
            PointerAction::Move | PointerAction::Cancel => false,
        }
    }

    pub fn on_pointer(
        &mut self,
        title: &CollapsingTitle,
        action: PointerAction,
        x: f32,
        y: f32,
    ) -> TapOutcome {
        match action {
            PointerAction::Down => {
                self.pressed = title.is_in_rect(x, y);
                if self.pressed {
                    TapOutcome::Consumed
                } else {
                    TapOutcome::Ignored
                }
            }
            PointerAction::Move => {
                if self.pressed {
                    TapOutcome::Consumed
                } else {
                    TapOutcome::Ignored
                }
            }
            PointerAction::Up => {
                let was_pressed = std::mem::take(&mut self.pressed);
                if was_pressed && title.is_in_rect(x, y) {
                    log::debug!("title tapped at ({x}, {y})");
                    TapOutcome::Clicked
                } else {
                    TapOutcome::Ignored
                }
            }
            PointerAction::Cancel => {
                self.pressed = false;
                TapOutcome::Ignored
            }
        }
    }
}
