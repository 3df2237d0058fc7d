use crate::{Position, position::AdjustedPosition};
use egui::{PointerButton, Response, Vec2};

/// Position of the map's center. Initially, the map follows `my_position` argument of
/// [`crate::Map::new()`]. Once the user drags the map it becomes "detached" and stays this way
/// until it is told to follow `my_position` again.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub(crate) enum Center {
    /// Centered at `my_position`.
    #[default]
    MyPosition,

    /// Centered at the exact position.
    Exact(AdjustedPosition),
}

impl Center {
    /// Follow the primary-button drag. Returns whether the center moved.
    pub(crate) fn recalculate_drag(
        &mut self,
        response: &Response,
        my_position: Position,
        zoom: f64,
    ) -> bool {
        if response.dragged_by(PointerButton::Primary) && response.drag_delta() != Vec2::ZERO {
            *self = Self::Exact(
                self.adjusted_position()
                    .unwrap_or_else(|| AdjustedPosition::new(my_position))
                    .shift(response.drag_delta(), zoom),
            );
            true
        } else {
            false
        }
    }

    fn adjusted_position(&self) -> Option<AdjustedPosition> {
        match self {
            Self::MyPosition => None,
            Self::Exact(position) => Some(position.to_owned()),
        }
    }

    /// Returns exact position if map is detached (i.e. not following `my_position`),
    /// `None` otherwise.
    pub(crate) fn detached(&self) -> Option<Position> {
        self.adjusted_position().map(|p| p.position())
    }

    /// Get the real position at the map's center.
    pub fn position(&self, my_position: Position) -> Position {
        self.detached().unwrap_or(my_position)
    }

    /// Shift the center by given number of pixels. This detaches the map.
    pub(crate) fn shift(self, my_position: Position, offset: Vec2, zoom: f64) -> Self {
        let position = self
            .adjusted_position()
            .unwrap_or_else(|| AdjustedPosition::new(my_position));
        Self::Exact(position.shift(offset, zoom))
    }

    /// Recalculate the position so that its pixel offset is zero. Needed before the zoom changes,
    /// since the offset is only meaningful at the zoom it was measured at.
    pub(crate) fn zero_offset(self) -> Self {
        match self {
            Self::MyPosition => Self::MyPosition,
            Self::Exact(position) => Self::Exact(position.zero_offset()),
        }
    }
}
