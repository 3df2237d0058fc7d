use crate::{InvalidZoom, Position, center::Center, position::AdjustedPosition, zoom::Zoom};

/// State of the map widget which must persist between frames.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct MapMemory {
    pub(crate) center_mode: Center,
    pub(crate) zoom: Zoom,
}

impl MapMemory {
    /// Try to zoom in, returning `Err(InvalidZoom)` if already at maximum.
    pub fn zoom_in(&mut self) -> Result<(), InvalidZoom> {
        self.center_mode = self.center_mode.clone().zero_offset();
        self.zoom.zoom_in()
    }

    /// Try to zoom out, returning `Err(InvalidZoom)` if already at minimum.
    pub fn zoom_out(&mut self) -> Result<(), InvalidZoom> {
        self.center_mode = self.center_mode.clone().zero_offset();
        self.zoom.zoom_out()
    }

    /// Set exact zoom level.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), InvalidZoom> {
        self.zoom = Zoom::try_from(zoom)?;
        self.center_mode = self.center_mode.clone().zero_offset();
        Ok(())
    }

    /// Returns the current zoom level.
    pub fn zoom(&self) -> f64 {
        self.zoom.into()
    }

    /// Returns exact position if map is detached (i.e. not following `my_position`),
    /// `None` otherwise.
    pub fn detached(&self) -> Option<Position> {
        self.center_mode.detached()
    }

    /// Center exactly at the given position.
    pub fn center_at(&mut self, position: Position) {
        self.center_mode = Center::Exact(AdjustedPosition::new(position));
    }

    /// Follow `my_position`.
    pub fn follow_my_position(&mut self) {
        self.center_mode = Center::MyPosition;
    }

    /// Whether the map is following `my_position`.
    pub fn follows_my_position(&self) -> bool {
        self.center_mode == Center::MyPosition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lat_lon;

    #[test]
    fn centering_detaches_and_following_attaches() {
        let mut memory = MapMemory::default();
        assert_eq!(memory.detached(), None);

        memory.center_at(lat_lon(18.5314, 73.870999));
        let detached = memory.detached().unwrap();
        approx::assert_relative_eq!(detached.y(), 18.5314, epsilon = 1e-9);

        assert!(!memory.follows_my_position());

        memory.follow_my_position();
        assert_eq!(memory.detached(), None);
        assert!(memory.follows_my_position());
    }

    #[test]
    fn setting_zoom() {
        let mut memory = MapMemory::default();
        assert_eq!(memory.set_zoom(19.), Ok(()));
        assert_eq!(memory.zoom(), 19.);
        assert_eq!(memory.set_zoom(30.), Err(InvalidZoom));
        assert_eq!(memory.zoom(), 19.);
    }

    #[test]
    fn zooming_in_and_out() {
        let mut memory = MapMemory::default();
        memory.set_zoom(20.).unwrap();
        assert_eq!(memory.zoom_in(), Ok(()));
        assert_eq!(memory.zoom_in(), Err(InvalidZoom));
        assert_eq!(memory.zoom_out(), Ok(()));
        assert_eq!(memory.zoom(), 20.);
    }
}
