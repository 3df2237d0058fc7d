use crate::{Position, lon_lat};

/// Returned by [`GeoBounds::new`] when the corners do not delimit an area on the globe.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidBounds {
    /// Corner with a non-finite coordinate or a latitude beyond a pole.
    #[error("corner ({}, {}) is not a position on the globe", .0.y(), .0.x())]
    OffTheGlobe(Position),

    /// South-west corner is not south-west of the north-east one. Boxes crossing the
    /// antimeridian end up here as well.
    #[error(
        "south-west corner ({}, {}) lies north or east of north-east corner ({}, {})",
        .south_west.y(), .south_west.x(), .north_east.y(), .north_east.x()
    )]
    Swapped {
        south_west: Position,
        north_east: Position,
    },
}

fn on_the_globe(position: Position) -> bool {
    position.x().is_finite() && (-90.0..=90.0).contains(&position.y())
}

/// Rectangular area on the globe, delimited by its south-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    south_west: Position,
    north_east: Position,
}

impl GeoBounds {
    /// Create bounds from the two corners.
    ///
    /// # Errors
    ///
    /// [`InvalidBounds::OffTheGlobe`] if a coordinate is NaN or infinite, or a latitude lies
    /// outside of -90..=90 degrees.
    ///
    /// [`InvalidBounds::Swapped`] if the latitude or longitude of `south_west` is greater than
    /// the one of `north_east`. Equal values are accepted and yield a degenerate, zero-sized box.
    pub fn new(south_west: Position, north_east: Position) -> Result<Self, InvalidBounds> {
        if let Some(corner) = [south_west, north_east]
            .into_iter()
            .find(|corner| !on_the_globe(*corner))
        {
            return Err(InvalidBounds::OffTheGlobe(corner));
        }

        let ordered = south_west.y() <= north_east.y() && south_west.x() <= north_east.x();

        if ordered {
            Ok(Self {
                south_west,
                north_east,
            })
        } else {
            Err(InvalidBounds::Swapped {
                south_west,
                north_east,
            })
        }
    }

    pub fn south_west(&self) -> Position {
        self.south_west
    }

    pub fn north_east(&self) -> Position {
        self.north_east
    }

    /// Geographical center, i.e. the midpoint of both latitude and longitude.
    pub fn center(&self) -> Position {
        lon_lat(
            (self.south_west.x() + self.north_east.x()) / 2.,
            (self.south_west.y() + self.north_east.y()) / 2.,
        )
    }

    /// Whether `position` lies inside the bounds (edges included).
    pub fn contains(&self, position: Position) -> bool {
        (self.south_west.x()..=self.north_east.x()).contains(&position.x())
            && (self.south_west.y()..=self.north_east.y()).contains(&position.y())
    }
}
