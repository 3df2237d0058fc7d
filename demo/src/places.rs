//! Coordinates of the surveyed site in Pune, used in the example app.

use georef::{GeoBounds, InvalidBounds, Position, lat_lon};

/// Where the map is centered at startup.
pub fn site_center() -> Position {
    lat_lon(18.5314, 73.870999)
}

pub fn south_west() -> Position {
    lat_lon(18.53080033434548, 73.87040607842121)
}

pub fn north_east() -> Position {
    lat_lon(18.5318033131496, 73.87135204793677)
}

/// Area covered by the photograph.
pub fn site_bounds() -> Result<GeoBounds, InvalidBounds> {
    GeoBounds::new(south_west(), north_east())
}

/// Points surveyed on the ground, used to check how well the photograph is aligned.
pub fn reference_points() -> [Position; 2] {
    [
        lat_lon(18.531564697349456, 73.870564169134),
        lat_lon(18.530923826643022, 73.87064731761212),
    ]
}
