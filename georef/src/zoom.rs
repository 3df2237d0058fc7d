#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("invalid zoom level")]
pub struct InvalidZoom;

/// Deepest zoom the map lets the user reach. Ground overlays are typically photographs of a single
/// site, so the widget goes a bit further than the usual tile servers.
const MAX_ZOOM: f64 = 21.;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub(crate) struct Zoom(f64);

impl TryFrom<f64> for Zoom {
    type Error = InvalidZoom;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if (0. ..=MAX_ZOOM).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidZoom)
        }
    }
}

impl From<Zoom> for f64 {
    fn from(zoom: Zoom) -> Self {
        zoom.0
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(16.)
    }
}

impl Zoom {
    pub fn zoom_in(&mut self) -> Result<(), InvalidZoom> {
        *self = Self::try_from(self.0 + 1.)?;
        Ok(())
    }

    pub fn zoom_out(&mut self) -> Result<(), InvalidZoom> {
        *self = Self::try_from(self.0 - 1.)?;
        Ok(())
    }

    /// Zoom using a relative value. Values which would leave the valid range are clamped.
    pub fn zoom_by(&mut self, value: f64) {
        self.0 = (self.0 + value).clamp(0., MAX_ZOOM);
    }
}
