//! Surface configuration: dimensions, grid, hit radius, and measurement scale.
//!
//! Defaults reproduce the classic 1000 × 800 board with a 15 px grid, a 20 px
//! grab radius, and 20 px per centimeter. A host may override any of them from
//! the page URL (`?scale=25&grid=10`) or from a JSON blob; both paths validate
//! that every value is a finite, positive number and that the surface and its
//! grid stay small enough to paint.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    GRID_SIZE, MAX_GRID_CELLS, MAX_SURFACE_EXTENT, POINT_RADIUS, PROXIMITY_PX, PX_PER_CM, SURFACE_HEIGHT,
    SURFACE_WIDTH,
};

/// Error returned when a configuration source cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A query parameter value is not a number.
    #[error("invalid number for `{key}`: {value:?}")]
    InvalidNumber { key: String, value: String },
    /// A value is zero, negative, or not finite.
    #[error("`{key}` must be a positive number, got {value}")]
    NonPositive { key: &'static str, value: f64 },
    /// A surface dimension exceeds the paintable maximum.
    #[error("`{key}` must be at most {max}, got {value}")]
    TooLarge { key: &'static str, value: f64, max: f64 },
    /// The grid would need more cells than one frame can draw.
    #[error("grid of {cells} cells exceeds the limit of {max}")]
    TooManyGridCells { cells: f64, max: f64 },
    /// The JSON source could not be parsed.
    #[error("failed to parse surface config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tunables for one drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Surface width in CSS pixels.
    pub width: f64,
    /// Surface height in CSS pixels.
    pub height: f64,
    /// Background grid cell size.
    pub grid_size: f64,
    /// Pointer-down within this distance grabs an existing point.
    pub proximity_px: f64,
    /// Pixels per displayed centimeter.
    pub px_per_cm: f64,
    /// Radius of the point marker.
    pub point_radius: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            grid_size: GRID_SIZE,
            proximity_px: PROXIMITY_PX,
            px_per_cm: PX_PER_CM,
            point_radius: POINT_RADIUS,
        }
    }
}

impl SurfaceConfig {
    /// Build a config from a URL query string such as `?scale=25&grid=10`.
    ///
    /// Recognised keys:
    /// - `width`, `height`: surface size
    /// - `grid`: grid cell size
    /// - `proximity`: grab radius
    /// - `scale`: pixels per centimeter
    /// - `radius`: point marker radius
    ///
    /// Unknown keys and bare flags are ignored; missing keys keep defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNumber`] for unparseable values and
    /// [`ConfigError::NonPositive`] when validation fails.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let Some((key, raw)) = pair.split_once('=') else {
                continue;
            };
            let slot = match key {
                "width" => &mut config.width,
                "height" => &mut config.height,
                "grid" => &mut config.grid_size,
                "proximity" => &mut config.proximity_px,
                "scale" => &mut config.px_per_cm,
                "radius" => &mut config.point_radius,
                _ => continue,
            };
            *slot = raw
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidNumber { key: key.to_owned(), value: raw.to_owned() })?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Build a config from JSON; absent fields keep defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed input and
    /// [`ConfigError::NonPositive`] when validation fails.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is finite and strictly positive, that width and
    /// height are at most [`MAX_SURFACE_EXTENT`], and that the grid has at
    /// most [`MAX_GRID_CELLS`] cells.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositive`] for the first non-positive field,
    /// [`ConfigError::TooLarge`] for an oversized surface, and
    /// [`ConfigError::TooManyGridCells`] for a grid too fine to paint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("grid_size", self.grid_size),
            ("proximity_px", self.proximity_px),
            ("px_per_cm", self.px_per_cm),
            ("point_radius", self.point_radius),
        ];
        for (key, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { key, value });
            }
        }
        for (key, value) in [("width", self.width), ("height", self.height)] {
            if value > MAX_SURFACE_EXTENT {
                return Err(ConfigError::TooLarge { key, value, max: MAX_SURFACE_EXTENT });
            }
        }
        let cells = self.grid_cells();
        if cells > MAX_GRID_CELLS {
            return Err(ConfigError::TooManyGridCells { cells, max: MAX_GRID_CELLS });
        }
        Ok(())
    }

    /// Number of background grid cells covering the surface.
    #[must_use]
    pub fn grid_cells(&self) -> f64 {
        (self.width / self.grid_size).ceil() * (self.height / self.grid_size).ceil()
    }
}
