//! Touch hit regions
//!
//! Hit tests use squares around the view center rather than circles, so the
//! touch target is a little larger than the painted button.

use crate::config::ButtonConfig;
use shutter_core::{Point, Rect, Size};

/// Half extent of the collapsed hit square
pub fn collapsed_half_extent(config: &ButtonConfig) -> f32 {
    config.main_circle_radius as f32 + config.stroke_width as f32
}

/// Half extent of the expanded hit square
pub fn expanded_half_extent(config: &ButtonConfig) -> f32 {
    config.main_circle_radius as f32 + config.main_circle_radius_expanded as f32
}

/// Collapsed hit square for the given bounds
pub fn collapsed_area(config: &ButtonConfig, size: Size) -> Rect {
    Rect::square(size.center(), collapsed_half_extent(config))
}

/// Expanded hit square for the given bounds
pub fn expanded_area(config: &ButtonConfig, size: Size) -> Rect {
    Rect::square(size.center(), expanded_half_extent(config))
}

/// Whether `point` touches the collapsed button
pub fn is_touched(config: &ButtonConfig, size: Size, point: Point) -> bool {
    collapsed_area(config, size).contains(point)
}

/// Whether `point` touches the expanded button
pub fn is_touched_expanded(config: &ButtonConfig, size: Size, point: Point) -> bool {
    expanded_area(config, size).contains(point)
}
