//! Geometry consistency checks
//!
//! The button is drawn centered, so every radius must fit within half of the
//! smaller view side, and the square icon must be inscribable in the inner
//! circle.

use crate::config::ButtonConfig;
use crate::error::ConsistencyError;
use shutter_core::Size;
use std::f32::consts::SQRT_2;

/// Validate `config` against view bounds
pub fn validate_consistency(config: &ButtonConfig, size: Size) -> Result<(), ConsistencyError> {
    let Size { width, height } = size;
    let bound = size.min_side() as f32 / 2.0;
    let radius = config.main_circle_radius;
    let radius_expanded = config.main_circle_radius_expanded;

    if radius as f32 > bound {
        return Err(ConsistencyError::MainCircleRadius {
            radius,
            width,
            height,
        });
    }
    if radius as f32 + config.stroke_width as f32 > bound {
        return Err(ConsistencyError::MainCircleWithStroke {
            radius,
            stroke_width: config.stroke_width,
            width,
            height,
        });
    }
    if radius_expanded as f32 > bound {
        return Err(ConsistencyError::ExpandedRadius {
            radius_expanded,
            width,
            height,
        });
    }
    if radius_expanded as f32 + config.progress_arc_width as f32 > bound {
        return Err(ConsistencyError::ExpandedWithArc {
            radius_expanded,
            arc_width: config.progress_arc_width,
            width,
            height,
        });
    }
    if config.icon_size as f32 / SQRT_2 > radius as f32 {
        return Err(ConsistencyError::IconTooLarge {
            radius,
            icon_size: config.icon_size,
        });
    }
    Ok(())
}
