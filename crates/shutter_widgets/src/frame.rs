//! Renderer-agnostic frame description
//!
//! A [`ButtonFrame`] lists what to paint, back to front: the stroke ring, the
//! progress arc (when wide enough to see), the main circle and up to two
//! icons. Renderers map the ops onto their canvas however they like.

use crate::config::ButtonConfig;
use crate::icons::IconPlacement;
use shutter_core::{Color, Point, Rect, Size};
use smallvec::SmallVec;

/// Full sweep of the progress arc in degrees
pub const SWEEP_ANGLE: f32 = 360.0;

/// Arc start angle in degrees, 12 o'clock
pub const START_ANGLE: f32 = -90.0;

/// How a gradient repeats past its end points
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TileMode {
    Clamp,
    #[default]
    Mirror,
}

/// Linear gradient with evenly spaced stops
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: SmallVec<[Color; 8]>,
    pub tile_mode: TileMode,
}

/// One paint operation
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Filled circle
    Circle {
        center: Point,
        radius: f32,
        color: Color,
    },
    /// Stroked arc inscribed in `oval`.
    ///
    /// The whole canvas is rotated by `rotation` degrees around `pivot`
    /// before drawing, which turns the gradient without moving the arc.
    Arc {
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        stroke_width: f32,
        rotation: f32,
        pivot: Point,
        gradient: LinearGradient,
    },
    /// Icon bitmap squeezed into its rectangle
    Icon(IconPlacement),
}

/// Everything needed to paint one frame of a camera button
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonFrame {
    pub size: Size,
    pub expanding_factor: f32,
    pub progress_factor: f32,
    pub icon_position: Option<f32>,
    pub hovered: bool,
    pub ops: SmallVec<[DrawOp; 6]>,
}

impl ButtonFrame {
    /// Circles in paint order
    pub fn circles(&self) -> impl Iterator<Item = (Point, f32, Color)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Circle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn arc(&self) -> Option<&DrawOp> {
        self.ops.iter().find(|op| matches!(op, DrawOp::Arc { .. }))
    }

    pub fn icons(&self) -> impl Iterator<Item = &IconPlacement> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Icon(icon) => Some(icon),
            _ => None,
        })
    }
}

/// Progress arc width multiplier, zero until the button is half expanded
pub fn arc_width_factor(expanding_factor: f32) -> f32 {
    ((expanding_factor - 0.5) / 0.5).clamp(0.0, 1.0)
}

/// Inputs of [`compose`] that vary per frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameFactors {
    pub expanding_factor: f32,
    pub progress_factor: f32,
    pub hovered: bool,
}

/// Build the paint ops for `size`, appending `icons` last
pub fn compose(
    config: &ButtonConfig,
    size: Size,
    factors: FrameFactors,
    icon_position: Option<f32>,
    icons: &[IconPlacement],
) -> ButtonFrame {
    let FrameFactors {
        expanding_factor: e,
        progress_factor: p,
        hovered,
    } = factors;

    let (cx, cy) = size.pixel_center();
    let center = Point::new(cx as f32, cy as f32);
    let bound = cx.min(cy) as f32;
    let mut ops = SmallVec::new();

    let (main_color, stroke_color) = if hovered {
        (config.main_circle_color_pressed, config.stroke_color_pressed)
    } else {
        (config.main_circle_color, config.stroke_color)
    };

    let collapsed_stroke_radius = config.main_circle_radius as f32 + config.stroke_width as f32;
    let stroke_radius = collapsed_stroke_radius - (collapsed_stroke_radius - bound) * e;
    ops.push(DrawOp::Circle {
        center,
        radius: stroke_radius,
        color: stroke_color,
    });

    let arc_width = config.progress_arc_width as f32 * arc_width_factor(e);
    if arc_width > 0.0 {
        let rotation = SWEEP_ANGLE * p * config.gradient_rotation_multiplier;
        let inset = stroke_radius - arc_width / 2.0;
        ops.push(DrawOp::Arc {
            oval: Rect::square(center, inset),
            start_angle: START_ANGLE - rotation,
            sweep_angle: SWEEP_ANGLE * p,
            stroke_width: arc_width,
            rotation,
            pivot: center,
            gradient: LinearGradient {
                start: Point::new(0.0, 0.0),
                end: Point::new(size.width as f32, size.height as f32),
                stops: config.progress_arc_colors.iter().copied().collect(),
                tile_mode: TileMode::Mirror,
            },
        });
    }

    let radius = config.main_circle_radius as f32;
    let radius_expanded = config.main_circle_radius_expanded as f32;
    ops.push(DrawOp::Circle {
        center,
        radius: radius - (radius - radius_expanded) * e,
        color: main_color,
    });

    ops.extend(icons.iter().copied().map(DrawOp::Icon));

    ButtonFrame {
        size,
        expanding_factor: e,
        progress_factor: p,
        icon_position,
        hovered,
        ops,
    }
}
