//! Camera button configuration
//!
//! Every knob has a default, so a TOML document only needs the fields it
//! changes:
//!
//! ```toml
//! main_circle_radius = 40
//! mode = "hold"
//! collapse_action = "click"
//! progress_arc_colors = ["#FA7E1E", "#D62976"]
//! ```

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use shutter_animation::Easing;
use shutter_core::Color;
use std::fs;
use std::path::Path;

/// Which interactions the button accepts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Tap and hold
    #[default]
    All,
    /// Tap only
    Tap,
    /// Hold only
    Hold,
}

impl Mode {
    /// Whether a press-release counts as a tap
    pub fn is_pressable(self) -> bool {
        matches!(self, Mode::All | Mode::Tap)
    }

    /// Whether holding expands the button
    pub fn is_expandable(self) -> bool {
        matches!(self, Mode::All | Mode::Hold)
    }
}

/// What finishes an expanded button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollapseAction {
    /// Lifting the finger collapses
    #[default]
    Release,
    /// The first release arms, a following click collapses
    Click,
}

/// Camera button configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ButtonConfig {
    /// Radius of the inner circle when collapsed (px)
    #[serde(default = "default_main_circle_radius")]
    pub main_circle_radius: u32,
    /// Radius of the inner circle when expanded (px)
    #[serde(default = "default_main_circle_radius_expanded")]
    pub main_circle_radius_expanded: u32,
    /// Width of the ring around the inner circle (px)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: u32,
    /// Width of the hold progress arc (px)
    #[serde(default = "default_progress_arc_width")]
    pub progress_arc_width: u32,

    #[serde(default = "default_main_circle_color")]
    pub main_circle_color: Color,
    #[serde(default = "default_main_circle_color_pressed")]
    pub main_circle_color_pressed: Color,
    #[serde(default = "default_stroke_color")]
    pub stroke_color: Color,
    #[serde(default = "default_stroke_color_pressed")]
    pub stroke_color_pressed: Color,
    /// Gradient stops of the progress arc, at least two
    #[serde(default = "default_progress_arc_colors")]
    pub progress_arc_colors: Vec<Color>,

    #[serde(default = "default_expand_duration_ms")]
    pub expand_duration_ms: u64,
    #[serde(default = "default_collapse_duration_ms")]
    pub collapse_duration_ms: u64,
    /// Delay between touch-down and expansion when taps are also allowed
    #[serde(default = "default_expand_delay_ms")]
    pub expand_delay_ms: u64,
    /// How long the progress arc takes to fill before auto-collapse
    #[serde(default = "default_hold_duration_ms")]
    pub hold_duration_ms: u64,

    /// Edge of the square icon bitmaps (px)
    #[serde(default = "default_icon_size")]
    pub icon_size: u32,

    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub collapse_action: CollapseAction,

    /// How many turns the arc gradient makes per full progress sweep
    #[serde(default = "default_gradient_rotation_multiplier")]
    pub gradient_rotation_multiplier: f32,
    /// Validate geometry against view bounds before drawing
    #[serde(default = "default_true")]
    pub should_check_consistency: bool,

    #[serde(default = "default_resize_easing")]
    pub expand_easing: Easing,
    #[serde(default = "default_resize_easing")]
    pub collapse_easing: Easing,
}

pub const DEFAULT_GRADIENT_ROTATION_MULTIPLIER: f32 = 1.75;

fn default_main_circle_radius() -> u32 {
    28
}

fn default_main_circle_radius_expanded() -> u32 {
    20
}

fn default_stroke_width() -> u32 {
    8
}

fn default_progress_arc_width() -> u32 {
    6
}

fn default_main_circle_color() -> Color {
    Color::WHITE
}

fn default_main_circle_color_pressed() -> Color {
    Color::from_hex(0xDDDDDD)
}

fn default_stroke_color() -> Color {
    Color::WHITE.with_alpha(0.5)
}

fn default_stroke_color_pressed() -> Color {
    Color::WHITE.with_alpha(0.7)
}

fn default_progress_arc_colors() -> Vec<Color> {
    vec![
        Color::from_hex(0xFEDA75),
        Color::from_hex(0xFA7E1E),
        Color::from_hex(0xD62976),
        Color::from_hex(0x962FBF),
        Color::from_hex(0x4F5BD5),
    ]
}

fn default_expand_duration_ms() -> u64 {
    200
}

fn default_collapse_duration_ms() -> u64 {
    200
}

fn default_expand_delay_ms() -> u64 {
    300
}

fn default_hold_duration_ms() -> u64 {
    5000
}

fn default_icon_size() -> u32 {
    28
}

fn default_gradient_rotation_multiplier() -> f32 {
    DEFAULT_GRADIENT_ROTATION_MULTIPLIER
}

fn default_true() -> bool {
    true
}

fn default_resize_easing() -> Easing {
    Easing::AccelerateDecelerate
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            main_circle_radius: default_main_circle_radius(),
            main_circle_radius_expanded: default_main_circle_radius_expanded(),
            stroke_width: default_stroke_width(),
            progress_arc_width: default_progress_arc_width(),
            main_circle_color: default_main_circle_color(),
            main_circle_color_pressed: default_main_circle_color_pressed(),
            stroke_color: default_stroke_color(),
            stroke_color_pressed: default_stroke_color_pressed(),
            progress_arc_colors: default_progress_arc_colors(),
            expand_duration_ms: default_expand_duration_ms(),
            collapse_duration_ms: default_collapse_duration_ms(),
            expand_delay_ms: default_expand_delay_ms(),
            hold_duration_ms: default_hold_duration_ms(),
            icon_size: default_icon_size(),
            mode: Mode::default(),
            collapse_action: CollapseAction::default(),
            gradient_rotation_multiplier: default_gradient_rotation_multiplier(),
            should_check_consistency: true,
            expand_easing: default_resize_easing(),
            collapse_easing: default_resize_easing(),
        }
    }
}

impl ButtonConfig {
    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: ButtonConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every value-level constraint.
    ///
    /// Geometry against view bounds is checked separately, see
    /// [`crate::consistency`].
    pub fn validate(&self) -> Result<()> {
        check_dimension("main_circle_radius", self.main_circle_radius)?;
        check_dimension(
            "main_circle_radius_expanded",
            self.main_circle_radius_expanded,
        )?;
        check_dimension("stroke_width", self.stroke_width)?;
        check_dimension("progress_arc_width", self.progress_arc_width)?;
        check_dimension("icon_size", self.icon_size)?;
        check_duration("expand_duration_ms", self.expand_duration_ms)?;
        check_duration("collapse_duration_ms", self.collapse_duration_ms)?;
        check_duration("expand_delay_ms", self.expand_delay_ms)?;
        check_duration("hold_duration_ms", self.hold_duration_ms)?;
        check_colors(&self.progress_arc_colors)?;
        check_rotation_multiplier(self.gradient_rotation_multiplier)?;
        Ok(())
    }

    pub fn main_circle_radius(mut self, radius: u32) -> Self {
        self.main_circle_radius = radius;
        self
    }

    pub fn main_circle_radius_expanded(mut self, radius: u32) -> Self {
        self.main_circle_radius_expanded = radius;
        self
    }

    pub fn stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn progress_arc_width(mut self, width: u32) -> Self {
        self.progress_arc_width = width;
        self
    }

    pub fn icon_size(mut self, size: u32) -> Self {
        self.icon_size = size;
        self
    }

    /// Set normal and pressed inner circle colors
    pub fn main_circle_colors(mut self, normal: Color, pressed: Color) -> Self {
        self.main_circle_color = normal;
        self.main_circle_color_pressed = pressed;
        self
    }

    /// Set normal and pressed ring colors
    pub fn stroke_colors(mut self, normal: Color, pressed: Color) -> Self {
        self.stroke_color = normal;
        self.stroke_color_pressed = pressed;
        self
    }

    pub fn progress_arc_colors(mut self, colors: Vec<Color>) -> Self {
        self.progress_arc_colors = colors;
        self
    }

    pub fn expand_duration_ms(mut self, ms: u64) -> Self {
        self.expand_duration_ms = ms;
        self
    }

    pub fn collapse_duration_ms(mut self, ms: u64) -> Self {
        self.collapse_duration_ms = ms;
        self
    }

    pub fn expand_delay_ms(mut self, ms: u64) -> Self {
        self.expand_delay_ms = ms;
        self
    }

    pub fn hold_duration_ms(mut self, ms: u64) -> Self {
        self.hold_duration_ms = ms;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn collapse_action(mut self, action: CollapseAction) -> Self {
        self.collapse_action = action;
        self
    }

    pub fn gradient_rotation_multiplier(mut self, multiplier: f32) -> Self {
        self.gradient_rotation_multiplier = multiplier;
        self
    }

    pub fn should_check_consistency(mut self, check: bool) -> Self {
        self.should_check_consistency = check;
        self
    }

    pub fn expand_easing(mut self, easing: Easing) -> Self {
        self.expand_easing = easing;
        self
    }

    pub fn collapse_easing(mut self, easing: Easing) -> Self {
        self.collapse_easing = easing;
        self
    }
}

pub(crate) fn check_dimension(name: &'static str, value: u32) -> Result<u32> {
    if value == 0 {
        return Err(ConfigError::NonPositiveDimension { name, value });
    }
    Ok(value)
}

pub(crate) fn check_duration(name: &'static str, value: u64) -> Result<u64> {
    if value == 0 {
        return Err(ConfigError::NonPositiveDuration { name, value });
    }
    Ok(value)
}

pub(crate) fn check_colors(colors: &[Color]) -> Result<()> {
    if colors.len() < 2 {
        return Err(ConfigError::TooFewColors(colors.len()));
    }
    Ok(())
}

pub(crate) fn check_rotation_multiplier(multiplier: f32) -> Result<f32> {
    if !multiplier.is_finite() || multiplier <= 0.0 {
        return Err(ConfigError::InvalidRotationMultiplier(multiplier));
    }
    Ok(multiplier)
}
