//! Widget error types

use std::path::PathBuf;
use thiserror::Error;

/// Invalid configuration values, rejected where they are supplied
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Pixel dimension must be greater than zero
    #[error("{name} must be a positive dimension, got {value}px")]
    NonPositiveDimension { name: &'static str, value: u32 },

    /// Durations must be at least one millisecond
    #[error("{name} must be at least 1ms, got {value}ms")]
    NonPositiveDuration { name: &'static str, value: u64 },

    /// Gradient needs at least two stops
    #[error("progress arc needs at least 2 colors, got {0}")]
    TooFewColors(usize),

    /// Gradient rotation multiplier must be strictly positive
    #[error("gradient rotation multiplier should be greater than 0, got {0}")]
    InvalidRotationMultiplier(f32),

    /// A float argument was NaN or infinite
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),

    /// Failed to read a config file
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for a button config
    #[error("failed to parse button config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("failed to serialize button config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Configured geometry that cannot fit the current view bounds.
///
/// These are programmer errors: fix the configuration or the layout, or
/// turn consistency checks off.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsistencyError {
    #[error("MainCircleRadius can't be greater than half of width or height. MainCircleRadius={radius}px, width={width}px, height={height}px")]
    MainCircleRadius { radius: u32, width: u32, height: u32 },

    #[error("Sum of MainCircleRadius and StrokeWidth can't be greater than half of width or height. MainCircleRadius={radius}px, StrokeWidth={stroke_width}px, width={width}px, height={height}px")]
    MainCircleWithStroke {
        radius: u32,
        stroke_width: u32,
        width: u32,
        height: u32,
    },

    #[error("MainCircleRadiusExpanded can't be greater than half of width or height. MainCircleRadiusExpanded={radius_expanded}px, width={width}px, height={height}px")]
    ExpandedRadius {
        radius_expanded: u32,
        width: u32,
        height: u32,
    },

    #[error("Sum of MainCircleRadiusExpanded and ProgressArcWidth can't be greater than half of width or height. MainCircleRadiusExpanded={radius_expanded}px, ProgressArcWidth={arc_width}px, width={width}px, height={height}px")]
    ExpandedWithArc {
        radius_expanded: u32,
        arc_width: u32,
        width: u32,
        height: u32,
    },

    #[error("Icon can't be inscribed in the main button area. MainCircleRadius={radius}px, IconSize={icon_size}px")]
    IconTooLarge { radius: u32, icon_size: u32 },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
