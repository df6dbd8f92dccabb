//! Output configuration types.
//!
//! This module defines the four production models the engine can resolve a
//! task set against, as a closed tagged union. Each variant carries only the
//! dimensional inputs it needs, so degenerate combinations (a length-based
//! mode with a height, a capacity mode with a target) cannot be represented.

use serde::{Deserialize, Serialize};

use super::TimeUnit;

/// The label of a square-foot area unit.
pub const AREA_UNIT_LABEL: &str = "sqft";

/// The label of a linear-foot length unit.
pub const LENGTH_UNIT_LABEL: &str = "lf";

/// The production model the final metric is resolved under.
///
/// Target modes solve for the time needed to produce a fixed quantity;
/// capacity (man-day) modes fix the available time at 8 hours per crew
/// member and solve for the quantity produced.
///
/// # Example
///
/// ```
/// use production_engine::models::OutputMode;
///
/// let mode = OutputMode::AreaTarget {
///     unit_length: 10.0,
///     unit_height: 10.0,
///     target_area: 200.0,
/// };
/// assert_eq!(mode.unit_size(), 100.0);
/// assert_eq!(mode.label(), "Square-foot");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputMode {
    /// Solve for the time needed to cover a target area in square feet.
    AreaTarget {
        /// Length of one unit panel, in feet.
        unit_length: f64,
        /// Height of one unit panel, in feet.
        unit_height: f64,
        /// Total area to produce, in square feet.
        target_area: f64,
    },
    /// Solve for the time needed to cover a target run in linear feet.
    LengthTarget {
        /// Length of one unit run, in feet.
        unit_length: f64,
        /// Total length to produce, in linear feet.
        target_length: f64,
    },
    /// Solve for the square footage produced in one man-day per worker.
    AreaCapacity {
        /// Length of one unit panel, in feet.
        unit_length: f64,
        /// Height of one unit panel, in feet.
        unit_height: f64,
    },
    /// Solve for the linear footage produced in one man-day per worker.
    LengthCapacity {
        /// Length of one unit run, in feet.
        unit_length: f64,
    },
}

impl OutputMode {
    /// The document label for this mode, as written by the persistence codec.
    pub fn label(&self) -> &'static str {
        match self {
            OutputMode::AreaTarget { .. } => "Square-foot",
            OutputMode::LengthTarget { .. } => "Linear-Foot",
            OutputMode::AreaCapacity { .. } => "Man Day (SF)",
            OutputMode::LengthCapacity { .. } => "Man Day (LF)",
        }
    }

    /// The size of one output unit: area for the area modes, length for the
    /// length modes. Zero or negative sizes are legal inputs; the engine
    /// treats them as "no units needed/completed".
    pub fn unit_size(&self) -> f64 {
        match self {
            OutputMode::AreaTarget {
                unit_length,
                unit_height,
                ..
            }
            | OutputMode::AreaCapacity {
                unit_length,
                unit_height,
            } => unit_length * unit_height,
            OutputMode::LengthTarget { unit_length, .. }
            | OutputMode::LengthCapacity { unit_length } => *unit_length,
        }
    }

    /// The label of the quantity this mode produces ("sqft" or "lf").
    pub fn unit_label(&self) -> &'static str {
        match self {
            OutputMode::AreaTarget { .. } | OutputMode::AreaCapacity { .. } => AREA_UNIT_LABEL,
            OutputMode::LengthTarget { .. } | OutputMode::LengthCapacity { .. } => {
                LENGTH_UNIT_LABEL
            }
        }
    }

    /// True for the man-day (fixed time budget) modes.
    pub fn is_capacity(&self) -> bool {
        matches!(
            self,
            OutputMode::AreaCapacity { .. } | OutputMode::LengthCapacity { .. }
        )
    }

    /// The unit length, available in every mode.
    pub fn unit_length(&self) -> f64 {
        match self {
            OutputMode::AreaTarget { unit_length, .. }
            | OutputMode::LengthTarget { unit_length, .. }
            | OutputMode::AreaCapacity { unit_length, .. }
            | OutputMode::LengthCapacity { unit_length } => *unit_length,
        }
    }

    /// The unit height, for the area modes.
    pub fn unit_height(&self) -> Option<f64> {
        match self {
            OutputMode::AreaTarget { unit_height, .. }
            | OutputMode::AreaCapacity { unit_height, .. } => Some(*unit_height),
            _ => None,
        }
    }

    /// The production target, for the target modes.
    pub fn target(&self) -> Option<f64> {
        match self {
            OutputMode::AreaTarget { target_area, .. } => Some(*target_area),
            OutputMode::LengthTarget { target_length, .. } => Some(*target_length),
            _ => None,
        }
    }

    /// Builds a mode from the flat fields of a persisted document.
    ///
    /// `output_type` is matched against the labels written by [`Self::label`];
    /// the legacy bare "Man Day" label maps to "Man Day (SF)". Fields a mode
    /// does not use are discarded. Returns `None` for unknown labels.
    pub fn from_document_parts(
        output_type: &str,
        length: f64,
        height: f64,
        target: f64,
    ) -> Option<Self> {
        match output_type.trim() {
            "Square-foot" => Some(OutputMode::AreaTarget {
                unit_length: length,
                unit_height: height,
                target_area: target,
            }),
            "Linear-Foot" => Some(OutputMode::LengthTarget {
                unit_length: length,
                target_length: target,
            }),
            "Man Day (SF)" | "Man Day" => Some(OutputMode::AreaCapacity {
                unit_length: length,
                unit_height: height,
            }),
            "Man Day (LF)" => Some(OutputMode::LengthCapacity {
                unit_length: length,
            }),
            _ => None,
        }
    }
}

impl Default for OutputMode {
    fn default() -> Self {
        OutputMode::AreaTarget {
            unit_length: 0.0,
            unit_height: 0.0,
            target_area: 0.0,
        }
    }
}

/// The full output configuration: the production model plus the unit the
/// final time figure is displayed in.
///
/// The display unit only affects the target modes; capacity modes produce a
/// quantity, not a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// The selected production model.
    #[serde(default)]
    pub mode: OutputMode,
    /// The unit the final time figure is displayed in.
    #[serde(default)]
    pub display_unit: TimeUnit,
}

impl OutputSettings {
    /// Creates output settings for the given mode with minute display.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            display_unit: TimeUnit::Minutes,
        }
    }
}
