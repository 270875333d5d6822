//! Game settings
//!
//! Selects the variant preset and the outer-loop knobs (tick rate, session
//! screens). Physics parameters come from the variant's [`Tuning`] and are not
//! read from files.

use serde::{Deserialize, Serialize};

use crate::tuning::{Tuning, Variant};

/// Seed used by the demo autopilot when none is given
pub const DEFAULT_AUTOPILOT_SEED: u64 = 0x5EED_2024;

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gameplay variant (force cap, launch multiplier)
    pub variant: Variant,
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Show start/win/lose screens; when off the session starts in play
    pub session_screens: bool,
    /// Seed for the demo autopilot
    pub autopilot_seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_variant(Variant::default())
    }
}

impl Settings {
    /// Create settings from a variant (applies its tick rate and screens flag)
    pub fn from_variant(variant: Variant) -> Self {
        Self {
            variant,
            tick_rate: variant.tick_rate(),
            session_screens: variant.session_screens(),
            autopilot_seed: DEFAULT_AUTOPILOT_SEED,
        }
    }

    /// Resolve settings from a preset name, falling back to defaults
    pub fn from_preset_name(name: Option<&str>) -> Self {
        match name {
            None => Self::default(),
            Some(name) => match Variant::from_str(name) {
                Some(variant) => {
                    log::info!("Using {} variant", variant.as_str());
                    Self::from_variant(variant)
                }
                None => {
                    log::warn!("Unknown variant {:?}, using defaults", name);
                    Self::default()
                }
            },
        }
    }

    /// Physics tuning for the selected variant
    pub fn tuning(&self) -> Tuning {
        self.variant.tuning()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic() {
        let s = Settings::default();
        assert_eq!(s.variant, Variant::Classic);
        assert_eq!(s.tick_rate, 30);
        assert!(s.session_screens);
    }

    #[test]
    fn test_from_preset_name() {
        assert_eq!(Settings::from_preset_name(Some("b")).variant, Variant::Arcade);
        assert_eq!(Settings::from_preset_name(Some("nope")), Settings::default());
        assert_eq!(Settings::from_preset_name(None), Settings::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let s: Settings = serde_json::from_str(r#"{"tick_rate": 60}"#).unwrap();
        assert_eq!(s.tick_rate, 60);
        assert_eq!(s.variant, Variant::Classic);
        assert!(s.session_screens);
        assert_eq!(s.autopilot_seed, DEFAULT_AUTOPILOT_SEED);
    }
}
