use crate::tier::{DeviceHints, PerformanceTier, TierProfile};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How threads react to a nearby pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPolicy {
    /// Threads are pushed away from the pointer
    #[default]
    Repel,
    /// Threads are pulled toward the pointer
    Attract,
}

impl PointerPolicy {
    /// Sign applied to the pointer-ward direction
    pub fn sign(&self) -> f32 {
        match self {
            Self::Repel => -1.0,
            Self::Attract => 1.0,
        }
    }
}

/// Page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoomConfig {
    /// Project data file
    pub projects_path: String,
    /// Seed for the thread field, entropy when unset
    pub seed: Option<u64>,
    pub pointer_policy: PointerPolicy,
    /// When false, device detection is skipped and the small build is used
    pub tiering: bool,
    /// Pin a tier instead of detecting one
    pub tier: Option<PerformanceTier>,
    /// Hint overrides; gaps are filled from what the host can probe
    pub device: DeviceHints,
}

impl Default for LoomConfig {
    fn default() -> Self {
        Self {
            projects_path: "projects.json".into(),
            seed: None,
            pointer_policy: PointerPolicy::Repel,
            tiering: true,
            tier: None,
            device: DeviceHints::default(),
        }
    }
}

impl LoomConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Tier for this run: the pinned one, else detected from the hints.
    /// `None` when tiering is off.
    pub fn resolve_tier(&self, probed: DeviceHints) -> Option<PerformanceTier> {
        if !self.tiering {
            return None;
        }
        Some(
            self.tier
                .unwrap_or_else(|| PerformanceTier::detect(&self.device.or(probed))),
        )
    }

    pub fn profile(&self, tier: Option<PerformanceTier>) -> TierProfile {
        tier.map_or_else(TierProfile::untiered, PerformanceTier::profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: LoomConfig =
            serde_json::from_str(r#"{ "pointer_policy": "attract", "tier": "low" }"#).unwrap();
        assert_eq!(config.pointer_policy, PointerPolicy::Attract);
        assert_eq!(config.tier, Some(PerformanceTier::Low));
        assert_eq!(config.projects_path, "projects.json");
        assert!(config.tiering);
    }

    #[test]
    fn test_json_round_trip() {
        let config = LoomConfig {
            seed: Some(7),
            device: DeviceHints {
                memory_gb: Some(2.0),
                cores: None,
                network: Some(crate::NetworkClass::ThreeG),
            },
            ..LoomConfig::default()
        };
        let path = std::env::temp_dir().join(format!("loom-config-{}.json", std::process::id()));
        config.save(&path).unwrap();
        let json = fs::read_to_string(&path).unwrap();
        let back = LoomConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(back, config);
        assert!(json.contains("\"3g\""));
    }

    #[test]
    fn test_pinned_tier_wins_over_detection() {
        let config = LoomConfig {
            tier: Some(PerformanceTier::High),
            ..LoomConfig::default()
        };
        let weak = DeviceHints {
            memory_gb: Some(1.0),
            ..DeviceHints::default()
        };
        assert_eq!(config.resolve_tier(weak), Some(PerformanceTier::High));
    }

    #[test]
    fn test_untiered_config_uses_small_build() {
        let config = LoomConfig {
            tiering: false,
            ..LoomConfig::default()
        };
        let tier = config.resolve_tier(DeviceHints::default());
        assert_eq!(tier, None);
        assert_eq!(config.profile(tier).thread_count, 12);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(LoomConfig::load("definitely/not/here/loom.json").is_err());
    }
}
