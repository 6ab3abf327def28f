use crate::constants::{FALLBACK_CORES, FALLBACK_MEMORY_GB, UNTIERED_THREAD_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse device class that sizes the thread field and its frame rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTier {
    Low,
    Medium,
    High,
}

impl PerformanceTier {
    /// Classify a device from the hints it reports.
    /// Missing hints fall back to 4 GB, 4 cores and a 4g connection.
    pub fn detect(hints: &DeviceHints) -> Self {
        let memory = hints.memory_gb.unwrap_or(FALLBACK_MEMORY_GB);
        let cores = hints.cores.unwrap_or(FALLBACK_CORES);
        let network = hints.network.unwrap_or(NetworkClass::FourG);

        let low_end = memory < 4.0
            || cores < 4
            || matches!(network, NetworkClass::Slow2G | NetworkClass::TwoG);
        let mid_range = memory < 8.0 || cores < 8 || network == NetworkClass::ThreeG;

        if low_end {
            Self::Low
        } else if mid_range {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn profile(self) -> TierProfile {
        match self {
            Self::Low => TierProfile {
                thread_count: 30,
                target_fps: 15,
                move_speed: 0.3,
                drift: 0.0003,
                friction: 0.92,
                retarget_chance: 0.0005,
                pointer_strength: 0.02,
            },
            Self::Medium => TierProfile {
                thread_count: 60,
                target_fps: 24,
                ..TierProfile::full_motion()
            },
            Self::High => TierProfile {
                thread_count: 100,
                ..TierProfile::full_motion()
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    /// Human summary used in the start-up log line
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Low => "reducing animations",
            Self::Medium => "moderate animations",
            Self::High => "full animations",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PerformanceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown performance tier: {other}")),
        }
    }
}

/// Effective connection quality class, as browsers report it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkClass {
    #[serde(rename = "slow-2g")]
    Slow2G,
    #[serde(rename = "2g")]
    TwoG,
    #[serde(rename = "3g")]
    ThreeG,
    #[serde(rename = "4g")]
    FourG,
}

impl FromStr for NetworkClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slow-2g" => Ok(Self::Slow2G),
            "2g" => Ok(Self::TwoG),
            "3g" => Ok(Self::ThreeG),
            "4g" => Ok(Self::FourG),
            other => Err(format!("unknown network class: {other}")),
        }
    }
}

/// Capability signals reported by the host. Every field is optional.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceHints {
    /// Approximate device memory in GB
    pub memory_gb: Option<f32>,
    /// Logical core count
    pub cores: Option<u32>,
    pub network: Option<NetworkClass>,
}

impl DeviceHints {
    /// Fill gaps in `self` from `other`
    pub fn or(self, other: DeviceHints) -> Self {
        Self {
            memory_gb: self.memory_gb.or(other.memory_gb),
            cores: self.cores.or(other.cores),
            network: self.network.or(other.network),
        }
    }
}

/// Per-tier tuning of the thread field and its frame loop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierProfile {
    pub thread_count: usize,
    pub target_fps: u32,
    /// Velocity-to-position scale per tick
    pub move_speed: f32,
    /// Pull toward the wander target per tick
    pub drift: f32,
    /// Velocity multiplier per tick
    pub friction: f32,
    /// Chance per thread per tick of picking a new target
    pub retarget_chance: f64,
    /// Pointer force coefficient
    pub pointer_strength: f32,
}

impl TierProfile {
    fn full_motion() -> Self {
        Self {
            thread_count: 100,
            target_fps: 30,
            move_speed: 0.5,
            drift: 0.0005,
            friction: 0.95,
            retarget_chance: 0.001,
            pointer_strength: 0.02,
        }
    }

    /// Small build for callers that skip device tiering
    pub fn untiered() -> Self {
        Self {
            thread_count: UNTIERED_THREAD_COUNT,
            ..Self::full_motion()
        }
    }
}
