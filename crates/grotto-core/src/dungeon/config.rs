//! Level generation parameters

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_HEIGHT, DEFAULT_MIN_NODE_HEIGHT, DEFAULT_MIN_NODE_WIDTH, DEFAULT_SMOOTHING_ROUNDS,
    DEFAULT_SOLID_PERCENTAGE, DEFAULT_WIDTH, MIN_ROOM_SPAN,
};
use crate::error::DungeonError;
use crate::rng::GameRng;

/// Binary space partitioning parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BspParams {
    pub min_node_width: i32,
    pub min_node_height: i32,
}

impl Default for BspParams {
    fn default() -> Self {
        Self {
            min_node_width: DEFAULT_MIN_NODE_WIDTH,
            min_node_height: DEFAULT_MIN_NODE_HEIGHT,
        }
    }
}

/// Cellular automaton parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CavernParams {
    /// Percent chance (0-100) that a cell starts as solid rock
    pub solid_percentage: u8,
    pub smoothing_rounds: u32,
}

impl Default for CavernParams {
    fn default() -> Self {
        Self {
            solid_percentage: DEFAULT_SOLID_PERCENTAGE,
            smoothing_rounds: DEFAULT_SMOOTHING_ROUNDS,
        }
    }
}

/// Which generator builds a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelKind {
    /// Rooms and corridors
    Bsp,
    /// Natural caves
    Cavern,
    /// Either of the above, chosen by a coin flip per level
    #[default]
    Random,
}

impl LevelKind {
    /// Pick a concrete generator; `Random` flips a coin, the others are kept
    pub fn resolve(self, rng: &mut GameRng) -> LevelKind {
        match self {
            LevelKind::Random => {
                if rng.coin_flip() {
                    LevelKind::Bsp
                } else {
                    LevelKind::Cavern
                }
            }
            kind => kind,
        }
    }
}

/// Everything needed to generate levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub width: usize,
    pub height: usize,
    pub kind: LevelKind,
    pub bsp: BspParams,
    pub cavern: CavernParams,
    /// Fixed seed for reproducible levels, fresh entropy when absent
    pub seed: Option<u64>,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            kind: LevelKind::default(),
            bsp: BspParams::default(),
            cavern: CavernParams::default(),
            seed: None,
        }
    }
}

impl DungeonConfig {
    /// Reject parameters no generator of the configured kind could honour
    pub fn validate(&self) -> Result<(), DungeonError> {
        if matches!(self.kind, LevelKind::Bsp | LevelKind::Random) {
            let BspParams {
                min_node_width,
                min_node_height,
            } = self.bsp;
            if min_node_width < MIN_ROOM_SPAN
                || min_node_height < MIN_ROOM_SPAN
                || (self.width as i64 - 2) < min_node_width as i64
                || (self.height as i64 - 2) < min_node_height as i64
            {
                return Err(DungeonError::DegenerateDimensions {
                    width: self.width,
                    height: self.height,
                    min_node_width,
                    min_node_height,
                });
            }
        }

        if matches!(self.kind, LevelKind::Cavern | LevelKind::Random)
            && self.cavern.solid_percentage > 100
        {
            return Err(DungeonError::parameters(format!(
                "solid percentage {} exceeds 100",
                self.cavern.solid_percentage
            )));
        }

        Ok(())
    }

    /// Random source for this configuration
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DungeonConfig::default();
        assert_eq!(config.width, 80);
        assert_eq!(config.height, 20);
        assert_eq!(config.kind, LevelKind::Random);
        assert_eq!(config.bsp.min_node_width, 7);
        assert_eq!(config.cavern.solid_percentage, 45);
        assert_eq!(config.cavern.smoothing_rounds, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: DungeonConfig =
            serde_json::from_str(r#"{"width": 40, "kind": "cavern", "cavern": {"smoothing_rounds": 5}}"#)
                .unwrap();
        assert_eq!(config.width, 40);
        assert_eq!(config.height, 20);
        assert_eq!(config.kind, LevelKind::Cavern);
        assert_eq!(config.cavern.smoothing_rounds, 5);
        assert_eq!(config.cavern.solid_percentage, 45);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_json_round_trip() {
        let config = DungeonConfig {
            seed: Some(99),
            kind: LevelKind::Bsp,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"bsp\""));
        let back: DungeonConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_validate_rejects_small_bsp_map() {
        let config = DungeonConfig {
            width: 8,
            kind: LevelKind::Bsp,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DungeonError::DegenerateDimensions { width: 8, .. })
        ));

        // the same map is fine for caverns
        let cavern = DungeonConfig {
            kind: LevelKind::Cavern,
            ..config
        };
        assert!(cavern.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_solid_percentage() {
        let mut config = DungeonConfig::default();
        config.cavern.solid_percentage = 150;
        assert!(matches!(
            config.validate(),
            Err(DungeonError::DegenerateParameters { .. })
        ));
        config.kind = LevelKind::Bsp;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_random_kind_resolves() {
        let mut rng = GameRng::new(4);
        let mut seen_bsp = false;
        let mut seen_cavern = false;
        for _ in 0..64 {
            match LevelKind::Random.resolve(&mut rng) {
                LevelKind::Bsp => seen_bsp = true,
                LevelKind::Cavern => seen_cavern = true,
                LevelKind::Random => panic!("unresolved kind"),
            }
        }
        assert!(seen_bsp && seen_cavern);
        assert_eq!(LevelKind::Cavern.resolve(&mut rng), LevelKind::Cavern);
    }

    #[test]
    fn test_seeded_rng() {
        let config = DungeonConfig {
            seed: Some(17),
            ..Default::default()
        };
        assert_eq!(config.rng().seed(), 17);
    }
}
