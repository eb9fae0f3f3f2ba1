//! Complete levels and moving between them
//!
//! A [`LevelGenerator`] turns a [`DungeonConfig`] into finished levels with
//! both staircases placed. Taking a staircase throws the current level away and
//! generates a fresh one; levels are never kept or patched.

use serde::{Deserialize, Serialize};

use crate::creature::Player;
use crate::dungeon::{
    DungeonConfig, LevelKind, Staircases, add_staircases, generate_bsp_dungeon,
    generate_cavern_dungeon,
};
use crate::error::DungeonError;
use crate::grid::{CellType, Grid, is_type};
use crate::rng::GameRng;

/// A generated level ready to be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub grid: Grid,
    /// Generator that built the level, never `Random`
    pub kind: LevelKind,
    pub stairs: Staircases,
}

impl Level {
    /// Put the player on the first staircase of the given kind.
    /// Returns false if the level has none.
    pub fn place_on_staircase(&self, player: &mut Player, typ: CellType) -> bool {
        player.place_at_first_matching(&self.grid, &is_type(typ))
    }
}

/// Builds levels from a configuration and its own random source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelGenerator {
    config: DungeonConfig,
    rng: GameRng,
}

impl LevelGenerator {
    /// Validate the configuration and seed the generator from it
    pub fn new(config: DungeonConfig) -> Result<Self, DungeonError> {
        let rng = config.rng();
        Self::with_rng(config, rng)
    }

    /// Use an explicit random source instead of the configured seed
    pub fn with_rng(config: DungeonConfig, rng: GameRng) -> Result<Self, DungeonError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Generate a new level and place its staircases
    pub fn generate(&mut self) -> Result<Level, DungeonError> {
        let DungeonConfig {
            width,
            height,
            kind,
            bsp,
            cavern,
            ..
        } = self.config;

        let kind = kind.resolve(&mut self.rng);
        let mut grid = match kind {
            LevelKind::Bsp => generate_bsp_dungeon(
                width,
                height,
                bsp.min_node_width,
                bsp.min_node_height,
                &mut self.rng,
            )?,
            _ => generate_cavern_dungeon(
                width,
                height,
                cavern.solid_percentage,
                cavern.smoothing_rounds,
                &mut self.rng,
            )?,
        };
        let stairs = add_staircases(&mut grid, &mut self.rng)?;

        log::info!(
            "generated {:?} level {}x{}, up {:?} down {:?}",
            kind,
            width,
            height,
            stairs.up,
            stairs.down
        );
        Ok(Level { grid, kind, stairs })
    }

    /// Generate the first level and put the player on its up staircase
    pub fn start(&mut self, player: &mut Player) -> Result<Level, DungeonError> {
        let level = self.generate()?;
        level.place_on_staircase(player, CellType::StaircaseUp);
        Ok(level)
    }

    /// Use the staircase under the player.
    ///
    /// Standing on an up staircase generates a new level and puts the player on
    /// its down staircase, and the other way around. Anywhere else nothing
    /// happens and `Ok(None)` is returned.
    pub fn take_staircase(
        &mut self,
        level: &Level,
        player: &mut Player,
    ) -> Result<Option<Level>, DungeonError> {
        let here = level.grid.get(player.x, player.y)?;
        let Some(arrive_on) = here.typ.opposite_staircase() else {
            return Ok(None);
        };

        let next = self.generate()?;
        next.place_on_staircase(player, arrive_on);
        log::info!(
            "{} took the {} and arrived at ({}, {})",
            player.name,
            here.typ.description(),
            player.x,
            player.y
        );
        Ok(Some(next))
    }
}
