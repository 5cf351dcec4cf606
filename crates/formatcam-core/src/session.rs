//! Shooting session state.
//!
//! In **practice** mode every shot is saved straight away. In **film** mode
//! shots accumulate on a roll of fixed capacity; once full the roll has to be
//! developed (or abandoned) before shooting continues. The format is locked
//! only while in film mode with shots on the roll; dropping to practice mode
//! unlocks it, so a resumed roll can mix formats.
//!
//! The session is a plain value. Callers persist it (it is serde-friendly)
//! and pass it to whatever needs it.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::defaults;
use crate::grid::GridVariant;
use crate::library::RollId;
use crate::ratio::AspectRatio;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The format cannot change once the first frame of a roll is exposed.
    #[error("Format is locked while a roll is in progress ({shots_taken} shots taken)")]
    RatioLocked { shots_taken: u32 },

    #[error("Roll is full ({capacity} shots); develop it first")]
    RollFull { capacity: u32 },

    #[error("No shots on the roll")]
    EmptyRoll,

    #[error("Not in film mode")]
    NotFilmMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShootingMode {
    /// Free composition practice, single shots.
    #[default]
    Practice,
    /// Deliberate shooting on a fixed-size roll.
    Film,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub roll_capacity: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            roll_capacity: defaults::ROLL_CAPACITY,
        }
    }
}

/// A roll that has just been developed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopedRoll {
    pub id: RollId,
    /// Format selected when the roll was developed.
    pub ratio: AspectRatio,
    pub shots: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub mode: ShootingMode,
    pub shots_taken: u32,
    /// At least 1.
    #[serde(deserialize_with = "deserialize_capacity")]
    pub roll_capacity: u32,
    pub ratio: AspectRatio,
    pub grid: GridVariant,
    pub last_developed_roll: Option<RollId>,
}

fn deserialize_capacity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(u32::deserialize(deserializer)?.max(1))
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            mode: ShootingMode::Practice,
            shots_taken: 0,
            roll_capacity: config.roll_capacity.max(1),
            ratio: AspectRatio::default(),
            grid: GridVariant::default(),
            last_developed_roll: None,
        }
    }

    /// True once a film roll has at least one exposure.
    pub fn roll_started(&self) -> bool {
        self.mode == ShootingMode::Film && self.shots_taken > 0
    }

    pub fn roll_full(&self) -> bool {
        self.shots_taken >= self.roll_capacity
    }

    /// Whether the shutter is available.
    pub fn can_shoot(&self) -> bool {
        match self.mode {
            ShootingMode::Practice => true,
            ShootingMode::Film => !self.roll_full(),
        }
    }

    pub fn can_develop(&self) -> bool {
        self.mode == ShootingMode::Film && self.roll_full()
    }

    /// Whether the format button is enabled.
    pub fn can_change_ratio(&self) -> bool {
        !self.roll_started()
    }

    /// Film counter text, e.g. `3 / 12`.
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.shots_taken, self.roll_capacity)
    }

    /// Switch to the next format.
    pub fn cycle_ratio(&mut self) -> Result<AspectRatio, SessionError> {
        if !self.can_change_ratio() {
            return Err(SessionError::RatioLocked {
                shots_taken: self.shots_taken,
            });
        }
        self.ratio = self.ratio.next();
        Ok(self.ratio)
    }

    /// Switch to the next grid. Grids never affect the saved photo, so this
    /// is always allowed.
    pub fn cycle_grid(&mut self) -> GridVariant {
        self.grid = self.grid.next();
        self.grid
    }

    pub fn set_grid(&mut self, grid: GridVariant) {
        self.grid = grid;
    }

    /// Change mode. Returns false when already in `mode`.
    ///
    /// Shots already on the roll are kept, so switching back to film
    /// resumes the same roll.
    pub fn set_mode(&mut self, mode: ShootingMode) -> bool {
        if self.mode == mode {
            return false;
        }
        debug!(?mode, shots_taken = self.shots_taken, "shooting mode changed");
        self.mode = mode;
        true
    }

    /// Count a completed capture. Returns the new shot count.
    ///
    /// Practice shots are not counted.
    pub fn record_shot(&mut self) -> Result<u32, SessionError> {
        if self.mode == ShootingMode::Practice {
            return Ok(self.shots_taken);
        }
        if self.roll_full() {
            return Err(SessionError::RollFull {
                capacity: self.roll_capacity,
            });
        }
        self.shots_taken += 1;
        Ok(self.shots_taken)
    }

    /// Close the current roll under `id`.
    ///
    /// Resets the counter and returns to practice mode.
    pub fn develop(&mut self, id: RollId) -> Result<DevelopedRoll, SessionError> {
        if self.mode != ShootingMode::Film {
            return Err(SessionError::NotFilmMode);
        }
        if self.shots_taken == 0 {
            return Err(SessionError::EmptyRoll);
        }

        let roll = DevelopedRoll {
            id: id.clone(),
            ratio: self.ratio,
            shots: self.shots_taken,
        };
        debug!(roll = %roll.id, shots = roll.shots, "roll developed");

        self.shots_taken = 0;
        self.mode = ShootingMode::Practice;
        self.last_developed_roll = Some(id);
        Ok(roll)
    }

    /// Throw the current roll away. Returns how many shots were discarded.
    pub fn abandon_roll(&mut self) -> u32 {
        let dropped = std::mem::take(&mut self.shots_taken);
        debug!(dropped, "roll abandoned");
        dropped
    }
}
