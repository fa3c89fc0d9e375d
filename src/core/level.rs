//! Level configuration: grid size and how many cards make a match.
//!
//! A `Level` is plain data. It can be constructed (or deserialized) with any
//! values; the deck builder rejects invalid ones when a game is created.
//!
//! ```
//! use memory_match::core::{Level, LevelPreset};
//!
//! let classic = LevelPreset::Classic.level();
//! assert_eq!(classic, Level::new(4, 4, 2));
//! assert_eq!(classic.card_count(), 16);
//! assert_eq!(classic.group_count(), 8);
//!
//! assert!(Level::new(3, 3, 2).invalid_reason().is_some());
//! ```

use serde::{Deserialize, Serialize};

/// Immutable level configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Level {
    /// Number of grid columns.
    pub grid_width: u16,
    /// Number of grid rows.
    pub grid_height: u16,
    /// Cards that must share a symbol to count as a match (2 = pairs).
    pub group_size: u16,
}

impl Level {
    /// Create a level. Validity is checked at deck build time.
    #[must_use]
    pub const fn new(grid_width: u16, grid_height: u16, group_size: u16) -> Self {
        Self {
            grid_width,
            grid_height,
            group_size,
        }
    }

    /// Total number of cards on the grid.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.grid_width as usize * self.grid_height as usize
    }

    /// Number of symbol groups (and matches needed to finish).
    ///
    /// Only meaningful for valid levels; returns 0 when `group_size` is 0.
    #[must_use]
    pub const fn group_count(&self) -> usize {
        if self.group_size == 0 {
            0
        } else {
            self.card_count() / self.group_size as usize
        }
    }

    /// Why this level cannot be played, or `None` if it is valid.
    #[must_use]
    pub fn invalid_reason(&self) -> Option<&'static str> {
        if self.card_count() == 0 {
            Some("grid has no cells")
        } else if self.group_size < 2 {
            Some("group size must be at least 2")
        } else if self.card_count() % self.group_size as usize != 0 {
            Some("card count is not divisible by group size")
        } else {
            None
        }
    }

    /// Check if this level can be played.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.invalid_reason().is_none()
    }
}

impl Default for Level {
    fn default() -> Self {
        LevelPreset::Classic.level()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.group_size {
            2 => "pairs".to_string(),
            3 => "triples".to_string(),
            k => format!("{k} of a kind"),
        };
        write!(f, "{}x{} {}", self.grid_width, self.grid_height, kind)
    }
}

/// Named level presets offered by the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelPreset {
    /// 4x4 grid of pairs.
    Classic,
    /// 6x6 grid of pairs.
    Large,
    /// 6x4 grid of triples.
    Triples,
    /// 8x6 grid of quadruples.
    Expert,
}

impl LevelPreset {
    /// All presets in menu order.
    pub const ALL: [LevelPreset; 4] = [
        LevelPreset::Classic,
        LevelPreset::Large,
        LevelPreset::Triples,
        LevelPreset::Expert,
    ];

    /// The level this preset stands for.
    #[must_use]
    pub const fn level(self) -> Level {
        match self {
            LevelPreset::Classic => Level::new(4, 4, 2),
            LevelPreset::Large => Level::new(6, 6, 2),
            LevelPreset::Triples => Level::new(6, 4, 3),
            LevelPreset::Expert => Level::new(8, 6, 4),
        }
    }

    /// Display name, also used as the leaderboard level name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            LevelPreset::Classic => "Classic",
            LevelPreset::Large => "Large",
            LevelPreset::Triples => "Triples",
            LevelPreset::Expert => "Expert",
        }
    }

    /// Find the preset matching a level, if any.
    #[must_use]
    pub fn from_level(level: Level) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.level() == level)
    }
}
