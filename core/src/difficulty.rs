use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Preset board sizes offered at startup.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    pub const fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::new_unchecked(9, 9, 10),
            Self::Intermediate => GameConfig::new_unchecked(16, 16, 40),
            Self::Expert => GameConfig::new_unchecked(16, 30, 99),
        }
    }

    /// Menu key used to pick this preset.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Beginner => "1",
            Self::Intermediate => "2",
            Self::Expert => "3",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "primary",
            Self::Intermediate => "middle",
            Self::Expert => "advanced",
        }
    }

    /// Parses a menu selection, see [`Difficulty::from_choice`] for the lenient variant.
    pub fn parse(choice: &str) -> Option<Self> {
        let choice = choice.trim();
        Self::ALL.into_iter().find(|difficulty| {
            choice == difficulty.key()
                || choice.eq_ignore_ascii_case(difficulty.label())
                || choice.eq_ignore_ascii_case(difficulty.name())
        })
    }

    /// Unknown selections fall back to [`Difficulty::Beginner`].
    pub fn from_choice(choice: &str) -> Self {
        Self::parse(choice).unwrap_or_else(|| {
            log::warn!("Unknown difficulty {:?}, fallback to beginner", choice);
            Self::default()
        })
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let GameConfig { rows, cols, mines } = self.config();
        write!(f, "{}({}x{}, {} mines)", self.label(), cols, rows, mines)
    }
}
