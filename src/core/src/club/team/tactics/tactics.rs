use crate::club::Player;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TacticalStyle {
    Offensive,
    Defensive,
    Balanced,
    /// Nothing computed yet.
    Neutral,
}

impl TacticalStyle {
    pub fn is_offensive(&self) -> bool {
        *self == TacticalStyle::Offensive
    }
}

impl Display for TacticalStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let label = match self {
            TacticalStyle::Offensive => "OFFENSIVE",
            TacticalStyle::Defensive => "DEFENSIVE",
            TacticalStyle::Balanced => "BALANCED",
            TacticalStyle::Neutral => "NEUTRAL",
        };

        write!(f, "{}", label)
    }
}

/// Summed attack and defense weights of the players on the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TacticalBalance {
    pub attack: f64,
    pub defense: f64,
}

impl TacticalBalance {
    pub fn from_players(players: &[Player]) -> Self {
        players
            .iter()
            .fold(TacticalBalance::default(), |balance, player| TacticalBalance {
                attack: balance.attack + player.attack(),
                defense: balance.defense + player.defense(),
            })
    }

    pub fn classify(&self, margin: f64) -> TacticalStyle {
        if self.attack > self.defense + margin {
            TacticalStyle::Offensive
        } else if self.defense > self.attack + margin {
            TacticalStyle::Defensive
        } else {
            TacticalStyle::Balanced
        }
    }
}
