use crate::club::PlayerPositionType;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// Plain roster entry handed over by the ingestion layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub position: String,
    pub endurance: f64,
}

impl PlayerRecord {
    pub fn new(name: &str, position: &str, endurance: f64) -> Self {
        PlayerRecord {
            name: name.to_string(),
            position: position.to_string(),
            endurance,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    name: String,
    position: PlayerPositionType,
    endurance: f64,
    endurance_max: f64,
    attack: f64,
    defense: f64,
}

impl Player {
    pub fn new(name: String, position: PlayerPositionType, endurance: f64) -> Self {
        let (attack, defense) = position.coefficients();

        Player {
            name,
            position,
            endurance,
            endurance_max: endurance,
            attack,
            defense,
        }
    }

    pub fn from_record(record: &PlayerRecord) -> Self {
        Player::new(
            record.name.trim().to_string(),
            PlayerPositionType::parse(&record.position),
            record.endurance,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> PlayerPositionType {
        self.position
    }

    pub fn endurance(&self) -> f64 {
        self.endurance
    }

    pub fn endurance_max(&self) -> f64 {
        self.endurance_max
    }

    pub fn attack(&self) -> f64 {
        self.attack
    }

    pub fn defense(&self) -> f64 {
        self.defense
    }

    /// Remaining endurance as a share of the starting value.
    pub fn endurance_ratio(&self) -> f64 {
        self.endurance / self.endurance_max
    }

    pub fn is_exhausted(&self, threshold: f64) -> bool {
        self.endurance < self.endurance_max * threshold
    }

    pub fn apply_fatigue(&mut self, amount: f64) {
        self.endurance = (self.endurance - amount).max(0.0);
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.position)
    }
}
