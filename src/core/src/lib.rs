//! Minute-by-minute football match simulation driven by player endurance
//! and position-based attack/defense weights.

pub mod club;
pub mod error;
pub mod r#match;

pub use club::{
    Player, PlayerPositionType, PlayerRecord, TacticalBalance, TacticalStyle, Team, TeamBuilder,
};
pub use error::*;
pub use r#match::{EventPlayer, MatchEvent, MatchResult, MatchSettings, MatchSimulator};
