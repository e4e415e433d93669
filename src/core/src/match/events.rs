use crate::club::{Player, PlayerPositionType, TacticalStyle};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventPlayer {
    pub name: String,
    pub position: PlayerPositionType,
}

impl From<&Player> for EventPlayer {
    fn from(player: &Player) -> Self {
        EventPlayer {
            name: player.name().to_string(),
            position: player.position(),
        }
    }
}

impl Display for EventPlayer {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.position)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MatchEvent {
    KickOff {
        home: String,
        away: String,
    },
    Substitution {
        team: String,
        minute: u32,
        outgoing: EventPlayer,
        incoming: EventPlayer,
    },
    Goal {
        team: String,
        minute: u32,
        scorer: EventPlayer,
    },
    TacticsSummary {
        minute: u32,
        home: String,
        home_style: TacticalStyle,
        away: String,
        away_style: TacticalStyle,
    },
    FullTime,
}

impl MatchEvent {
    /// Goals and substitutions make up the key event digest.
    pub fn is_key(&self) -> bool {
        matches!(self, MatchEvent::Goal { .. } | MatchEvent::Substitution { .. })
    }
}

impl Display for MatchEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            MatchEvent::KickOff { home, away } => {
                write!(f, "--- KICK-OFF: {} vs {} ---", home, away)
            }
            MatchEvent::Substitution {
                team,
                minute,
                outgoing,
                incoming,
            } => write!(
                f,
                "SUBSTITUTION for {} at min {}: {} off tired, {} on.",
                team, minute, outgoing, incoming
            ),
            MatchEvent::Goal {
                team,
                minute,
                scorer,
            } => write!(f, "GOAL for {}! (Min {}) - {}", team, minute, scorer),
            MatchEvent::TacticsSummary {
                minute,
                home,
                home_style,
                away,
                away_style,
            } => write!(
                f,
                "Min {} | Tactics -> {}: {} vs {}: {}",
                minute, home, home_style, away, away_style
            ),
            MatchEvent::FullTime => write!(f, "--- FULL TIME ---"),
        }
    }
}
