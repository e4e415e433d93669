use crate::r#match::MatchEvent;
use crate::Team;
use serde::Serialize;

/// Final state of a played match. Read-only once produced.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub home: Team,
    pub away: Team,
    pub events: Vec<MatchEvent>,
    pub log: Vec<String>,
    pub key_events: Vec<String>,
}

impl MatchResult {
    pub fn score_line(&self) -> String {
        format!(
            "{} {} - {} {}",
            self.home.name(),
            self.home.goals(),
            self.away.goals(),
            self.away.name()
        )
    }

    /// `None` on a draw.
    pub fn winner(&self) -> Option<&Team> {
        match self.home.goals().cmp(&self.away.goals()) {
            std::cmp::Ordering::Greater => Some(&self.home),
            std::cmp::Ordering::Less => Some(&self.away),
            std::cmp::Ordering::Equal => None,
        }
    }
}
