use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerPositionType {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
    Unknown,
}

impl PlayerPositionType {
    /// Maps a roster label to a position. Anything unrecognized becomes `Unknown`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "goalkeeper" | "gk" | "portero" => PlayerPositionType::Goalkeeper,
            "defender" | "df" | "defensa" => PlayerPositionType::Defender,
            "midfielder" | "mf" | "mediocampista" => PlayerPositionType::Midfielder,
            "forward" | "fw" | "delantero" => PlayerPositionType::Forward,
            _ => PlayerPositionType::Unknown,
        }
    }

    /// Returns `(attack, defense)` for this position. The pair always sums to 1.
    pub fn coefficients(&self) -> (f64, f64) {
        match self {
            PlayerPositionType::Goalkeeper | PlayerPositionType::Defender => (0.2, 0.8),
            PlayerPositionType::Midfielder | PlayerPositionType::Unknown => (0.5, 0.5),
            PlayerPositionType::Forward => (0.8, 0.2),
        }
    }
}

impl Display for PlayerPositionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            PlayerPositionType::Goalkeeper => "GOALKEEPER",
            PlayerPositionType::Defender => "DEFENDER",
            PlayerPositionType::Midfielder => "MIDFIELDER",
            PlayerPositionType::Forward => "FORWARD",
            PlayerPositionType::Unknown => "UNKNOWN",
        };

        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        let positions = [
            PlayerPositionType::Goalkeeper,
            PlayerPositionType::Defender,
            PlayerPositionType::Midfielder,
            PlayerPositionType::Forward,
            PlayerPositionType::Unknown,
        ];

        for position in positions {
            let (attack, defense) = position.coefficients();
            assert!(
                (attack + defense - 1.0).abs() < 1e-9,
                "{} coefficients do not sum to 1",
                position
            );
        }
    }

    #[test]
    fn test_coefficients_by_position() {
        assert_eq!(PlayerPositionType::Goalkeeper.coefficients(), (0.2, 0.8));
        assert_eq!(PlayerPositionType::Defender.coefficients(), (0.2, 0.8));
        assert_eq!(PlayerPositionType::Midfielder.coefficients(), (0.5, 0.5));
        assert_eq!(PlayerPositionType::Forward.coefficients(), (0.8, 0.2));
        assert_eq!(PlayerPositionType::Unknown.coefficients(), (0.5, 0.5));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(PlayerPositionType::parse("FORWARD"), PlayerPositionType::Forward);
        assert_eq!(PlayerPositionType::parse("  Defender "), PlayerPositionType::Defender);
        assert_eq!(PlayerPositionType::parse("goalkeeper"), PlayerPositionType::Goalkeeper);
    }

    #[test]
    fn test_parse_accepts_spanish_labels() {
        assert_eq!(PlayerPositionType::parse("Portero"), PlayerPositionType::Goalkeeper);
        assert_eq!(PlayerPositionType::parse("defensa"), PlayerPositionType::Defender);
        assert_eq!(PlayerPositionType::parse("MEDIOCAMPISTA"), PlayerPositionType::Midfielder);
        assert_eq!(PlayerPositionType::parse("delantero"), PlayerPositionType::Forward);
    }

    #[test]
    fn test_unrecognized_position_is_unknown() {
        let position = PlayerPositionType::parse("libero");

        assert_eq!(position, PlayerPositionType::Unknown);
        assert_eq!(position.coefficients(), (0.5, 0.5));
        assert_eq!(PlayerPositionType::parse(""), PlayerPositionType::Unknown);
    }
}
