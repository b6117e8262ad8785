use serde::{Deserialize, Serialize};

use crate::wire::WireEnum;

/// AI proficiency, or who controls the unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Average,
    Good,
    High,
    Excellent,
    Random,
    Player,
    Client,
}

impl Skill {
    /// Map a 0..1 proficiency onto the four AI skill levels.
    /// Negative or NaN input yields `Random`.
    pub fn from_percentage(p: f64) -> Skill {
        if (0.0..0.25).contains(&p) {
            Skill::Average
        } else if (0.25..0.5).contains(&p) {
            Skill::Good
        } else if (0.5..0.75).contains(&p) {
            Skill::High
        } else if p >= 0.75 {
            Skill::Excellent
        } else {
            Skill::Random
        }
    }

    pub fn is_human(self) -> bool {
        matches!(self, Skill::Player | Skill::Client)
    }
}

impl WireEnum for Skill {
    const ALL: &'static [Self] = &[
        Skill::Average,
        Skill::Good,
        Skill::High,
        Skill::Excellent,
        Skill::Random,
        Skill::Player,
        Skill::Client,
    ];

    fn tag(self) -> &'static str {
        match self {
            Skill::Average => "Average",
            Skill::Good => "Good",
            Skill::High => "High",
            Skill::Excellent => "Excellent",
            Skill::Random => "Random",
            Skill::Player => "Player",
            Skill::Client => "Client",
        }
    }
}
