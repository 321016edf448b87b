use serde::{Deserialize, Serialize};
use std::fmt;

/// How a single hole went relative to its par.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum HoleScore {
    Condor,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    /// Four or more over.
    Other,
}

impl HoleScore {
    #[must_use]
    pub fn from_diff(diff: i32) -> Self {
        match diff {
            i32::MIN..=-4 => HoleScore::Condor,
            -3 => HoleScore::Albatross,
            -2 => HoleScore::Eagle,
            -1 => HoleScore::Birdie,
            0 => HoleScore::Par,
            1 => HoleScore::Bogey,
            2 => HoleScore::DoubleBogey,
            3 => HoleScore::TripleBogey,
            _ => HoleScore::Other,
        }
    }

    #[must_use]
    pub fn classify(stroke: i32, par: i32) -> Self {
        Self::from_diff(stroke - par)
    }
}

impl From<i32> for HoleScore {
    fn from(value: i32) -> Self {
        Self::from_diff(value)
    }
}

impl fmt::Display for HoleScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HoleScore::Condor => "condor",
            HoleScore::Albatross => "albatross",
            HoleScore::Eagle => "eagle",
            HoleScore::Birdie => "birdie",
            HoleScore::Par => "par",
            HoleScore::Bogey => "bogey",
            HoleScore::DoubleBogey => "double bogey",
            HoleScore::TripleBogey => "triple bogey",
            HoleScore::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// `E` for even, otherwise a signed difference (`+2`, `-1`).
#[must_use]
pub fn format_diff(diff: i32) -> String {
    match diff {
        0 => "E".to_string(),
        d if d > 0 => format!("+{d}"),
        d => d.to_string(),
    }
}
