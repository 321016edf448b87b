use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{
    DEFAULT_RATING, DEFAULT_SLOPE, MAX_PAR, MAX_RATING, MAX_SLOPE, MIN_PAR, MIN_RATING, MIN_SLOPE,
    STANDARD_9_PARS, STANDARD_18_PARS,
};
use crate::error::Rejection;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Course {
    #[serde(default)]
    pub name: String,
    pub rating: f64,
    pub slope: i32,
    pub pars: Vec<i32>,
}

impl Default for Course {
    fn default() -> Self {
        Self {
            name: String::new(),
            rating: DEFAULT_RATING,
            slope: DEFAULT_SLOPE,
            pars: STANDARD_18_PARS.to_vec(),
        }
    }
}

impl Course {
    /// Sum of the pars for the first `holes` holes.
    #[must_use]
    pub fn par_total(&self, holes: usize) -> i32 {
        self.pars.iter().take(holes).sum()
    }

    /// # Errors
    ///
    /// Returns `Rejection::RatingOutOfRange` if `raw` is not a decimal in 67.0..=77.0.
    pub fn set_rating(&mut self, raw: &str) -> Result<(), Rejection> {
        let rating = parse_rating(raw)?;
        self.rating = rating;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Rejection::SlopeOutOfRange` if `raw` is not an integer in 55..=155.
    pub fn set_slope(&mut self, raw: &str) -> Result<(), Rejection> {
        let slope = parse_slope(raw)?;
        self.slope = slope;
        Ok(())
    }

    pub fn apply_preset(&mut self, preset: ParPreset) {
        self.pars = preset.pars().to_vec();
    }
}

pub(crate) fn parse_rating(raw: &str) -> Result<f64, Rejection> {
    match raw.trim().parse::<f64>() {
        Ok(v) if rating_in_range(v) => Ok(v),
        _ => Err(Rejection::RatingOutOfRange(raw.trim().to_string())),
    }
}

pub(crate) fn parse_slope(raw: &str) -> Result<i32, Rejection> {
    match raw.trim().parse::<i32>() {
        Ok(v) if slope_in_range(v) => Ok(v),
        _ => Err(Rejection::SlopeOutOfRange(raw.trim().to_string())),
    }
}

pub(crate) fn rating_in_range(rating: f64) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

pub(crate) fn slope_in_range(slope: i32) -> bool {
    (MIN_SLOPE..=MAX_SLOPE).contains(&slope)
}

pub(crate) fn par_in_range(par: i32) -> bool {
    (MIN_PAR..=MAX_PAR).contains(&par)
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParPreset {
    Standard18,
    Standard9,
}

impl ParPreset {
    #[must_use]
    pub fn pars(self) -> &'static [i32] {
        match self {
            ParPreset::Standard18 => &STANDARD_18_PARS,
            ParPreset::Standard9 => &STANDARD_9_PARS,
        }
    }
}

impl FromStr for ParPreset {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard18" | "18" => Ok(ParPreset::Standard18),
            "standard9" | "9" => Ok(ParPreset::Standard9),
            other => Err(Rejection::UnknownPreset(other.to_string())),
        }
    }
}

impl fmt::Display for ParPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParPreset::Standard18 => "standard18",
            ParPreset::Standard9 => "standard9",
        };
        write!(f, "{s}")
    }
}
