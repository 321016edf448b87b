use serde::{Deserialize, Serialize};

use super::generate_id;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
    /// One slot per hole of the round; `None` is a hole not yet played.
    pub strokes: Vec<Option<i32>>,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, holes: usize) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            strokes: vec![None; holes],
        }
    }

    /// Same name, new id, every stroke cleared.
    #[must_use]
    pub fn fresh_copy(&self, holes: usize) -> Self {
        Self::new(self.name.clone(), holes)
    }

    pub(crate) fn resize_strokes(&mut self, holes: usize) {
        self.strokes.resize(holes, None);
    }

    #[must_use]
    pub fn holes_played(&self) -> usize {
        self.strokes.iter().filter(|s| s.is_some()).count()
    }
}
