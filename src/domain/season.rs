//! Seasons of a TV series. A season is owned by exactly one series.

use super::fields::{positive, required_text};
use crate::error::ValidationError;

/// One season of a series. Seasons are identified by their number.
#[derive(Debug, Clone)]
pub struct Season {
    number: u32,
    episode_count: u32,
    premiere_date: String,
    finale_date: String,
    episodes: Vec<String>,
}

impl PartialEq for Season {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Season {}

impl Season {
    pub fn new(
        number: u32,
        episode_count: u32,
        premiere_date: &str,
        finale_date: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            number: positive("season number", number)?,
            episode_count: positive("episode count", episode_count)?,
            premiere_date: required_text("premiere date", premiere_date)?,
            finale_date: required_text("finale date", finale_date)?,
            episodes: Vec::new(),
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn episode_count(&self) -> u32 {
        self.episode_count
    }

    pub fn premiere_date(&self) -> &str {
        &self.premiere_date
    }

    pub fn finale_date(&self) -> &str {
        &self.finale_date
    }

    /// Episode names in insertion order (repeats allowed)
    pub fn episodes(&self) -> &[String] {
        &self.episodes
    }

    pub fn set_number(&mut self, number: u32) -> Result<(), ValidationError> {
        self.number = positive("season number", number)?;
        Ok(())
    }

    pub fn set_episode_count(&mut self, count: u32) -> Result<(), ValidationError> {
        self.episode_count = positive("episode count", count)?;
        Ok(())
    }

    pub fn set_premiere_date(&mut self, date: &str) -> Result<(), ValidationError> {
        self.premiere_date = required_text("premiere date", date)?;
        Ok(())
    }

    pub fn set_finale_date(&mut self, date: &str) -> Result<(), ValidationError> {
        self.finale_date = required_text("finale date", date)?;
        Ok(())
    }

    /// Append an episode name. Blank names are ignored; duplicates are kept.
    pub fn add_episode(&mut self, name: &str) {
        let name = name.trim();
        if !name.is_empty() {
            self.episodes.push(name.to_string());
        }
    }

    /// Remove the first episode with this name. Returns whether one was removed.
    pub fn remove_episode(&mut self, name: &str) -> bool {
        match self.episodes.iter().position(|e| e == name) {
            Some(pos) => {
                self.episodes.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn has_episode(&self, name: &str) -> bool {
        self.episodes.iter().any(|e| e == name)
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Season {} ({} episodes) - {} to {}",
            self.number, self.episode_count, self.premiere_date, self.finale_date
        )
    }
}
