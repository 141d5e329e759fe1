//! The five concrete kinds of content.
//!
//! Each variant embeds a [`ContentBase`] and adds its own validated fields.
//! Sub-entity collections are owned by the variant and only change through
//! the `add_*` / `remove_*` methods; readers get slices.

use std::str::FromStr;

use super::content::ContentBase;
use super::fields::{canonical, positive, required_text};
use super::people::{Actor, Researcher};
use super::season::Season;
use crate::error::ValidationError;

/// Budget below which a non-student short counts as independent
pub const INDEPENDENT_BUDGET_LIMIT: u64 = 50_000;

// ============================================================================
// Movie
// ============================================================================

/// A feature film with a studio and a cast
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub(crate) base: ContentBase,
    studio: String,
    actors: Vec<Actor>,
}

impl Movie {
    /// Build a movie; fails if the studio is blank
    pub fn new(base: ContentBase, studio: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            base,
            studio: required_text("studio", studio)?,
            actors: Vec::new(),
        })
    }

    /// Shared record fields
    pub fn base(&self) -> &ContentBase {
        &self.base
    }

    /// Shared record fields, for the validating setters on [`ContentBase`]
    pub fn base_mut(&mut self) -> &mut ContentBase {
        &mut self.base
    }

    pub fn studio(&self) -> &str {
        &self.studio
    }

    /// Replace the studio, keeping the old one on error
    pub fn set_studio(&mut self, studio: &str) -> Result<(), ValidationError> {
        self.studio = required_text("studio", studio)?;
        Ok(())
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Add an actor to the cast. Returns false if already present.
    pub fn add_actor(&mut self, actor: Actor) -> bool {
        if self.actors.contains(&actor) {
            return false;
        }
        self.actors.push(actor);
        true
    }

    /// Remove an actor. Returns false if not in the cast.
    pub fn remove_actor(&mut self, actor: &Actor) -> bool {
        let before = self.actors.len();
        self.actors.retain(|a| a != actor);
        self.actors.len() != before
    }

    pub fn has_actor(&self, actor: &Actor) -> bool {
        self.actors.contains(actor)
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }
}

// ============================================================================
// TV series
// ============================================================================

/// A TV series. `duration_minutes` is the length of one episode.
#[derive(Debug, Clone, PartialEq)]
pub struct TvSeries {
    pub(crate) base: ContentBase,
    season_count: u32,
    seasons: Vec<Season>,
}

impl TvSeries {
    /// Build a series; fails unless `season_count` is positive
    pub fn new(base: ContentBase, season_count: u32) -> Result<Self, ValidationError> {
        Ok(Self {
            base,
            season_count: positive("season count", season_count)?,
            seasons: Vec::new(),
        })
    }

    /// Shared record fields
    pub fn base(&self) -> &ContentBase {
        &self.base
    }

    /// Shared record fields, for the validating setters on [`ContentBase`]
    pub fn base_mut(&mut self) -> &mut ContentBase {
        &mut self.base
    }

    pub fn season_count(&self) -> u32 {
        self.season_count
    }

    /// Replace the declared season count, keeping the old one on error
    pub fn set_season_count(&mut self, count: u32) -> Result<(), ValidationError> {
        self.season_count = positive("season count", count)?;
        Ok(())
    }

    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    /// Attach a season. Returns false if a season with the same number exists.
    pub fn add_season(&mut self, season: Season) -> bool {
        if self.seasons.contains(&season) {
            return false;
        }
        self.seasons.push(season);
        true
    }

    /// Detach the season with this number
    pub fn remove_season(&mut self, number: u32) -> Option<Season> {
        let pos = self.seasons.iter().position(|s| s.number() == number)?;
        Some(self.seasons.remove(pos))
    }

    /// Look up a season by number
    pub fn season(&self, number: u32) -> Option<&Season> {
        self.seasons.iter().find(|s| s.number() == number)
    }

    /// Sum of the declared episode counts of attached seasons
    pub fn total_episodes(&self) -> u32 {
        self.seasons.iter().map(Season::episode_count).sum()
    }
}

// ============================================================================
// Documentary
// ============================================================================

/// A documentary on a topic, with associated researchers
#[derive(Debug, Clone, PartialEq)]
pub struct Documentary {
    pub(crate) base: ContentBase,
    topic: String,
    researchers: Vec<Researcher>,
}

impl Documentary {
    /// Build a documentary; fails if the topic is blank
    pub fn new(base: ContentBase, topic: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            base,
            topic: required_text("topic", topic)?,
            researchers: Vec::new(),
        })
    }

    /// Shared record fields
    pub fn base(&self) -> &ContentBase {
        &self.base
    }

    /// Shared record fields, for the validating setters on [`ContentBase`]
    pub fn base_mut(&mut self) -> &mut ContentBase {
        &mut self.base
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Replace the topic, keeping the old one on error
    pub fn set_topic(&mut self, topic: &str) -> Result<(), ValidationError> {
        self.topic = required_text("topic", topic)?;
        Ok(())
    }

    pub fn researchers(&self) -> &[Researcher] {
        &self.researchers
    }

    /// Associate a researcher. Returns false if already present.
    pub fn add_researcher(&mut self, researcher: Researcher) -> bool {
        if self.researchers.contains(&researcher) {
            return false;
        }
        self.researchers.push(researcher);
        true
    }

    /// Remove a researcher. Returns false if not associated.
    pub fn remove_researcher(&mut self, researcher: &Researcher) -> bool {
        let before = self.researchers.len();
        self.researchers.retain(|r| r != researcher);
        self.researchers.len() != before
    }

    pub fn has_researcher(&self, researcher: &Researcher) -> bool {
        self.researchers.contains(researcher)
    }

    pub fn researcher_count(&self) -> usize {
        self.researchers.len()
    }
}

// ============================================================================
// Short film
// ============================================================================

/// How a short was shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilmingTechnique {
    Digital,
    Analog,
    Mixed,
}

impl FilmingTechnique {
    const CHOICES: [(&'static str, FilmingTechnique); 3] = [
        ("Digital", FilmingTechnique::Digital),
        ("Analog", FilmingTechnique::Analog),
        ("Mixed", FilmingTechnique::Mixed),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilmingTechnique::Digital => "Digital",
            FilmingTechnique::Analog => "Analog",
            FilmingTechnique::Mixed => "Mixed",
        }
    }
}

impl std::fmt::Display for FilmingTechnique {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilmingTechnique {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        canonical("filming technique", s, &Self::CHOICES)
    }
}

/// Derived production category of a short film
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortFilmCategory {
    Student,
    Independent,
    Professional,
}

impl std::fmt::Display for ShortFilmCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShortFilmCategory::Student => write!(f, "Student"),
            ShortFilmCategory::Independent => write!(f, "Independent"),
            ShortFilmCategory::Professional => write!(f, "Professional"),
        }
    }
}

/// A short film shown at a festival
#[derive(Debug, Clone, PartialEq)]
pub struct ShortFilm {
    pub(crate) base: ContentBase,
    director: String,
    festival: String,
    is_student_work: bool,
    technique: FilmingTechnique,
    budget: u64,
    awards: Vec<String>,
}

impl ShortFilm {
    /// Build a short film; `technique` is matched case-insensitively
    pub fn new(
        base: ContentBase,
        director: &str,
        festival: &str,
        is_student_work: bool,
        technique: &str,
        budget: u64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            base,
            director: required_text("director", director)?,
            festival: required_text("festival", festival)?,
            is_student_work,
            technique: technique.parse()?,
            budget,
            awards: Vec::new(),
        })
    }

    /// Shared record fields
    pub fn base(&self) -> &ContentBase {
        &self.base
    }

    /// Shared record fields, for the validating setters on [`ContentBase`]
    pub fn base_mut(&mut self) -> &mut ContentBase {
        &mut self.base
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn festival(&self) -> &str {
        &self.festival
    }

    pub fn is_student_work(&self) -> bool {
        self.is_student_work
    }

    pub fn technique(&self) -> FilmingTechnique {
        self.technique
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }

    /// Replace the director, keeping the old one on error
    pub fn set_director(&mut self, director: &str) -> Result<(), ValidationError> {
        self.director = required_text("director", director)?;
        Ok(())
    }

    /// Replace the festival, keeping the old one on error
    pub fn set_festival(&mut self, festival: &str) -> Result<(), ValidationError> {
        self.festival = required_text("festival", festival)?;
        Ok(())
    }

    pub fn set_student_work(&mut self, is_student_work: bool) {
        self.is_student_work = is_student_work;
    }

    /// Replace the filming technique, keeping the old one on error
    pub fn set_technique(&mut self, technique: &str) -> Result<(), ValidationError> {
        self.technique = technique.parse()?;
        Ok(())
    }

    pub fn set_budget(&mut self, budget: u64) {
        self.budget = budget;
    }

    /// Awards in the order they were won
    pub fn awards(&self) -> &[String] {
        &self.awards
    }

    /// Record an award. Blank or already-listed awards are ignored.
    pub fn add_award(&mut self, award: &str) -> bool {
        let award = award.trim();
        if award.is_empty() || self.awards.iter().any(|a| a == award) {
            return false;
        }
        self.awards.push(award.to_string());
        true
    }

    /// Remove an award. Returns false if it was not listed.
    pub fn remove_award(&mut self, award: &str) -> bool {
        let before = self.awards.len();
        self.awards.retain(|a| a != award.trim());
        self.awards.len() != before
    }

    pub fn has_awards(&self) -> bool {
        !self.awards.is_empty()
    }

    /// Student work wins over budget; otherwise the budget decides
    pub fn category(&self) -> ShortFilmCategory {
        if self.is_student_work {
            ShortFilmCategory::Student
        } else if self.budget < INDEPENDENT_BUDGET_LIMIT {
            ShortFilmCategory::Independent
        } else {
            ShortFilmCategory::Professional
        }
    }
}

// ============================================================================
// Online video
// ============================================================================

/// Published resolution of an online video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoQuality {
    P480,
    P720,
    P1080,
    P1440,
    Uhd4k,
}

impl VideoQuality {
    const CHOICES: [(&'static str, VideoQuality); 5] = [
        ("480p", VideoQuality::P480),
        ("720p", VideoQuality::P720),
        ("1080p", VideoQuality::P1080),
        ("1440p", VideoQuality::P1440),
        ("4K", VideoQuality::Uhd4k),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VideoQuality::P480 => "480p",
            VideoQuality::P720 => "720p",
            VideoQuality::P1080 => "1080p",
            VideoQuality::P1440 => "1440p",
            VideoQuality::Uhd4k => "4K",
        }
    }
}

impl Default for VideoQuality {
    fn default() -> Self {
        Self::P720
    }
}

impl std::fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoQuality {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        canonical("quality", s, &Self::CHOICES)
    }
}

/// A video published on an online channel
#[derive(Debug, Clone, PartialEq)]
pub struct OnlineVideo {
    pub(crate) base: ContentBase,
    channel: String,
    view_count: u64,
    like_count: u64,
    publication_date: String,
    quality: VideoQuality,
}

impl OnlineVideo {
    /// Build a video; `quality` is matched case-insensitively
    pub fn new(
        base: ContentBase,
        channel: &str,
        view_count: u64,
        like_count: u64,
        publication_date: &str,
        quality: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            base,
            channel: required_text("channel", channel)?,
            view_count,
            like_count,
            publication_date: required_text("publication date", publication_date)?,
            quality: quality.parse()?,
        })
    }

    /// Shared record fields
    pub fn base(&self) -> &ContentBase {
        &self.base
    }

    /// Shared record fields, for the validating setters on [`ContentBase`]
    pub fn base_mut(&mut self) -> &mut ContentBase {
        &mut self.base
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn view_count(&self) -> u64 {
        self.view_count
    }

    pub fn like_count(&self) -> u64 {
        self.like_count
    }

    pub fn publication_date(&self) -> &str {
        &self.publication_date
    }

    pub fn quality(&self) -> VideoQuality {
        self.quality
    }

    /// Replace the channel, keeping the old one on error
    pub fn set_channel(&mut self, channel: &str) -> Result<(), ValidationError> {
        self.channel = required_text("channel", channel)?;
        Ok(())
    }

    pub fn set_view_count(&mut self, views: u64) {
        self.view_count = views;
    }

    pub fn set_like_count(&mut self, likes: u64) {
        self.like_count = likes;
    }

    /// Replace the publication date, keeping the old one on error
    pub fn set_publication_date(&mut self, date: &str) -> Result<(), ValidationError> {
        self.publication_date = required_text("publication date", date)?;
        Ok(())
    }

    /// Replace the quality, keeping the old one on error
    pub fn set_quality(&mut self, quality: &str) -> Result<(), ValidationError> {
        self.quality = quality.parse()?;
        Ok(())
    }

    /// Count one more view (saturating)
    pub fn increment_views(&mut self) {
        self.view_count = self.view_count.saturating_add(1);
    }

    /// Count one more like (saturating)
    pub fn increment_likes(&mut self) {
        self.like_count = self.like_count.saturating_add(1);
    }

    /// Likes as a percentage of views; 0 for an unwatched video
    pub fn like_ratio(&self) -> f64 {
        if self.view_count == 0 {
            return 0.0;
        }
        self.like_count as f64 / self.view_count as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::ContentId;

    fn base(title: &str) -> ContentBase {
        ContentBase::new(ContentId::new(1).unwrap(), title, 90, "Drama").unwrap()
    }

    fn short(student: bool, budget: u64) -> ShortFilm {
        ShortFilm::new(base("Short"), "Dir", "Fest", student, "digital", budget).unwrap()
    }

    #[test]
    fn test_movie_requires_studio() {
        let err = Movie::new(base("Avatar"), "  ").unwrap_err();
        assert_eq!(err.field, "studio");
    }

    #[test]
    fn test_movie_actor_add_is_idempotent() {
        let mut movie = Movie::new(base("Avatar"), "20th Century").unwrap();
        let actor = Actor::new("Sam Worthington", 47, "Australian", "Principal").unwrap();
        assert!(movie.add_actor(actor.clone()));
        assert!(!movie.add_actor(actor.clone()));
        assert_eq!(movie.actor_count(), 1);
        assert!(movie.remove_actor(&actor));
        assert!(!movie.has_actor(&actor));
    }

    #[test]
    fn test_series_seasons_and_episode_total() {
        let mut series = TvSeries::new(base("Got"), 8).unwrap();
        assert!(series.add_season(Season::new(1, 10, "2011", "2011").unwrap()));
        assert!(series.add_season(Season::new(2, 10, "2012", "2012").unwrap()));
        assert!(!series.add_season(Season::new(2, 7, "2017", "2017").unwrap()));
        assert_eq!(series.total_episodes(), 20);
        assert_eq!(series.season(2).unwrap().premiere_date(), "2012");
        assert!(series.remove_season(1).is_some());
        assert!(series.season(1).is_none());
    }

    #[test]
    fn test_series_rejects_zero_seasons() {
        assert_eq!(
            TvSeries::new(base("X"), 0).unwrap_err().field,
            "season count"
        );
    }

    #[test]
    fn test_documentary_researchers_deduplicate() {
        let mut doc = Documentary::new(base("Cosmos"), "Astronomy").unwrap();
        let r = Researcher::new("Carl Sagan", "Astronomy", "Cornell", 30, "Dr.").unwrap();
        assert!(doc.add_researcher(r.clone()));
        assert!(!doc.add_researcher(r));
        assert_eq!(doc.researcher_count(), 1);
    }

    #[test]
    fn test_short_film_category() {
        assert_eq!(short(false, 75_000).category(), ShortFilmCategory::Professional);
        assert_eq!(short(true, 5_000).category(), ShortFilmCategory::Student);
        assert_eq!(short(true, 500_000).category(), ShortFilmCategory::Student);
        assert_eq!(short(false, 30_000).category(), ShortFilmCategory::Independent);
        assert_eq!(short(false, 50_000).category(), ShortFilmCategory::Professional);
    }

    #[test]
    fn test_short_film_awards_are_a_set() {
        let mut film = short(false, 0);
        assert!(film.add_award(" Palme d'Or "));
        assert!(!film.add_award("Palme d'Or"));
        assert!(!film.add_award(""));
        assert_eq!(film.awards().to_vec(), vec!["Palme d'Or"]);
        assert!(film.remove_award("Palme d'Or"));
        assert!(!film.has_awards());
    }

    #[test]
    fn test_short_film_technique_is_normalized() {
        let film = ShortFilm::new(base("S"), "D", "F", false, "MIXED", 0).unwrap();
        assert_eq!(film.technique(), FilmingTechnique::Mixed);
        assert!(ShortFilm::new(base("S"), "D", "F", false, "Film", 0).is_err());
    }

    #[test]
    fn test_video_like_ratio() {
        let mut video =
            OnlineVideo::new(base("Tutorial"), "Channel", 0, 0, "2024-01-15", "1080p").unwrap();
        assert_eq!(video.like_ratio(), 0.0);

        video.set_view_count(15_000);
        video.set_like_count(1_200);
        assert!((video.like_ratio() - 8.0).abs() < f64::EPSILON);

        video.increment_views();
        video.increment_likes();
        assert_eq!(video.view_count(), 15_001);
        assert_eq!(video.like_count(), 1_201);
    }

    #[test]
    fn test_video_quality_is_normalized() {
        let video = OnlineVideo::new(base("V"), "C", 1, 1, "2024", "4k").unwrap();
        assert_eq!(video.quality().as_str(), "4K");
        let err = OnlineVideo::new(base("V"), "C", 1, 1, "2024", "360p").unwrap_err();
        assert_eq!(err.field, "quality");
    }
}
