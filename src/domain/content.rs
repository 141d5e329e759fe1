//! The shared record shape and the closed set of content kinds.

use serde::{Deserialize, Serialize};

use super::fields::{positive, required_text};
use super::ids::ContentId;
use super::variants::{Documentary, Movie, OnlineVideo, ShortFilm, TvSeries};
use crate::error::ValidationError;

/// Fields every record carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBase {
    id: ContentId,
    title: String,
    duration_minutes: u32,
    genre: String,
}

impl ContentBase {
    pub fn new(
        id: ContentId,
        title: &str,
        duration_minutes: u32,
        genre: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            title: required_text("title", title)?,
            duration_minutes: positive("duration", duration_minutes)?,
            genre: required_text("genre", genre)?,
        })
    }

    pub fn id(&self) -> ContentId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), ValidationError> {
        self.title = required_text("title", title)?;
        Ok(())
    }

    pub fn set_duration_minutes(&mut self, minutes: u32) -> Result<(), ValidationError> {
        self.duration_minutes = positive("duration", minutes)?;
        Ok(())
    }

    pub fn set_genre(&mut self, genre: &str) -> Result<(), ValidationError> {
        self.genre = required_text("genre", genre)?;
        Ok(())
    }

    /// Re-check the invariants the constructor enforces
    pub fn validate(&self) -> Result<(), ValidationError> {
        required_text("title", &self.title)?;
        positive("duration", self.duration_minutes)?;
        required_text("genre", &self.genre)?;
        Ok(())
    }
}

/// Kind of a record (the discriminant of [`Content`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Movie,
    TvSeries,
    Documentary,
    ShortFilm,
    OnlineVideo,
}

impl ContentKind {
    /// Every kind, in display order
    pub const ALL: [ContentKind; 5] = [
        ContentKind::Movie,
        ContentKind::TvSeries,
        ContentKind::Documentary,
        ContentKind::ShortFilm,
        ContentKind::OnlineVideo,
    ];

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            ContentKind::Movie => "Movie",
            ContentKind::TvSeries => "TV Series",
            ContentKind::Documentary => "Documentary",
            ContentKind::ShortFilm => "Short Film",
            ContentKind::OnlineVideo => "Online Video",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A catalog record: one of the five content kinds
///
/// Equality is field by field, except that series seasons compare by
/// season number only.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Movie(Movie),
    TvSeries(TvSeries),
    Documentary(Documentary),
    ShortFilm(ShortFilm),
    OnlineVideo(OnlineVideo),
}

impl Content {
    pub fn kind(&self) -> ContentKind {
        match self {
            Content::Movie(_) => ContentKind::Movie,
            Content::TvSeries(_) => ContentKind::TvSeries,
            Content::Documentary(_) => ContentKind::Documentary,
            Content::ShortFilm(_) => ContentKind::ShortFilm,
            Content::OnlineVideo(_) => ContentKind::OnlineVideo,
        }
    }

    pub fn base(&self) -> &ContentBase {
        match self {
            Content::Movie(m) => &m.base,
            Content::TvSeries(s) => &s.base,
            Content::Documentary(d) => &d.base,
            Content::ShortFilm(s) => &s.base,
            Content::OnlineVideo(v) => &v.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut ContentBase {
        match self {
            Content::Movie(m) => &mut m.base,
            Content::TvSeries(s) => &mut s.base,
            Content::Documentary(d) => &mut d.base,
            Content::ShortFilm(s) => &mut s.base,
            Content::OnlineVideo(v) => &mut v.base,
        }
    }

    pub fn id(&self) -> ContentId {
        self.base().id()
    }

    pub fn title(&self) -> &str {
        self.base().title()
    }

    pub fn duration_minutes(&self) -> u32 {
        self.base().duration_minutes()
    }

    pub fn genre(&self) -> &str {
        self.base().genre()
    }

    /// Validate the record as a whole.
    ///
    /// Variant fields can only be set through validating constructors and
    /// setters, so only the shared fields need rechecking here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.base().validate()
    }
}

impl std::fmt::Display for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} ({} min)",
            self.title(),
            self.genre(),
            self.duration_minutes()
        )
    }
}

impl From<Movie> for Content {
    fn from(movie: Movie) -> Self {
        Content::Movie(movie)
    }
}

impl From<TvSeries> for Content {
    fn from(series: TvSeries) -> Self {
        Content::TvSeries(series)
    }
}

impl From<Documentary> for Content {
    fn from(documentary: Documentary) -> Self {
        Content::Documentary(documentary)
    }
}

impl From<ShortFilm> for Content {
    fn from(short: ShortFilm) -> Self {
        Content::ShortFilm(short)
    }
}

impl From<OnlineVideo> for Content {
    fn from(video: OnlineVideo) -> Self {
        Content::OnlineVideo(video)
    }
}
