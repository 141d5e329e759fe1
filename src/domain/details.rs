//! Structured, medium-neutral detail view of a record.
//!
//! `Content::describe` builds a [`DetailView`]; callers decide how to render
//! it (plain text in the CLI, JSON via serde).

use serde::Serialize;

use super::content::{Content, ContentKind};

/// Label/value pair in a detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// Named list of sub-entities (cast, seasons, awards, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSection {
    pub title: &'static str,
    pub entries: Vec<String>,
}

/// Everything worth showing about a single record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub kind: ContentKind,
    pub fields: Vec<DetailField>,
    pub sections: Vec<DetailSection>,
}

impl DetailView {
    fn new(kind: ContentKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
            sections: Vec::new(),
        }
    }

    fn push(&mut self, label: &'static str, value: impl ToString) {
        self.fields.push(DetailField {
            label,
            value: value.to_string(),
        });
    }

    fn section<I, T>(&mut self, title: &'static str, entries: I)
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        let entries: Vec<String> = entries.into_iter().map(|e| e.to_string()).collect();
        if !entries.is_empty() {
            self.sections.push(DetailSection { title, entries });
        }
    }

    /// Look up a field value by label
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }

    /// Look up a section by title
    pub fn section_entries(&self, title: &str) -> Option<&[String]> {
        self.sections
            .iter()
            .find(|s| s.title == title)
            .map(|s| s.entries.as_slice())
    }
}

impl Content {
    /// Build the detail view for this record
    pub fn describe(&self) -> DetailView {
        let mut view = DetailView::new(self.kind());
        view.push("ID", self.id());
        view.push("Title", self.title());

        match self {
            Content::TvSeries(_) => view.push("Duration per episode (min)", self.duration_minutes()),
            _ => view.push("Duration (min)", self.duration_minutes()),
        }
        view.push("Genre", self.genre());

        match self {
            Content::Movie(movie) => {
                view.push("Studio", movie.studio());
                view.section("Actors", movie.actors());
            }
            Content::TvSeries(series) => {
                view.push("Seasons", series.season_count());
                view.push("Total episodes", series.total_episodes());
                view.section("Season details", series.seasons());
            }
            Content::Documentary(doc) => {
                view.push("Topic", doc.topic());
                view.section("Researchers", doc.researchers());
            }
            Content::ShortFilm(short) => {
                view.push("Director", short.director());
                view.push("Festival", short.festival());
                view.push("Category", short.category());
                view.push("Filming technique", short.technique());
                view.push("Budget", short.budget());
                view.section("Awards", short.awards());
            }
            Content::OnlineVideo(video) => {
                view.push("Channel", video.channel());
                view.push("Views", video.view_count());
                view.push("Likes", video.like_count());
                view.push("Publication date", video.publication_date());
                view.push("Quality", video.quality());
                view.push("Like ratio", format!("{:.2}%", video.like_ratio()));
            }
        }

        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Actor, ContentBase, ContentId, Movie, OnlineVideo, ShortFilm};

    fn base(title: &str) -> ContentBase {
        ContentBase::new(ContentId::new(5).unwrap(), title, 15, "Drama").unwrap()
    }

    #[test]
    fn test_describe_movie_lists_actors() {
        let mut movie = Movie::new(base("Avatar"), "20th Century Studios").unwrap();
        movie.add_actor(Actor::new("Zoe Saldana", 46, "American", "principal").unwrap());
        let view = Content::from(movie).describe();

        assert_eq!(view.kind, ContentKind::Movie);
        assert_eq!(view.field("ID"), Some("5"));
        assert_eq!(view.field("Studio"), Some("20th Century Studios"));
        assert_eq!(
            view.section_entries("Actors").unwrap(),
            ["Zoe Saldana (American, 46 years) - Principal".to_string()]
        );
    }

    #[test]
    fn test_describe_short_film_reports_category() {
        let short = ShortFilm::new(base("El Ultimo Dia"), "Maria", "Cannes", false, "Digital", 75_000)
            .unwrap();
        let view = Content::from(short).describe();
        assert_eq!(view.field("Category"), Some("Professional"));
        assert!(view.section_entries("Awards").is_none());
    }

    #[test]
    fn test_describe_video_formats_ratio() {
        let video =
            OnlineVideo::new(base("Tutorial"), "CodeAcademy", 15_000, 1_200, "2024-01-15", "1080p")
                .unwrap();
        let view = Content::from(video).describe();
        assert_eq!(view.field("Like ratio"), Some("8.00%"));
        assert_eq!(view.field("Quality"), Some("1080p"));
    }

    #[test]
    fn test_describe_serializes_to_json() {
        let movie = Movie::new(base("Avatar"), "Fox").unwrap();
        let json = serde_json::to_value(Content::from(movie).describe()).unwrap();
        assert_eq!(json["kind"], "movie");
        assert_eq!(json["fields"][1]["label"], "Title");
        assert_eq!(json["fields"][1]["value"], "Avatar");
    }
}
