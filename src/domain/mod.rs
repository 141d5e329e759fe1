//! Domain types for the catalog.
//!
//! This module contains the content model:
//! - ContentBase / Content: the shared record shape and the five-kind sum type
//! - Variants: Movie, TvSeries, Documentary, ShortFilm, OnlineVideo
//! - Sub-entities: Actor, Researcher, Season
//! - Ids: ContentId and the IdAllocator that hands them out

pub mod content;
pub mod details;
pub mod fields;
pub mod ids;
pub mod people;
pub mod season;
pub mod variants;

// Re-export commonly used types
pub use content::{Content, ContentBase, ContentKind};
pub use details::{DetailField, DetailSection, DetailView};
pub use ids::{ContentId, IdAllocator};
pub use people::{AcademicDegree, Actor, ActorRole, Researcher};
pub use season::Season;
pub use variants::{
    Documentary, FilmingTechnique, Movie, OnlineVideo, ShortFilm, ShortFilmCategory, TvSeries,
    VideoQuality, INDEPENDENT_BUDGET_LIMIT,
};
