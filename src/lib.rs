//! reelbase - Audiovisual content catalog
//!
//! Keeps movies, TV series, documentaries, short films and online videos in
//! an in-memory catalog persisted to a flat, comma-delimited text file.
//!
//! # Architecture
//!
//! Leaves first:
//! - Records are a closed sum type; every value is validated on construction
//!   and on every mutation
//! - The codec maps each record to one tagged line and back
//! - The store is an id-keyed map with search, filter and sort queries
//! - The service adds duplicate prevention and default-path persistence
//!
//! # Modules
//!
//! - `domain`: Content model (Content, variants, Actor, Season, Researcher)
//! - `codec`: Flat-record encoding and catalog files
//! - `library`: CatalogStore and CatalogService
//! - `config`: Path and logging configuration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Add a record
//! reelbase add "MOVIE,0,Avatar,162,Science Fiction,20th Century Studios"
//!
//! # List by duration
//! reelbase list --sort duration
//!
//! # Show a record as JSON
//! reelbase show 1 --json
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod library;

// Re-export main types at crate root for convenience
pub use codec::{decode_record, encode_record, DecodeReport};
pub use domain::{Content, ContentBase, ContentId, ContentKind, IdAllocator};
pub use error::{CatalogError, Result, ValidationError};
pub use library::{CatalogService, CatalogStatistics, CatalogStore, InMemoryStore, LoadSummary};
