//! Flat-record codec.
//!
//! Maps each record to one comma-delimited text line keyed by a kind tag,
//! and whole catalogs to a commented text file.
//!
//! # File Layout
//!
//! ```text
//! # Audiovisual content catalog
//! # Format: TAG,ID,TITLE,DURATION,GENRE,<kind-specific fields>
//!
//! MOVIE,1,Avatar,162,Science Fiction,20th Century Studios
//! SERIES,2,Game of Thrones,60,Fantasy,8
//! ```

pub mod file;
pub mod record;

pub use file::{
    decode_lines, decode_str, encode_to, ensure_catalog_path, is_catalog_path, read_catalog_file,
    write_catalog_file, DecodeReport, SkippedLine, FILE_EXTENSION, HEADER_LINES,
};
pub use record::{decode_record, encode_record, COMMENT_MARKER, DELIMITER};
