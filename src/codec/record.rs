//! One record <-> one delimited line.
//!
//! ```text
//! MOVIE,<id>,<title>,<duration>,<genre>,<studio>
//! SERIES,<id>,<title>,<duration>,<genre>,<seasonCount>
//! DOCUMENTARY,<id>,<title>,<duration>,<genre>,<topic>
//! VIDEO,<id>,<title>,<duration>,<genre>,<channel>,<views>,<likes>,<pubDate>[,<quality>]
//! SHORT,<id>,<title>,<duration>,<genre>,<director>,<festival>,<isStudent>,<technique>[,<budget>]
//! ```
//!
//! Fields are split on a bare comma with no quoting or escaping. A value that
//! itself contains a comma shifts every later field and the record will not
//! survive a round-trip. Sub-entity collections are not part of the format.

use std::str::FromStr;

use crate::domain::{
    Content, ContentBase, ContentId, ContentKind, Documentary, IdAllocator, Movie, OnlineVideo,
    ShortFilm, TvSeries, VideoQuality,
};
use crate::error::{CatalogError, Result};

/// Field separator
pub const DELIMITER: char = ',';

/// Lines starting with this marker are comments
pub const COMMENT_MARKER: char = '#';

/// Fields shared by every kind: tag, id, title, duration, genre
const BASE_FIELDS: usize = 5;

impl ContentKind {
    /// Literal tag that opens a record line
    pub fn tag(self) -> &'static str {
        match self {
            ContentKind::Movie => "MOVIE",
            ContentKind::TvSeries => "SERIES",
            ContentKind::Documentary => "DOCUMENTARY",
            ContentKind::ShortFilm => "SHORT",
            ContentKind::OnlineVideo => "VIDEO",
        }
    }

    /// Resolve a tag, ignoring surrounding whitespace and case
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        ContentKind::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(tag))
    }

    /// Minimum number of fields a line of this kind must have
    pub fn min_fields(self) -> usize {
        match self {
            ContentKind::Movie | ContentKind::TvSeries | ContentKind::Documentary => BASE_FIELDS + 1,
            ContentKind::ShortFilm | ContentKind::OnlineVideo => BASE_FIELDS + 4,
        }
    }
}

/// Encode a record as a single line (no trailing newline)
pub fn encode_record(content: &Content) -> String {
    let mut fields: Vec<String> = vec![
        content.kind().tag().to_string(),
        content.id().to_string(),
        content.title().to_string(),
        content.duration_minutes().to_string(),
        content.genre().to_string(),
    ];

    match content {
        Content::Movie(movie) => {
            fields.push(movie.studio().to_string());
        }
        Content::TvSeries(series) => {
            fields.push(series.season_count().to_string());
        }
        Content::Documentary(doc) => {
            fields.push(doc.topic().to_string());
        }
        Content::ShortFilm(short) => {
            fields.push(short.director().to_string());
            fields.push(short.festival().to_string());
            fields.push(short.is_student_work().to_string());
            fields.push(short.technique().to_string());
            fields.push(short.budget().to_string());
        }
        Content::OnlineVideo(video) => {
            fields.push(video.channel().to_string());
            fields.push(video.view_count().to_string());
            fields.push(video.like_count().to_string());
            fields.push(video.publication_date().to_string());
            fields.push(video.quality().to_string());
        }
    }

    fields.join(&DELIMITER.to_string())
}

/// Decode one record line.
///
/// The id stored in the line is ignored; the record gets the next id from
/// `ids`, which is only consumed when decoding succeeds.
pub fn decode_record(line: &str, ids: &mut IdAllocator) -> Result<Content> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let tag = fields[0];
    let kind = ContentKind::from_tag(tag)
        .ok_or_else(|| CatalogError::UnknownTag(tag.trim().to_string()))?;

    if fields.len() < kind.min_fields() {
        return Err(CatalogError::Format {
            tag: kind.tag().to_string(),
            expected: kind.min_fields(),
            found: fields.len(),
        });
    }

    let id = ids.peek();
    let content = decode_fields(kind, &fields, id)?;
    ids.next_id();
    Ok(content)
}

fn decode_fields(kind: ContentKind, fields: &[&str], id: ContentId) -> Result<Content> {
    let duration = parse_number::<u32>("duration", fields[3])?;

    // Numeric fields are parsed before any constructor runs.
    let content = match kind {
        ContentKind::Movie => {
            let base = ContentBase::new(id, fields[2], duration, fields[4])?;
            Movie::new(base, fields[5])?.into()
        }
        ContentKind::TvSeries => {
            let seasons = parse_number::<u32>("season count", fields[5])?;
            let base = ContentBase::new(id, fields[2], duration, fields[4])?;
            TvSeries::new(base, seasons)?.into()
        }
        ContentKind::Documentary => {
            let base = ContentBase::new(id, fields[2], duration, fields[4])?;
            Documentary::new(base, fields[5])?.into()
        }
        ContentKind::ShortFilm => {
            let is_student = parse_flag("student work", fields[7])?;
            let budget = match fields.get(9) {
                Some(raw) => parse_number::<u64>("budget", raw)?,
                None => 0,
            };
            let base = ContentBase::new(id, fields[2], duration, fields[4])?;
            ShortFilm::new(base, fields[5], fields[6], is_student, fields[8], budget)?.into()
        }
        ContentKind::OnlineVideo => {
            let views = parse_number::<u64>("views", fields[6])?;
            let likes = parse_number::<u64>("likes", fields[7])?;
            let default_quality = VideoQuality::default();
            let quality = fields.get(9).copied().unwrap_or(default_quality.as_str());
            let base = ContentBase::new(id, fields[2], duration, fields[4])?;
            OnlineVideo::new(base, fields[5], views, likes, fields[8], quality)?.into()
        }
    };

    Ok(content)
}

fn parse_number<T: FromStr>(field: &'static str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| CatalogError::Parse {
        field,
        value: raw.to_string(),
    })
}

fn parse_flag(field: &'static str, raw: &str) -> Result<bool> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CatalogError::Parse {
            field,
            value: raw.to_string(),
        })
    }
}
