//! Flat-Record Codec Integration Tests
//!
//! Round-trips over generated field values, the known delimiter limitation,
//! and tolerant bulk decoding of partially broken files.

use pretty_assertions::assert_eq;
use reelbase::codec::{decode_str, encode_to, read_catalog_file, write_catalog_file, HEADER_LINES};
use reelbase::domain::{
    Content, ContentBase, ContentId, Documentary, IdAllocator, Movie, OnlineVideo, ShortFilm,
    TvSeries,
};
use reelbase::{decode_record, encode_record, CatalogError};
use tempfile::TempDir;

/// Text values without the delimiter, including a few awkward ones
const TEXT: [&str; 9] = [
    "Avatar",
    "El Ultimo Dia",
    "Ñandú",
    "x",
    "Sci-Fi & Fantasy",
    "O'Brien; \"quoted\"",
    "#not a comment",
    "   padded   ",
    "2024-01-15",
];

const MINUTES: [u32; 4] = [1, 45, 162, u32::MAX];
const COUNTS: [u64; 4] = [0, 1, 15_000, u64::MAX];
const TECHNIQUES: [&str; 3] = ["digital", "ANALOG", "Mixed"];
const QUALITIES: [&str; 5] = ["480p", "720P", "1080p", "1440p", "4k"];

fn text(i: usize) -> &'static str {
    TEXT[i % TEXT.len()]
}

fn base(i: usize) -> ContentBase {
    ContentBase::new(
        ContentId::new(1).unwrap(),
        text(i),
        MINUTES[i % MINUTES.len()],
        text(i + 1),
    )
    .unwrap()
}

/// One record of every kind per seed
fn generated(seed: usize) -> Vec<Content> {
    vec![
        Movie::new(base(seed), text(seed + 2)).unwrap().into(),
        TvSeries::new(base(seed), MINUTES[seed % MINUTES.len()])
            .unwrap()
            .into(),
        Documentary::new(base(seed), text(seed + 3)).unwrap().into(),
        ShortFilm::new(
            base(seed),
            text(seed + 4),
            text(seed + 5),
            seed % 2 == 0,
            TECHNIQUES[seed % TECHNIQUES.len()],
            COUNTS[seed % COUNTS.len()],
        )
        .unwrap()
        .into(),
        OnlineVideo::new(
            base(seed),
            text(seed + 6),
            COUNTS[seed % COUNTS.len()],
            COUNTS[(seed + 1) % COUNTS.len()],
            text(seed + 7),
            QUALITIES[seed % QUALITIES.len()],
        )
        .unwrap()
        .into(),
    ]
}

#[test]
fn test_round_trip_without_delimiter() {
    for seed in 0..TEXT.len() * 2 {
        for original in generated(seed) {
            let line = encode_record(&original);
            let decoded = decode_record(&line, &mut IdAllocator::new())
                .unwrap_or_else(|e| panic!("failed to decode {:?}: {}", line, e));

            assert_eq!(decoded, original, "line: {}", line);
        }
    }
}

#[test]
fn test_delimiter_in_field_breaks_round_trip() {
    // Comma in the title shifts the duration field
    let base = ContentBase::new(
        ContentId::new(1).unwrap(),
        "Crouching Tiger, Hidden Dragon",
        120,
        "Action",
    )
    .unwrap();
    let movie: Content = Movie::new(base, "Sony").unwrap().into();
    let err = decode_record(&encode_record(&movie), &mut IdAllocator::new()).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { field: "duration", .. }));

    // Comma in the genre decodes, but into the wrong fields
    let base = ContentBase::new(ContentId::new(1).unwrap(), "Heat", 170, "Crime, Drama").unwrap();
    let movie: Content = Movie::new(base, "Warner").unwrap().into();
    let decoded = decode_record(&encode_record(&movie), &mut IdAllocator::new()).unwrap();

    assert_ne!(decoded, movie);
    assert_eq!(decoded.genre(), "Crime");
    let Content::Movie(decoded) = decoded else {
        panic!("expected a movie");
    };
    assert_eq!(decoded.studio(), "Drama");
}

#[test]
fn test_mixed_file_keeps_only_good_lines() {
    let text = "\
# Audiovisual content catalog

MOVIE,1,Avatar,162,Science Fiction,20th Century Studios
PODCAST,2,Tech Talk,60,Technology,Someone
SERIES,3,Game of Thrones,60,Fantasy,eight
";
    let report = decode_str(text, &mut IdAllocator::new());

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].title(), "Avatar");

    assert_eq!(report.skipped.len(), 2);
    assert_eq!(report.skipped[0].line_number, 4);
    assert!(matches!(report.skipped[0].error, CatalogError::UnknownTag(_)));
    assert_eq!(report.skipped[1].line_number, 5);
    assert!(matches!(
        report.skipped[1].error,
        CatalogError::Parse { field: "season count", .. }
    ));
}

#[test]
fn test_decoded_ids_come_from_allocator() {
    let text = "MOVIE,77,A,10,G,S\nMOVIE,3,B,10,G,S\n";
    let mut ids = IdAllocator::starting_at(ContentId::new(10).unwrap());
    let report = decode_str(text, &mut ids);

    let got: Vec<u32> = report.records.iter().map(|c| c.id().get()).collect();
    assert_eq!(got, vec![10, 11]);
    assert_eq!(ids.peek().get(), 12);
}

#[test]
fn test_file_round_trip_preserves_order() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.CSV");

    let mut ids = IdAllocator::new();
    let records: Vec<Content> = ["Zulu", "Alpha", "Mike"]
        .into_iter()
        .map(|title| {
            let base = ContentBase::new(ids.next_id(), title, 90, "Drama").unwrap();
            Movie::new(base, "Studio").unwrap().into()
        })
        .collect();

    assert_eq!(write_catalog_file(&path, &records).unwrap(), 3);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with(HEADER_LINES[0]));

    let report = read_catalog_file(&path, &mut IdAllocator::new()).unwrap();
    assert!(report.skipped.is_empty());
    assert_eq!(report.records, records);
}

#[test]
fn test_encode_empty_catalog_writes_only_header() {
    let mut out = Vec::new();
    let written = encode_to(&mut out, std::iter::empty::<&Content>()).unwrap();

    assert_eq!(written, 0);
    let expected = format!("{}\n{}\n\n", HEADER_LINES[0], HEADER_LINES[1]);
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}
