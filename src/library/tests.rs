use super::*;
use crate::config::LibrarySettings;
use crate::error::Error;
use std::path::Path;
use std::time::Duration;

#[test]
fn headers_follow_declared_field_order() {
    assert_eq!(headers(), vec!["Title", "Artist", "Album", "Year", "Length"]);
}

#[test]
fn from_header_ignores_case_only() {
    assert_eq!(Column::from_header("artist"), Some(Column::Artist));
    assert_eq!(Column::from_header("ALBUM"), Some(Column::Album));
    assert_eq!(Column::from_header("Length"), Some(Column::Length));
    assert_eq!(Column::from_header("len"), None);
    assert_eq!(Column::from_header(""), None);
    for column in Column::ALL {
        assert_eq!(Column::from_header(column.name()), Some(column));
    }
}

#[test]
fn values_render_naturally() {
    let t = Track::new("Go", "Moby", "Moby", 1992, "3m37s").unwrap();
    let cells: Vec<String> = Column::ALL
        .iter()
        .map(|c| c.value(&t).to_string())
        .collect();
    assert_eq!(cells, vec!["Go", "Moby", "Moby", "1992", "3m37s"]);
}

#[test]
fn parse_duration_accepts_compact_forms() {
    assert_eq!(parse_duration("3m38s").unwrap(), Duration::from_secs(218));
    assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3_600));
    assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
    assert_eq!(parse_duration("+5s").unwrap(), Duration::from_secs(5));
    assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1_500));
    assert_eq!(parse_duration(".5m").unwrap(), Duration::from_secs(30));
    assert_eq!(parse_duration("2.s").unwrap(), Duration::from_secs(2));
    assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
    assert_eq!(parse_duration("3us").unwrap(), Duration::from_micros(3));
    assert_eq!(parse_duration("3µs").unwrap(), Duration::from_micros(3));
    assert_eq!(parse_duration("7ns").unwrap(), Duration::from_nanos(7));
    assert_eq!(
        parse_duration("1h2m3.25s").unwrap(),
        Duration::from_millis(3_723_250)
    );
}

#[test]
fn parse_duration_rejects_malformed_text() {
    for bad in ["", "abc", "3", "3x", "-1s", "s", ".s", "1m-2s", "1.2.3s"] {
        assert!(
            matches!(parse_duration(bad), Err(Error::InvalidDuration { .. })),
            "{bad:?} should not parse"
        );
    }
}

#[test]
fn parse_duration_rejects_overflow() {
    assert!(parse_duration("9999999999999999999h").is_err());
    assert!(parse_duration("18446744074s").is_err());
}

#[test]
fn parse_duration_rejects_fraction_carry_past_range() {
    // The whole part alone fits u128 nanoseconds; adding the fraction does not.
    let err = parse_duration("340282366920938463463374607431768211.999us").unwrap_err();
    assert!(matches!(err, Error::InvalidDuration { .. }));
}

#[test]
fn format_duration_matches_compact_form() {
    assert_eq!(format_duration(Duration::ZERO), "0s");
    assert_eq!(format_duration(Duration::from_secs(218)), "3m38s");
    assert_eq!(format_duration(Duration::from_secs(38)), "38s");
    assert_eq!(format_duration(Duration::from_secs(240)), "4m0s");
    assert_eq!(format_duration(Duration::from_secs(3_600)), "1h0m0s");
    assert_eq!(format_duration(Duration::from_millis(240_500)), "4m0.5s");
    assert_eq!(format_duration(Duration::from_micros(1_500)), "1.5ms");
    assert_eq!(format_duration(Duration::from_nanos(2_500)), "2.5µs");
    assert_eq!(format_duration(Duration::from_nanos(12)), "12ns");
}

#[test]
fn formatted_durations_parse_back() {
    for text in ["3m38s", "1h0m0s", "4m0.5s", "1.5ms", "2.5µs", "12ns"] {
        assert_eq!(format_duration(parse_duration(text).unwrap()), text);
    }
}

#[test]
fn track_new_rejects_bad_length() {
    assert!(Track::new("A", "B", "C", 2000, "three minutes").is_err());
}

#[test]
fn sample_seed_has_four_tracks() {
    let tracks = seed::sample().unwrap();
    assert_eq!(tracks.len(), 4);
    assert_eq!(tracks[0].title, "Go");
    assert_eq!(tracks[0].artist, "Delilah");
    assert_eq!(tracks[0].length, Duration::from_secs(218));
    assert_eq!(tracks[3].artist, "Martin Solveig");
}

#[test]
fn seed_load_defaults_to_sample() {
    let tracks = seed::load(&LibrarySettings::default()).unwrap();
    assert_eq!(tracks, seed::sample().unwrap());
}

#[test]
fn seed_file_loads_tracks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tracks.toml");
    std::fs::write(
        &path,
        r#"
[[track]]
title = "Song 2"
artist = "Blur"
album = "Blur"
year = 1997
length = "2m2s"

[[track]]
title = "Intro"
artist = "The xx"
album = "xx"
year = 2009
length = "2m8s"
"#,
    )
    .unwrap();

    let settings = LibrarySettings {
        seed_path: Some(path),
    };
    let tracks = seed::load(&settings).unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].title, "Song 2");
    assert_eq!(tracks[1].year, 2009);
    assert_eq!(tracks[1].length, Duration::from_secs(128));
}

#[test]
fn seed_file_with_bad_duration_fails_whole_load() {
    let text = r#"
[[track]]
title = "Ok"
artist = "A"
album = "B"
year = 2000
length = "1m"

[[track]]
title = "Broken"
artist = "A"
album = "B"
year = 2000
length = "soon"
"#;
    let err = seed::parse(text, Path::new("tracks.toml")).unwrap_err();
    assert!(matches!(err, Error::InvalidDuration { ref text, .. } if text == "soon"));
}

#[test]
fn seed_file_missing_field_is_parse_error() {
    let text = r#"
[[track]]
title = "No year"
artist = "A"
album = "B"
length = "1m"
"#;
    let err = seed::parse(text, Path::new("tracks.toml")).unwrap_err();
    assert!(matches!(err, Error::SeedParse { .. }));
}

#[test]
fn seed_file_missing_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = seed::load_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::SeedRead { .. }));
}

#[test]
fn empty_seed_file_yields_no_tracks() {
    let tracks = seed::parse("", Path::new("empty.toml")).unwrap();
    assert!(tracks.is_empty());
}

#[test]
fn seed_file_accepts_years_past_32_bits() {
    let text = r#"
[[track]]
title = "Far Future"
artist = "A"
album = "B"
year = 3000000000
length = "1m"
"#;
    let tracks = seed::parse(text, Path::new("tracks.toml")).unwrap();
    assert_eq!(tracks[0].year, 3_000_000_000);
    assert_eq!(Column::Year.value(&tracks[0]).to_string(), "3000000000");
}
