use media_factory::serializer::{get_serializer, FormatKey, Song, SongSerializer};
use media_factory::Error;
use proptest::prelude::*;
use rstest::rstest;

fn water_of_love() -> Song {
    Song::new("1", "Water of Love", "Dire Straits")
}

#[test]
fn test_json_output() {
    let json = SongSerializer::new().serialize(&water_of_love(), "JSON").unwrap();

    assert_eq!(json, r#"{"id": "1", "title": "Water of Love", "artist": "Dire Straits"}"#);
}

#[test]
fn test_xml_output() {
    let xml = SongSerializer::new().serialize(&water_of_love(), "XML").unwrap();

    assert_eq!(
        xml,
        r#"<song id="1"><title>Water of Love</title><artist>Dire Straits</artist></song>"#
    );
}

#[test]
fn test_yaml_fails_with_unsupported_format() {
    let err = SongSerializer::new().serialize(&water_of_love(), "YAML").unwrap_err();

    match err {
        Error::UnsupportedFormat(key) => assert_eq!(key, "YAML"),
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
#[case("JSON", FormatKey::Json)]
#[case("XML", FormatKey::Xml)]
#[case("YAML", FormatKey::Yaml)]
fn test_format_keys(#[case] key: &str, #[case] expected: FormatKey) {
    assert_eq!(key.parse::<FormatKey>().unwrap(), expected);
    assert_eq!(expected.to_string(), key);
}

#[test]
fn test_serializer_lookup_matches_facade() {
    let song = water_of_love();
    let encode = get_serializer(FormatKey::Xml).unwrap();

    assert_eq!(
        encode(&song).unwrap(),
        SongSerializer::new().serialize(&song, "XML").unwrap()
    );
}

proptest! {
    #[test]
    fn test_serialization_is_deterministic(
        id in "[0-9]{1,6}",
        title in "\\PC{0,40}",
        artist in "\\PC{0,40}",
    ) {
        let song = Song::new(id, title, artist);
        let serializer = SongSerializer::new();

        for format in ["JSON", "XML"] {
            let first = serializer.serialize(&song, format).unwrap();
            let second = serializer.serialize(&song, format).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn test_json_round_trips_field_values(
        title in "\\PC{0,40}",
        artist in "\\PC{0,40}",
    ) {
        let song = Song::new("9", title, artist);
        let json = SongSerializer::new().serialize(&song, "JSON").unwrap();

        let parsed: Song = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, song);
    }
}
