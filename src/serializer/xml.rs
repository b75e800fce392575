// src/serializer/xml.rs
use crate::error::Result;
use crate::serializer::song::Song;
use quick_xml::escape::partial_escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::borrow::Cow;

/// Escape a double-quoted attribute value.
///
/// Whitespace control characters become character references so the value
/// survives attribute normalisation.
fn escape_attribute(value: &str) -> Cow<'_, str> {
    let escaped = partial_escape(value);
    if !escaped.contains(['"', '\n', '\r', '\t']) {
        return escaped;
    }

    Cow::Owned(
        escaped
            .replace('"', "&quot;")
            .replace('\n', "&#10;")
            .replace('\r', "&#13;")
            .replace('\t', "&#09;"),
    )
}

/// Write `<name>text</name>`, escaping only `&`, `<` and `>` in the text
fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Encode a song as `<song id=".."><title>..</title><artist>..</artist></song>`
pub fn serialize_to_xml(song: &Song) -> Result<String> {
    let mut writer = Writer::new(Vec::new());

    // Root element carries the id; no XML declaration
    let id = escape_attribute(&song.id);
    let root = BytesStart::new("song")
        .with_attributes([Attribute::from((b"id".as_slice(), id.as_bytes()))]);
    writer.write_event(Event::Start(root))?;

    write_text_element(&mut writer, "title", &song.title)?;
    write_text_element(&mut writer, "artist", &song.artist)?;

    writer.write_event(Event::End(BytesEnd::new("song")))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_characters_are_escaped() {
        let song = Song::new("a\"b", "Rock & <Roll>", "Simon & Garfunkel");

        assert_eq!(
            serialize_to_xml(&song).unwrap(),
            "<song id=\"a&quot;b\"><title>Rock &amp; &lt;Roll&gt;</title>\
             <artist>Simon &amp; Garfunkel</artist></song>"
        );
    }

    #[test]
    fn test_plain_attribute_is_borrowed() {
        assert!(matches!(escape_attribute("42"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_quotes_kept_in_text() {
        let song = Song::new("3", "Don't \"Stop\"", "A\tB");

        assert_eq!(
            serialize_to_xml(&song).unwrap(),
            "<song id=\"3\"><title>Don't \"Stop\"</title><artist>A\tB</artist></song>"
        );
    }

    #[test]
    fn test_attribute_whitespace_and_apostrophe() {
        let song = Song::new("x'y\tz\n", "t", "a");

        assert_eq!(
            serialize_to_xml(&song).unwrap(),
            "<song id=\"x'y&#09;z&#10;\"><title>t</title><artist>a</artist></song>"
        );
    }
}
