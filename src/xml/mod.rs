//! XML plumbing shared by the document model: the scalar value interface,
//! attribute helpers and the indented writer

mod value;

pub use value::XmlValue;

use crate::error::{Error, Result};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::{BufRead, Write};

/// Attributes of a start tag as unescaped (local name, value) pairs
pub type Attributes = Vec<(String, String)>;

/// Collect the attributes of a start tag
pub fn attributes(element: &BytesStart) -> Result<Attributes> {
    element
        .attributes()
        .map(|a| -> Result<(String, String)> {
            let a = a?;
            let key = String::from_utf8_lossy(a.key.local_name().as_ref()).to_string();
            let value = a.unescape_value()?.to_string();
            Ok((key, value))
        })
        .collect()
}

/// Helper to get attribute value by local name
pub fn get_attr<'a>(attrs: &'a Attributes, name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// Decode an attribute through its value codec, falling back to the codec's
/// value for a missing attribute
pub fn decode_attr<T: XmlValue>(attrs: &Attributes, name: &str) -> Result<T> {
    match get_attr(attrs, name) {
        Some(text) => T::decode_text(text),
        None => Ok(T::missing()),
    }
}

/// Push an attribute unless its codec reports the value as empty
pub fn push_attr<T: XmlValue>(element: &mut BytesStart, name: &str, value: &T) {
    if let Some(text) = value.encode_text() {
        element.push_attribute((name, text.as_str()));
    }
}

/// Read the character data of an element (after its start tag) up to and
/// including the matching end tag. Nested elements are skipped.
pub fn read_text<R: BufRead>(reader: &mut Reader<R>, start: &BytesStart) -> Result<String> {
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c)),
            Event::Start(e) => skip_element(reader, &e)?,
            Event::End(_) => break,
            Event::Eof => return Err(unexpected_eof(start)),
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

/// Skip an element and all its children (after its start tag)
pub fn skip_element<R: BufRead>(reader: &mut Reader<R>, start: &BytesStart) -> Result<()> {
    log::trace!(
        "skipping unknown element <{}>",
        String::from_utf8_lossy(start.name().as_ref())
    );

    let mut depth = 1;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Event::Eof => return Err(unexpected_eof(start)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Error for a document that ends inside an open element
pub fn unexpected_eof(start: &BytesStart) -> Error {
    Error::MalformedXml(format!(
        "Unexpected EOF inside <{}>",
        String::from_utf8_lossy(start.name().as_ref())
    ))
}

/// Writer producing tab-indented output
pub fn indented_writer<W: Write>(inner: W) -> Writer<W> {
    Writer::new_with_indent(inner, b'\t', 1)
}

/// Write `<name>text</name>` on a single line
pub fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write a scalar child element unless its codec reports the value as empty
pub fn write_value_element<W: Write, T: XmlValue>(
    writer: &mut Writer<W>,
    name: &str,
    value: &T,
) -> Result<()> {
    match value.encode_text() {
        Some(text) => write_text_element(writer, name, &text),
        None => Ok(()),
    }
}

/// Close an element that had no children so the end tag stays on the start
/// tag's line (`<x></x>` instead of a self-closing or split tag)
pub fn write_end_inline<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer.write_event(Event::Text(BytesText::new("")))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
