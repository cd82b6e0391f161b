//! Document header (`<head>`)

use crate::codec::OpmlTime;
use crate::error::Result;
use crate::xml::{self, XmlValue};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::io::BufRead;

/// Header metadata
///
/// Empty strings and `None` are left out when writing; only `title` is always
/// written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Head {
    /// Title of the document
    pub title: String,
    /// When the document was created
    pub date_created: Option<OpmlTime>,
    /// When the document was last modified
    pub date_modified: Option<OpmlTime>,
    /// Owner of the document
    pub owner_name: String,
    /// Email address of the owner
    pub owner_email: String,
    /// Page with a contact form for the owner
    pub owner_id: String,
    /// Where the format documentation lives
    pub docs: String,
    /// Comma separated line numbers of expanded outlines
    pub expansion_state: String,
    /// Line number of the top visible line
    pub vert_scroll_state: Option<i64>,
    /// Window geometry, in pixels
    pub window_top: Option<i64>,
    pub window_left: Option<i64>,
    pub window_bottom: Option<i64>,
    pub window_right: Option<i64>,
}

impl Head {
    /// Create a header with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Parse header from reader (after the head start tag)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>, start: &BytesStart) -> Result<Self> {
        let mut head = Head::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let text = xml::read_text(reader, &e)?;
                    head.set(e.name().local_name().as_ref(), &text)?;
                }
                Event::Empty(e) => {
                    head.set(e.name().local_name().as_ref(), "")?;
                }
                Event::End(_) => break,
                Event::Eof => return Err(xml::unexpected_eof(start)),
                _ => {}
            }
            buf.clear();
        }

        Ok(head)
    }

    /// Assign a child element's text to the matching field
    fn set(&mut self, name: &[u8], text: &str) -> Result<()> {
        match name {
            b"title" => self.title = XmlValue::decode_text(text)?,
            b"dateCreated" => self.date_created = XmlValue::decode_text(text)?,
            b"dateModified" => self.date_modified = XmlValue::decode_text(text)?,
            b"ownerName" => self.owner_name = XmlValue::decode_text(text)?,
            b"ownerEmail" => self.owner_email = XmlValue::decode_text(text)?,
            b"ownerId" => self.owner_id = XmlValue::decode_text(text)?,
            b"docs" => self.docs = XmlValue::decode_text(text)?,
            b"expansionState" => self.expansion_state = XmlValue::decode_text(text)?,
            b"vertScrollState" => self.vert_scroll_state = XmlValue::decode_text(text)?,
            b"windowTop" => self.window_top = XmlValue::decode_text(text)?,
            b"windowLeft" => self.window_left = XmlValue::decode_text(text)?,
            b"windowBottom" => self.window_bottom = XmlValue::decode_text(text)?,
            b"windowRight" => self.window_right = XmlValue::decode_text(text)?,
            other => log::trace!(
                "ignoring unknown head element <{}>",
                String::from_utf8_lossy(other)
            ),
        }
        Ok(())
    }

    /// Write to XML writer
    pub fn write_to<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("head")))?;

        xml::write_text_element(writer, "title", &self.title)?;
        xml::write_value_element(writer, "dateCreated", &self.date_created)?;
        xml::write_value_element(writer, "dateModified", &self.date_modified)?;
        xml::write_value_element(writer, "ownerName", &self.owner_name)?;
        xml::write_value_element(writer, "ownerEmail", &self.owner_email)?;
        xml::write_value_element(writer, "ownerId", &self.owner_id)?;
        xml::write_value_element(writer, "docs", &self.docs)?;
        xml::write_value_element(writer, "expansionState", &self.expansion_state)?;
        xml::write_value_element(writer, "vertScrollState", &self.vert_scroll_state)?;
        xml::write_value_element(writer, "windowTop", &self.window_top)?;
        xml::write_value_element(writer, "windowBottom", &self.window_bottom)?;
        xml::write_value_element(writer, "windowLeft", &self.window_left)?;
        xml::write_value_element(writer, "windowRight", &self.window_right)?;

        writer.write_event(Event::End(BytesEnd::new("head")))?;
        Ok(())
    }
}
