//! Outline element (`<outline>`), the recursive node of the body tree

use crate::codec::{OpmlBool, OpmlTime};
use crate::error::Result;
use crate::xml::{self, Attributes};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::io::BufRead;

/// A node of the outline tree
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outline {
    /// Text shown for the node; always written, even when empty
    pub text: String,
    /// How to interpret the other attributes (`rss`, `link`, `include`, ...)
    pub outline_type: String,
    /// Commented out, along with its children
    pub is_comment: OpmlBool,
    /// Breakpoint set on this node (script outlines)
    pub is_breakpoint: OpmlBool,
    pub created: Option<OpmlTime>,
    /// Category paths, comma separated on the wire
    ///
    /// Entries must not contain commas or leading/trailing whitespace,
    /// otherwise they do not survive a write and re-read unchanged.
    pub category: Vec<String>,
    pub xml_url: String,
    pub html_url: String,
    pub url: String,
    pub language: String,
    pub title: String,
    pub version: String,
    pub description: String,
    /// Child outlines in document order
    pub outlines: Vec<Outline>,
}

impl Outline {
    /// Create an outline with the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Parse outline from reader (after the outline start tag)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>, start: &BytesStart) -> Result<Self> {
        let mut outline = Self::from_empty(start)?;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    if e.name().local_name().as_ref() == b"outline" {
                        outline.outlines.push(Self::from_reader(reader, &e)?);
                    } else {
                        xml::skip_element(reader, &e)?;
                    }
                }
                Event::Empty(e) => {
                    if e.name().local_name().as_ref() == b"outline" {
                        outline.outlines.push(Self::from_empty(&e)?);
                    }
                }
                Event::End(_) => break,
                Event::Eof => return Err(xml::unexpected_eof(start)),
                _ => {}
            }
            buf.clear();
        }

        Ok(outline)
    }

    /// Create from empty element (attributes only)
    pub fn from_empty(start: &BytesStart) -> Result<Self> {
        Self::from_attributes(&xml::attributes(start)?)
    }

    fn from_attributes(attrs: &Attributes) -> Result<Self> {
        Ok(Self {
            text: xml::decode_attr(attrs, "text")?,
            outline_type: xml::decode_attr(attrs, "type")?,
            is_comment: xml::decode_attr(attrs, "isComment")?,
            is_breakpoint: xml::decode_attr(attrs, "isBreakpoint")?,
            created: xml::decode_attr(attrs, "created")?,
            category: xml::decode_attr(attrs, "category")?,
            xml_url: xml::decode_attr(attrs, "xmlUrl")?,
            html_url: xml::decode_attr(attrs, "htmlUrl")?,
            url: xml::decode_attr(attrs, "url")?,
            language: xml::decode_attr(attrs, "language")?,
            title: xml::decode_attr(attrs, "title")?,
            version: xml::decode_attr(attrs, "version")?,
            description: xml::decode_attr(attrs, "description")?,
            outlines: Vec::new(),
        })
    }

    /// Check if this outline is commented out
    pub fn is_comment(&self) -> bool {
        self.is_comment.get()
    }

    /// Check if a breakpoint is set
    pub fn is_breakpoint(&self) -> bool {
        self.is_breakpoint.get()
    }

    /// Append a child outline, returning it for further changes
    pub fn add_outline(&mut self, outline: Outline) -> &mut Outline {
        self.outlines.push(outline);
        let last = self.outlines.len() - 1;
        &mut self.outlines[last]
    }

    /// Write to XML writer
    pub fn write_to<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new("outline");
        start.push_attribute(("text", self.text.as_str()));
        xml::push_attr(&mut start, "type", &self.outline_type);
        xml::push_attr(&mut start, "isComment", &self.is_comment);
        xml::push_attr(&mut start, "isBreakpoint", &self.is_breakpoint);
        xml::push_attr(&mut start, "created", &self.created);
        xml::push_attr(&mut start, "category", &self.category);
        xml::push_attr(&mut start, "xmlUrl", &self.xml_url);
        xml::push_attr(&mut start, "htmlUrl", &self.html_url);
        xml::push_attr(&mut start, "url", &self.url);
        xml::push_attr(&mut start, "language", &self.language);
        xml::push_attr(&mut start, "title", &self.title);
        xml::push_attr(&mut start, "version", &self.version);
        xml::push_attr(&mut start, "description", &self.description);

        writer.write_event(Event::Start(start))?;

        if self.outlines.is_empty() {
            return xml::write_end_inline(writer, "outline");
        }
        for child in &self.outlines {
            child.write_to(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new("outline")))?;
        Ok(())
    }
}
