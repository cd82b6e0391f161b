//! Document body (`<body>`)

use crate::document::Outline;
use crate::error::Result;
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::io::BufRead;

/// Document body: the top level outlines
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Body {
    /// Outlines in document order
    pub outlines: Vec<Outline>,
}

impl Body {
    /// Parse body from XML reader (after the body start tag)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>, start: &BytesStart) -> Result<Self> {
        let mut body = Body::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    if e.name().local_name().as_ref() == b"outline" {
                        body.outlines.push(Outline::from_reader(reader, &e)?);
                    } else {
                        xml::skip_element(reader, &e)?;
                    }
                }
                Event::Empty(e) => {
                    if e.name().local_name().as_ref() == b"outline" {
                        body.outlines.push(Outline::from_empty(&e)?);
                    }
                }
                Event::End(_) => break,
                Event::Eof => return Err(xml::unexpected_eof(start)),
                _ => {}
            }
            buf.clear();
        }

        Ok(body)
    }

    /// Add an outline, returning it for further changes
    pub fn add_outline(&mut self, outline: Outline) -> &mut Outline {
        self.outlines.push(outline);
        let last = self.outlines.len() - 1;
        &mut self.outlines[last]
    }

    /// Number of outlines in the whole tree
    pub fn outline_count(&self) -> usize {
        fn count(outlines: &[Outline]) -> usize {
            outlines.iter().map(|o| 1 + count(&o.outlines)).sum()
        }
        count(&self.outlines)
    }

    /// Write body to XML writer
    pub fn write_to<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("body")))?;

        if self.outlines.is_empty() {
            return xml::write_end_inline(writer, "body");
        }
        for outline in &self.outlines {
            outline.write_to(writer)?;
        }

        writer.write_event(Event::End(BytesEnd::new("body")))?;
        Ok(())
    }
}
