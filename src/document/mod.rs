//! Document model - the OPML tree and its read/write entry points

mod body;
mod head;
mod outline;

pub use body::Body;
pub use head::Head;
pub use outline::Outline;

use crate::error::{Error, Result};
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// An OPML document
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Opml {
    /// Format version (`1.0`, `2.0`); passed through as written
    pub version: String,
    /// Header metadata
    pub head: Head,
    /// Outline tree
    pub body: Body,
}

impl Opml {
    /// Create an empty OPML 2.0 document with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            version: "2.0".to_string(),
            head: Head::new(title),
            body: Body::default(),
        }
    }

    /// Parse a document from a buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut reader = Reader::from_reader(reader);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    check_root(&e)?;
                    return Self::read_root(&mut reader, &e);
                }
                Event::Empty(e) => {
                    check_root(&e)?;
                    return Ok(Self {
                        version: xml::decode_attr(&xml::attributes(&e)?, "version")?,
                        ..Default::default()
                    });
                }
                Event::Eof => {
                    return Err(Error::MalformedXml("Missing <opml> root element".into()))
                }
                _ => {}
            }
            buf.clear();
        }
    }

    /// Parse a document from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(bytes)
    }

    /// Open a document from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("reading OPML from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Fetch a document with an HTTP GET and parse the response body
    #[cfg(feature = "http")]
    pub fn from_url(url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder().build()?;
        Self::from_url_with(&client, url)
    }

    /// Like [`Opml::from_url`], using a configured client (timeouts, proxies)
    #[cfg(feature = "http")]
    pub fn from_url_with(client: &reqwest::blocking::Client, url: &str) -> Result<Self> {
        log::debug!("fetching OPML from {}", url);
        let response = client.get(url).send()?.error_for_status()?;
        let bytes = response.bytes()?;
        log::debug!("received {} bytes from {}", bytes.len(), url);
        Self::from_bytes(&bytes)
    }

    /// Read everything inside the root element (after its start tag)
    fn read_root<R: BufRead>(reader: &mut Reader<R>, start: &BytesStart) -> Result<Self> {
        let mut opml = Self {
            version: xml::decode_attr(&xml::attributes(start)?, "version")?,
            ..Default::default()
        };
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let name = e.name();
                    match name.local_name().as_ref() {
                        b"head" => opml.head = Head::from_reader(reader, &e)?,
                        b"body" => opml.body = Body::from_reader(reader, &e)?,
                        _ => xml::skip_element(reader, &e)?,
                    }
                }
                Event::End(_) => break,
                Event::Eof => return Err(xml::unexpected_eof(start)),
                _ => {}
            }
            buf.clear();
        }

        log::debug!(
            "parsed OPML {} \"{}\" with {} outlines",
            opml.version,
            opml.head.title,
            opml.body.outline_count()
        );
        Ok(opml)
    }

    /// Top level outlines
    pub fn outlines(&self) -> impl Iterator<Item = &Outline> {
        self.body.outlines.iter()
    }

    /// Add a top level outline
    pub fn add_outline(&mut self, outline: Outline) -> &mut Outline {
        self.body.add_outline(outline)
    }

    /// Write the indented document to a writer
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut xml = xml::indented_writer(writer);

        let mut root = BytesStart::new("opml");
        root.push_attribute(("version", self.version.as_str()));
        xml.write_event(Event::Start(root))?;

        self.head.write_to(&mut xml)?;
        self.body.write_to(&mut xml)?;

        xml.write_event(Event::End(BytesEnd::new("opml")))?;
        Ok(())
    }

    /// Serialize to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write_to(&mut buf).expect("write to Vec should not fail");
        buf
    }

    /// Serialize to an XML string
    pub fn to_xml(&self) -> String {
        String::from_utf8(self.to_bytes()).expect("XML should be valid UTF-8")
    }

    /// Save the document to a file, replacing any existing content
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        log::debug!("writing OPML to {}", path.display());
        let mut file = BufWriter::new(File::create(path)?);
        self.write_to(&mut file)?;
        file.flush()?;
        Ok(())
    }
}

impl std::str::FromStr for Opml {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bytes(s.as_bytes())
    }
}

/// The root must be `<opml>`; older tools write `<OPML>`
fn check_root(start: &BytesStart) -> Result<()> {
    let name = start.name();
    if name.local_name().as_ref().eq_ignore_ascii_case(b"opml") {
        Ok(())
    } else {
        Err(Error::MalformedXml(format!(
            "Expected <opml> root element, found <{}>",
            String::from_utf8_lossy(name.as_ref())
        )))
    }
}
