//! # opml-rs
//!
//! Read and write OPML (Outline Processor Markup Language) documents.
//!
//! ## Features
//!
//! - Parse from any reader, bytes, strings, files or URLs (`http` feature)
//! - Dates accepted with four or two digit years, always written with four
//! - Empty fields are left out on output, so minimal documents round-trip
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use opml_rs::{Opml, Outline};
//!
//! let opml = Opml::open("subscriptions.opml")?;
//! println!("{}", opml.head.title);
//!
//! for outline in opml.outlines().filter(|o| o.is_comment()) {
//!     println!("{}", outline.text);
//! }
//!
//! let mut doc = Opml::new("My feeds");
//! doc.add_outline(Outline::new("Scripting News"));
//! doc.save("feeds.opml")?;
//! ```

pub mod codec;
pub mod document;
pub mod error;
pub mod xml;

pub use codec::{parse_opml_time, OpmlBool, OpmlTime, OPML_TIME_FORMAT};
pub use document::{Body, Head, Opml, Outline};
pub use error::{Error, Result};
