//! OPML-specific scalar types: the tri-state boolean and the dual-format
//! timestamp

mod boolean;
mod time;

pub use boolean::OpmlBool;
pub use time::{parse_opml_time, OpmlTime, OPML_TIME_FORMAT};
