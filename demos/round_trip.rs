//! Read an OPML file, print a few things from it and write it back out
//!
//! ```text
//! cargo run --example round_trip -- subscriptions.opml
//! ```

use opml_rs::Opml;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: round_trip <file.opml>");
        return ExitCode::FAILURE;
    };

    let opml = match Opml::open(&path) {
        Ok(opml) => opml,
        Err(e) => {
            eprintln!("{}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    println!("Title: {}", opml.head.title);
    if let Some(created) = &opml.head.date_created {
        println!("Created: {} ({})", created, created.datetime().to_rfc3339());
    }

    for outline in opml.outlines().filter(|o| o.is_comment()) {
        println!("Commented: {}", outline.text);
    }
    for outline in opml.outlines().filter(|o| o.outlines.len() == 4) {
        println!("Four children: {}", outline.text);
    }

    // Re-encode and parse again; the output is canonical
    let xml = opml.to_xml();
    match xml.parse::<Opml>() {
        Ok(again) if again == opml => println!("{}", xml),
        Ok(_) => {
            eprintln!("round trip changed the document");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("re-parse failed: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
