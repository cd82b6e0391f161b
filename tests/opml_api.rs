//! Integration test: OPML read/write API against fixture files

use opml_rs::{Error, Opml, OpmlBool};
use pretty_assertions::assert_eq;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const FIXTURES: &str = "tests/fixtures";

fn fixture(name: &str) -> std::path::PathBuf {
    let _ = env_logger::builder().is_test(true).try_init();
    Path::new(FIXTURES).join(name)
}

#[test]
fn test_open_tiny_reproduces_file() {
    let path = fixture("tiny.opml");
    let opml = Opml::open(&path).expect("Failed to open tiny.opml");

    let original = std::fs::read_to_string(&path).unwrap();
    assert_eq!(opml.to_xml(), original);
}

#[test]
fn test_parse_string_roundtrip() {
    let original = std::fs::read_to_string(fixture("tiny.opml")).unwrap();
    let opml: Opml = original.parse().expect("Failed to parse string");

    assert_eq!(opml.head.title, "tiny");
    assert_eq!(opml.to_xml(), original);
}

#[test]
fn test_save_to_file() {
    let input = fixture("tiny.opml");
    let opml = Opml::open(&input).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("write.opml");
    opml.save(&output).expect("Should save to file");

    assert_eq!(std::fs::read(&input).unwrap(), std::fs::read(&output).unwrap());

    // Saving again truncates instead of appending
    opml.save(&output).unwrap();
    assert_eq!(std::fs::read(&input).unwrap(), std::fs::read(&output).unwrap());
}

#[test]
fn test_save_to_unwritable_path() {
    let opml = Opml::open(fixture("tiny.opml")).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let err = opml
        .save(dir.path().join("missing").join("write.opml"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(!err.is_data_error());
}

#[test]
fn test_open_missing_file() {
    let err = Opml::open(fixture("does-not-exist.opml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(!err.is_data_error());
}

#[test]
fn test_parse_valid() {
    let file = File::open(fixture("valid.opml")).unwrap();
    let opml = Opml::from_reader(BufReader::new(file)).expect("Failed to parse valid.opml");

    assert_eq!(opml.version, "2.0");

    let head = &opml.head;
    assert_eq!(head.title, "playlist.xml");
    assert_eq!(
        head.date_created.as_ref().unwrap().to_string(),
        "27 Jul 2006 13:19 GMT"
    );
    assert_eq!(
        head.date_modified.as_ref().unwrap().to_string(),
        "21 Sep 2006 02:54 PDT"
    );
    assert_eq!(head.owner_name, "Dave Winer");
    assert_eq!(head.owner_email, "dwiner@yahoo.com");
    assert_eq!(head.docs, "http://dev.opml.org/spec2.html");
    assert_eq!(head.expansion_state, "1,3,17");
    assert_eq!(head.vert_scroll_state, Some(1));
    assert_eq!(head.window_top, Some(164));
    assert_eq!(head.window_right, Some(455));

    let outlines: Vec<_> = opml.outlines().collect();
    assert_eq!(outlines.len(), 3);
    assert_eq!(opml.body.outline_count(), 10);

    let podcasts = outlines[0];
    assert_eq!(podcasts.category, vec!["/Music", "/Radio"]);
    assert_eq!(podcasts.outlines.len(), 4);
    let names: Vec<_> = podcasts.outlines.iter().map(|o| o.text.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Morning Coffee Notes",
            "Rocketboom",
            "Harvard Law Radio",
            "The Gillmor Gang"
        ]
    );
    assert_eq!(podcasts.outlines[0].version, "RSS2");
    assert_eq!(podcasts.outlines[1].is_comment, OpmlBool::False);
    assert_eq!(podcasts.outlines[2].is_breakpoint, OpmlBool::False);
    assert_eq!(podcasts.outlines[3].description, "Weekly tech talk");

    let commented: Vec<_> = opml
        .outlines()
        .filter(|o| o.is_comment())
        .map(|o| o.text.as_str())
        .collect();
    assert_eq!(commented, vec!["Old links"]);
    assert_eq!(outlines[1].outlines[0].title, "OPML 2.0");

    assert!(outlines[2].is_breakpoint());
    assert_eq!(outlines[2].outlines[0].outlines[0].text, "step one, part a");
}

#[test]
fn test_valid_roundtrip_is_stable() {
    let opml = Opml::open(fixture("valid.opml")).unwrap();

    let encoded = opml.to_bytes();
    let decoded = Opml::from_bytes(&encoded).expect("Encoded output should parse");

    assert_eq!(decoded, opml);
    assert_eq!(decoded.to_bytes(), encoded);
}

#[test]
fn test_valid_output_omits_false_flags() {
    let xml = Opml::open(fixture("valid.opml")).unwrap().to_xml();

    assert!(!xml.contains("isComment=\"\""));
    assert!(!xml.contains("=\"false\""));
    assert!(xml.contains("<outline text=\"Old links\" isComment=\"true\">"));
    assert!(xml.contains("<outline text=\"Script\" isBreakpoint=\"true\">"));
    assert!(xml.contains("<dateModified>21 Sep 2006 02:54 PDT</dateModified>"));
    assert!(xml.contains("created=\"31 Oct 2005 19:23 GMT\" category=\"/Music,/Radio\""));
}

#[test]
fn test_parse_invalid_files() {
    let cases: [(&str, fn(&Error) -> bool); 4] = [
        ("invalid.opml", |e| matches!(e, Error::Xml(_)) && e.is_malformed()),
        ("invalid-date.opml", |e| {
            matches!(e, Error::InvalidTimestamp(t) if t == "no valid time")
        }),
        ("invalid-date-attr.opml", |e| {
            matches!(e, Error::InvalidTimestamp(_))
        }),
        ("invalid-bool.opml", |e| {
            matches!(e, Error::InvalidBoolean(b) if b == "maybe")
        }),
    ];

    for (name, expected) in cases {
        let err = Opml::open(fixture(name)).expect_err(name);
        assert!(expected(&err), "{}: unexpected error {:?}", name, err);
        assert!(err.is_data_error(), "{}", name);
    }
}

#[cfg(feature = "http")]
mod http {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve a single HTTP response on a local port and return its URL
    fn serve_once(status: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/x-opml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{}/subscriptions.opml", addr)
    }

    fn client() -> reqwest::blocking::Client {
        reqwest::blocking::Client::builder().no_proxy().build().unwrap()
    }

    #[test]
    fn test_parse_http() {
        let body = std::fs::read_to_string(fixture("tiny.opml")).unwrap();
        let url = serve_once("200 OK", body.clone());

        let opml = Opml::from_url_with(&client(), &url).expect("Should fetch and parse");
        assert_eq!(opml.head.title, "tiny");
        assert_eq!(opml.to_xml(), body);
    }

    #[test]
    fn test_http_error_status() {
        let url = serve_once("404 Not Found", String::new());

        let err = Opml::from_url_with(&client(), &url).unwrap_err();
        assert!(matches!(err, Error::Http(_)));
        assert!(!err.is_data_error());
    }

    #[test]
    fn test_http_empty_body() {
        let url = serve_once("200 OK", String::new());

        let err = Opml::from_url_with(&client(), &url).unwrap_err();
        assert!(matches!(err, Error::MalformedXml(_)));
    }
}
