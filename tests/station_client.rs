//! Station client against a local stub of the WindWiz API

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

use windspeak::{Reading, StationClient, StationError};

const INDEX: &str = r#"[{"id": "torekov", "name": "Torekov"}, {"id": "skanor"}]"#;
const HISTORY: &str = r#"[
    {"winddir_avg": 337.5, "windspeed_avg": 7.2},
    {"winddir_avg": 300.0, "windspeed_avg": 6.0}
]"#;

/// Serve `requests` connections, answering from a fixed route table
fn serve(requests: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming().take(requests) {
            let mut stream = stream.unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).unwrap();
                if header == "\r\n" || header.is_empty() {
                    break;
                }
            }

            let path = request_line.split_whitespace().nth(1).unwrap_or("");
            let (status, body) = match path {
                "/api/v3/index.json" => ("200 OK", INDEX),
                "/api/v3/torekov/history.json" => ("200 OK", HISTORY),
                "/api/v3/skanor/history.json" => ("200 OK", "[]"),
                _ => ("404 Not Found", "{}"),
            };

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        }
    });

    format!("http://{}/api/v3", addr)
}

#[test]
fn test_list_stations() {
    let client = StationClient::with_url(serve(1));
    let stations = client.list_stations().expect("Failed to list stations");
    let ids: Vec<&str> = stations.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["torekov", "skanor"]);
}

#[test]
fn test_latest_reading() {
    let client = StationClient::with_url(serve(2));
    let reading = client.latest_reading("torekov").expect("Failed to fetch reading");
    assert_eq!(reading, Reading::new(337.5, 7.2));
}

#[test]
fn test_unknown_station_is_checked_against_index() {
    let client = StationClient::with_url(serve(1));
    let err = client.latest_reading("falsterbo").unwrap_err();
    assert!(matches!(err, StationError::UnknownStation(ref id) if id == "falsterbo"));
}

#[test]
fn test_empty_history() {
    let client = StationClient::with_url(serve(2));
    let err = client.latest_reading("skanor").unwrap_err();
    assert!(matches!(err, StationError::EmptyHistory(_)));
}

#[test]
fn test_http_error_status() {
    let client = StationClient::with_url(serve(1));
    let err = client.history("falsterbo").unwrap_err();
    assert!(matches!(err, StationError::Http(_)));
}
