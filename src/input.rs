// File: input.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::error::{ProbeError, ProbeResult};
use log::debug;
use reqwest::Url;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Duration;

/// One line of the input file: where to go, how long to wait afterwards,
/// and an optional `Host` header to send instead of the URL's authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    url: String,
    delay_seconds: u64,
    host_header: Option<String>,
}

impl RequestSpec {
    pub fn new(url: impl Into<String>, delay_seconds: u64, host_header: Option<String>) -> Self {
        Self {
            url: url.into(),
            delay_seconds,
            host_header,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn delay_seconds(&self) -> u64 {
        self.delay_seconds
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_seconds)
    }

    pub fn host_header(&self) -> Option<&str> {
        self.host_header.as_deref()
    }
}

/// Parses a single `url,delaySeconds[,hostHeader]` record. `line_no` is 1-based
/// and only used for error reporting.
pub fn parse_line(line_no: usize, line: &str) -> ProbeResult<RequestSpec> {
    let invalid = |reason: &str| ProbeError::InvalidLine {
        line: line_no,
        content: line.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if parts.len() < 2 {
        return Err(invalid("expected `url,delaySeconds[,hostHeader]`"));
    }
    if parts.len() > 3 {
        return Err(invalid("too many fields"));
    }

    let url = parts[0];
    if url.is_empty() {
        return Err(invalid("empty URL"));
    }
    Url::parse(url).map_err(|e| invalid(&format!("invalid URL: {}", e)))?;

    let delay_seconds = parts[1]
        .parse::<u64>()
        .map_err(|_| invalid("delay is not a non-negative integer"))?;

    let host_header = parts
        .get(2)
        .filter(|host| !host.is_empty())
        .map(|host| host.to_string());

    Ok(RequestSpec::new(url, delay_seconds, host_header))
}

pub fn parse_specs<R: BufRead>(reader: R) -> ProbeResult<Vec<RequestSpec>> {
    let mut specs = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        specs.push(parse_line(index + 1, &line)?);
    }
    Ok(specs)
}

pub fn load_specs(path: &Path) -> ProbeResult<Vec<RequestSpec>> {
    let file = File::open(path)?;
    let specs = parse_specs(BufReader::new(file))?;
    debug!("Loaded {} request specs from {}", specs.len(), path.display());
    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_without_host_header() {
        let spec = parse_line(1, "http://a,0").unwrap();
        assert_eq!(spec, RequestSpec::new("http://a", 0, None));
    }

    #[test]
    fn test_parse_with_host_header() {
        let spec = parse_line(1, "http://a,2,myhost").unwrap();
        assert_eq!(spec.url(), "http://a");
        assert_eq!(spec.delay_seconds(), 2);
        assert_eq!(spec.delay(), Duration::from_secs(2));
        assert_eq!(spec.host_header(), Some("myhost"));
    }

    #[test]
    fn test_empty_host_field_means_no_override() {
        let spec = parse_line(1, "https://example.test:8443/path, 5 , ").unwrap();
        assert_eq!(spec.url(), "https://example.test:8443/path");
        assert_eq!(spec.delay_seconds(), 5);
        assert_eq!(spec.host_header(), None);
    }

    #[rstest]
    #[case("http://a")]
    #[case("http://a,")]
    #[case("http://a,abc")]
    #[case("http://a,-1")]
    #[case("http://a,1.5")]
    #[case(",1")]
    #[case("not a url,1")]
    #[case("http://a,1,host,extra")]
    fn test_malformed_lines_are_rejected(#[case] line: &str) {
        match parse_line(7, line) {
            Err(ProbeError::InvalidLine { line: no, content, .. }) => {
                assert_eq!(no, 7);
                assert_eq!(content, line);
            }
            other => panic!("expected InvalidLine for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_parse_specs_skips_blank_lines_and_keeps_order() {
        let input = "http://one.test,1\n\n   \nhttp://two.test,0,alt.test\n";
        let specs = parse_specs(Cursor::new(input)).unwrap();
        assert_eq!(
            specs,
            vec![
                RequestSpec::new("http://one.test", 1, None),
                RequestSpec::new("http://two.test", 0, Some("alt.test".to_string())),
            ]
        );
    }

    #[test]
    fn test_parse_specs_reports_physical_line_number() {
        let input = "http://one.test,1\n\nhttp://two.test,x\n";
        match parse_specs(Cursor::new(input)) {
            Err(ProbeError::InvalidLine { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_load_specs_missing_file() {
        let result = load_specs(Path::new("/nonexistent/connprobe/input.txt"));
        assert!(matches!(result, Err(ProbeError::Io(_))));
    }

    #[test]
    fn test_load_specs_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("targets.txt");
        std::fs::write(&path, "http://example.test,1\nhttp://example.test,1\n").unwrap();

        let specs = load_specs(&path).unwrap();
        assert_eq!(specs.len(), 2);
        assert!(specs.iter().all(|s| s.url() == "http://example.test"));
    }
}
