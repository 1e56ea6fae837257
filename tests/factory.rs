mod common;

use std::time::Duration;

use chrono::DateTime;
use log_factory::{build_logger, build_logger_with_writer, Field, Level, Logger};

use common::SharedBuffer;

fn capture(development: bool) -> (Box<dyn Logger>, SharedBuffer) {
    let buf = SharedBuffer::default();
    let logger = build_logger_with_writer(development, buf.clone());
    (logger, buf)
}

fn message_key(development: bool) -> &'static str {
    if development {
        "M"
    } else {
        "msg"
    }
}

fn time_key(development: bool) -> &'static str {
    if development {
        "T"
    } else {
        "ts"
    }
}

fn stacktrace_key(development: bool) -> &'static str {
    if development {
        "S"
    } else {
        "stacktrace"
    }
}

#[test]
fn test_build_logger_for_both_modes() {
    for development in [true, false] {
        let logger = build_logger(development);
        assert!(logger.enabled(Level::Info));
        assert!(logger.enabled(Level::Error));
    }
}

#[test]
fn test_entries_are_json() {
    for development in [true, false] {
        let (logger, out) = capture(development);
        logger.info("server ready", &[Field::new("port", 8443)]);
        logger.error("request failed", &[Field::new("status", 503)]);

        let entries = out.json_lines();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0][message_key(development)], "server ready");
        assert_eq!(entries[0]["port"], 8443);
        assert_eq!(entries[1]["status"], 503);
    }
}

#[test]
fn test_durations_are_strings() {
    for development in [true, false] {
        let (logger, out) = capture(development);
        logger.info(
            "reconciled",
            &[
                Field::new("elapsed", Duration::from_millis(1500)),
                Field::new("backoff", Duration::from_millis(150)),
            ],
        );
        let entry = &out.json_lines()[0];
        assert_eq!(entry["elapsed"], "1.5s");
        assert_eq!(entry["backoff"], "150ms");
    }
}

#[test]
fn test_timestamps_are_iso8601() {
    for development in [true, false] {
        let (logger, out) = capture(development);
        logger.info("tick", &[]);
        let entry = &out.json_lines()[0];
        let ts = entry[time_key(development)].as_str().expect("timestamp is a string");

        // YYYY-MM-DDTHH:MM:SS.sss±HH:MM
        assert_eq!(ts.len(), 29, "unexpected timestamp {ts}");
        assert_eq!(&ts[10..11], "T");
        assert_eq!(&ts[19..20], ".");
        assert!(DateTime::parse_from_rfc3339(ts).is_ok(), "not ISO-8601: {ts}");
    }
}

#[test]
fn test_development_stacktrace_on_warn() {
    let (logger, out) = capture(true);
    logger.info("fine", &[]);
    logger.warn("careful", &[]);

    let entries = out.json_lines();
    assert!(entries[0].get("S").is_none());
    assert!(entries[1]["S"].as_str().is_some_and(|s| !s.is_empty()));
}

#[test]
fn test_production_stacktrace_on_error_only() {
    let (logger, out) = capture(false);
    logger.warn("careful", &[]);
    logger.error("broken", &[]);

    let entries = out.json_lines();
    assert!(entries[0].get("stacktrace").is_none());
    assert!(entries[1]["stacktrace"].as_str().is_some_and(|s| !s.is_empty()));
}

#[test]
fn test_debug_only_in_development() {
    let (dev, dev_out) = capture(true);
    let (prod, prod_out) = capture(false);
    dev.debug("details", &[]);
    prod.debug("details", &[]);
    assert_eq!(dev_out.json_lines().len(), 1);
    assert!(prod_out.contents().is_empty());
}

#[test]
fn test_production_samples_repeats() {
    let (prod, prod_out) = capture(false);
    let (dev, dev_out) = capture(true);
    for i in 0..150 {
        prod.info("polling", &[Field::new("i", i)]);
        dev.info("polling", &[Field::new("i", i)]);
    }
    assert_eq!(prod_out.json_lines().len(), 100);
    assert_eq!(dev_out.json_lines().len(), 150);
}

#[test]
fn test_loggers_are_independent() {
    let (first, first_out) = capture(false);
    let (second, second_out) = capture(false);

    for _ in 0..100 {
        first.info("burst", &[]);
    }
    second.info("burst", &[]);
    first.info("burst", &[]);

    assert_eq!(first_out.json_lines().len(), 100);
    assert_eq!(second_out.json_lines().len(), 1);

    let a = &first_out.json_lines()[0];
    let b = &second_out.json_lines()[0];
    let keys = |v: &serde_json::Value| -> Vec<String> {
        v.as_object().unwrap().keys().cloned().collect()
    };
    assert_eq!(keys(a), keys(b));
    assert_eq!(a["level"], b["level"]);
}

#[test]
fn test_context_and_name() {
    let (logger, out) = capture(true);
    let child = logger
        .with_name("extension")
        .with_values(vec![Field::new("namespace", "shoot--dev")]);
    child.info("applied", &[]);

    let entry = &out.json_lines()[0];
    assert_eq!(entry["N"], "extension");
    assert_eq!(entry["namespace"], "shoot--dev");
    assert_eq!(entry["L"], "INFO");
    assert_eq!(entry[stacktrace_key(true)], serde_json::Value::Null);
}

#[test]
fn test_fields_cannot_spoof_entry() {
    let (logger, out) = capture(false);
    logger.info(
        "real message",
        &[
            Field::new("ts", 5),
            Field::new("level", "bogus"),
            Field::new("msg", "spoofed"),
        ],
    );

    let entry = &out.json_lines()[0];
    assert_eq!(entry["level"], "info");
    assert_eq!(entry["msg"], "real message");
    let ts = entry["ts"].as_str().expect("timestamp is a string");
    assert!(DateTime::parse_from_rfc3339(ts).is_ok(), "not ISO-8601: {ts}");
    assert_eq!(entry["fields.ts"], 5);
    assert_eq!(entry["fields.level"], "bogus");
    assert_eq!(entry["fields.msg"], "spoofed");
}

#[test]
fn test_long_durations_split_into_units() {
    let (logger, out) = capture(false);
    logger.info(
        "waited",
        &[
            Field::new("a", Duration::from_secs(90)),
            Field::new("b", Duration::from_secs(3600)),
            Field::new("z", Duration::ZERO),
        ],
    );
    let entry = &out.json_lines()[0];
    assert_eq!(entry["a"], "1m30s");
    assert_eq!(entry["b"], "1h0m0s");
    assert_eq!(entry["z"], "0s");
}
