//! Console parser and command tests

use buflog::console::{execute, parse_line, ConsoleError};
use buflog::{CaptureSink, NullSink, RingLog};

#[test]
fn test_parse_command_and_args() {
    let cmd = parse_line("log 1 3");
    assert_eq!(cmd.command, "log");
    assert_eq!(cmd.arg(0), Some("1"));
    assert_eq!(cmd.arg(1), Some("3"));
}

#[test]
fn test_parse_empty_line() {
    let cmd = parse_line("   ");
    assert_eq!(cmd.command, "");
    assert_eq!(cmd.arg(0), None);
}

#[test]
fn test_parse_extra_tokens_are_dropped() {
    let cmd = parse_line("log 1 3 junk");
    assert_eq!(cmd.arg(0), Some("1"));
    assert_eq!(cmd.arg(1), Some("3"));
    assert_eq!(cmd.arg(2), None);
}

#[test]
fn test_int_arg_defaults_and_parses() {
    let cmd = parse_line("log -1");
    assert_eq!(cmd.int_arg(0), Some(-1));
    // Missing argument reads as the "not given" value.
    assert_eq!(cmd.int_arg(1), Some(0));

    let bad = parse_line("log ten");
    assert_eq!(bad.int_arg(0), None);
}

#[test]
fn test_empty_line_is_a_no_op() {
    let primary = NullSink::new();
    let mut log: RingLog<16, 1> = RingLog::new(&primary, true);
    let out = CaptureSink::<64>::new();

    assert!(execute(&parse_line(""), &mut log, &out).is_ok());
    assert!(out.is_empty());
}

#[test]
fn test_unknown_command() {
    let primary = NullSink::new();
    let mut log: RingLog<16, 1> = RingLog::new(&primary, true);
    let out = CaptureSink::<64>::new();

    let err = execute(&parse_line("frobnicate"), &mut log, &out).unwrap_err();
    assert_eq!(err, ConsoleError::UnknownCommand);
    assert_eq!(err.code(), "E01");
    assert_eq!(format!("{}", err), "E01: unknown command");
}

#[test]
fn test_help_lists_every_command() {
    let primary = NullSink::new();
    let mut log: RingLog<16, 1> = RingLog::new(&primary, true);
    let out = CaptureSink::<256>::new();

    assert!(execute(&parse_line("help"), &mut log, &out).is_ok());
    for name in ["help", "log", "mute", "unmute", "stats"] {
        assert!(out.as_str().contains(name), "missing {}", name);
    }
}

#[test]
fn test_help_for_one_command() {
    let primary = NullSink::new();
    let mut log: RingLog<16, 1> = RingLog::new(&primary, true);
    let out = CaptureSink::<128>::new();

    assert!(execute(&parse_line("help log"), &mut log, &out).is_ok());
    assert!(out.as_str().starts_with("log: "));

    let err = execute(&parse_line("help bogus"), &mut log, &out).unwrap_err();
    assert_eq!(err, ConsoleError::UnknownCommand);
}

#[test]
fn test_log_command_prints_window() {
    let primary = NullSink::new();
    let mut log: RingLog<32, 1> = RingLog::new(&primary, true);
    log.write_all(b"l1\nl2\nl3\nl4\n");

    let out = CaptureSink::<128>::new();
    assert!(execute(&parse_line("log 1 3"), &mut log, &out).is_ok());
    assert_eq!(out.as_str(), "----\nl2\nl3\nl4\n----\n3 lines\n");
}

#[test]
fn test_log_command_default_window() {
    let primary = NullSink::new();
    let mut log: RingLog<32, 1> = RingLog::new(&primary, true);
    log.write_all(b"hi\n");

    let out = CaptureSink::<64>::new();
    assert!(execute(&parse_line("log"), &mut log, &out).is_ok());
    assert_eq!(out.as_str(), "----\nhi\n----\n1 lines\n");
}

#[test]
fn test_log_command_rejects_garbage_argument() {
    let primary = NullSink::new();
    let mut log: RingLog<16, 1> = RingLog::new(&primary, true);
    let out = CaptureSink::<64>::new();

    let err = execute(&parse_line("log ten"), &mut log, &out).unwrap_err();
    assert_eq!(err, ConsoleError::InvalidValue);
    assert!(out.is_empty());
}

#[test]
fn test_log_command_surfaces_usage_errors() {
    let primary = NullSink::new();
    let mut log: RingLog<16, 1> = RingLog::new(&primary, true);
    let out = CaptureSink::<64>::new();

    let err = execute(&parse_line("log 5 3"), &mut log, &out).unwrap_err();
    assert_eq!(err, ConsoleError::BadRange);
    // The query already wrote its own message.
    assert_eq!(out.as_str(), "<start> must be smaller than <end>\n");
}

#[test]
fn test_mute_and_unmute() {
    let primary = CaptureSink::<32>::new();
    let mut log: RingLog<16, 1> = RingLog::new(&primary, true);
    let out = CaptureSink::<32>::new();

    assert!(execute(&parse_line("mute"), &mut log, &out).is_ok());
    assert!(!log.is_enabled());
    log.write_all(b"dropped\n");
    assert!(primary.is_empty());

    assert!(execute(&parse_line("unmute"), &mut log, &out).is_ok());
    assert!(log.is_enabled());
    log.write_all(b"heard\n");
    assert_eq!(primary.as_str(), "heard\n");
    assert_eq!(out.as_str(), "muted\nunmuted\n");
}

#[test]
fn test_stats_reports_buffer_state() {
    let primary = NullSink::new();
    let mirror = NullSink::new();
    let mut log: RingLog<32, 2> = RingLog::new(&primary, true);
    log.add_client(&mirror);
    log.write_all(b"abcde");

    let out = CaptureSink::<256>::new();
    assert!(execute(&parse_line("stats"), &mut log, &out).is_ok());
    let text = out.as_str();
    assert!(text.contains("capacity: 32 bytes"));
    assert!(text.contains("cursor: 5"));
    assert!(text.contains("clients: 1"));
    assert!(text.contains("enabled: true"));
}
