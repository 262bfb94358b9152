mod common;
use crate::common::{init_tracing, partition_by_tag};

use debship::errors::DebshipError;
use debship::exec::{self, Invocation};
use debship::types::StreamTag;
use debship_test_utils::scripts::emit_lines_script;

/// `printf 'out\n'` yields exactly one stdout line, newline included.
#[tokio::test]
async fn single_stdout_line_round_trips() {
    init_tracing();

    let lines = Invocation::new(r"printf 'out\n'")
        .unwrap()
        .echo(false)
        .stream()
        .unwrap()
        .collect()
        .await;

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].tag(), StreamTag::Out);
    assert_eq!(lines[0].text(), "out");
    assert!(lines[0].has_newline());
    assert_eq!(lines[0].to_string(), "out\n");
}

/// A final line without a terminator keeps that shape.
#[tokio::test]
async fn unterminated_final_line_is_preserved() {
    init_tracing();

    let lines = Invocation::new(r"printf 'no-eol'")
        .unwrap()
        .echo(false)
        .stream()
        .unwrap()
        .collect()
        .await;

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text(), "no-eol");
    assert!(!lines[0].has_newline());
    assert_eq!(lines[0].to_string(), "no-eol");
}

/// One line per stream: both arrive exactly once, each with its own tag;
/// the interleaving between the streams is unconstrained.
#[tokio::test]
async fn shell_invocation_tags_both_streams() {
    init_tracing();

    let lines = Invocation::shell("echo a; echo b 1>&2")
        .echo(false)
        .colorize_errors(false)
        .stream()
        .unwrap()
        .collect()
        .await;

    assert_eq!(lines.len(), 2);
    let (out, err) = partition_by_tag(&lines);
    assert_eq!(out, vec!["a"]);
    assert_eq!(err, vec!["b"]);
}

/// N stdout lines and M stderr lines fan in to exactly N+M tagged lines,
/// with each stream's own order preserved.
#[tokio::test]
async fn fan_in_delivers_every_line_in_stream_order() {
    init_tracing();

    let out_lines = vec!["one", "two", "three", "four", "five"];
    let err_lines = vec!["alpha", "beta", "gamma"];
    let script = emit_lines_script(&out_lines, &err_lines);

    let lines = Invocation::shell(script)
        .echo(false)
        .colorize_errors(false)
        .stream()
        .unwrap()
        .collect()
        .await;

    assert_eq!(lines.len(), out_lines.len() + err_lines.len());
    assert!(lines.iter().all(|l| l.has_newline()));

    let (out, err) = partition_by_tag(&lines);
    assert_eq!(out, out_lines);
    assert_eq!(err, err_lines);
}

/// capture_stdout joins stdout lines with a single newline and strips the
/// trailing one; stderr does not leak into the result.
#[tokio::test]
async fn capture_stdout_joins_lines() {
    init_tracing();

    let captured = exec::capture_stdout(r"printf 'x\ny\n'").await.unwrap();
    assert_eq!(captured, "x\ny");

    let captured = Invocation::shell("echo keep; echo drop 1>&2")
        .echo(false)
        .capture_stdout()
        .await
        .unwrap();
    assert_eq!(captured, "keep");
}

/// A command that cannot be spawned fails up front, with no stream.
#[tokio::test]
async fn missing_executable_is_a_spawn_error() {
    init_tracing();

    let result = Invocation::new("definitely-not-a-real-binary-4f3a")
        .unwrap()
        .echo(false)
        .stream();

    match result {
        Err(DebshipError::SpawnError { command, .. }) => {
            assert!(command.contains("definitely-not-a-real-binary-4f3a"));
        }
        other => panic!("expected SpawnError, got {other:?}"),
    }
}

/// Quoted arguments survive tokenization as single words.
#[tokio::test]
async fn tokenization_respects_quoting() {
    init_tracing();

    let captured = exec::capture_stdout(r"printf '%s' 'two words'")
        .await
        .unwrap();
    assert_eq!(captured, "two words");
}

/// An empty command line is rejected before anything runs.
#[tokio::test]
async fn empty_command_line_is_rejected() {
    init_tracing();

    assert!(matches!(
        Invocation::new("   "),
        Err(DebshipError::ConfigError(_))
    ));
}
