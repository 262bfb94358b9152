#![allow(dead_code)]

//! Shell-script builders for driving the execution engine with known
//! output, without depending on anything beyond `sh` and `printf`.

/// Quote `s` for use as a single shell word.
fn sh_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Build a `sh` script that writes `out_lines` to stdout and `err_lines`
/// to stderr, one `printf` per line.
///
/// Each stream's lines are emitted in order; how the two streams interleave
/// is up to the scheduler, which is exactly what the engine's contract
/// leaves open.
pub fn emit_lines_script<S, T>(out_lines: &[S], err_lines: &[T]) -> String
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let mut parts = Vec::new();
    for line in out_lines {
        parts.push(format!("printf '%s\\n' {}", sh_quote(line.as_ref())));
    }
    for line in err_lines {
        parts.push(format!("printf '%s\\n' {} 1>&2", sh_quote(line.as_ref())));
    }
    if parts.is_empty() {
        parts.push("true".to_string());
    }
    parts.join("; ")
}

/// Build a `sh` script that floods stdout with `count` fixed-width lines,
/// comfortably more than a pipe buffer's worth for large counts.
pub fn flood_stdout_script(count: usize) -> String {
    format!(
        "i=0; while [ $i -lt {count} ]; do printf '%06d-abcdefghijklmnopqrstuvwxyz-0123456789\\n' $i; i=$((i+1)); done"
    )
}
