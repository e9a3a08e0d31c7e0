//! End-to-end runs with stand-in renderers.

#![cfg(unix)]

mod common;

use common::spawn_command;

/// Copies the master to `tenframes.pdf` next to it.
const COPY_RENDERER: &str = r#"sh -c 'cp "$1" "${1%.tex}.pdf"' sh"#;

#[test]
fn rendered_document_is_collected() {
    let out = tempfile::tempdir().unwrap();
    let output = spawn_command(&[
        "generate",
        "--seed",
        "3",
        "--pages",
        "2",
        "--renderer",
        COPY_RENDERER,
        "--output-dir",
        out.path().to_str().unwrap(),
        "--no-echo",
        "-q",
    ]);
    assert!(
        output.status.success(),
        "render should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let pdf = std::fs::read_to_string(out.path().join("tenframes.pdf")).unwrap();
    assert_eq!(pdf.matches("\\pagebreak").count(), 2);
}

#[test]
fn renderer_sees_frame_files() {
    let output = spawn_command(&[
        "generate",
        "--pages",
        "1",
        "--renderer",
        "sh -c 'test -f tenframe00-09.tex && test -f \"$1\"' sh",
        "--no-echo",
        "-q",
    ]);
    assert!(
        output.status.success(),
        "renderer should find frames in its working directory: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn renderer_without_output_still_succeeds() {
    let out = tempfile::tempdir().unwrap();
    let output = spawn_command(&[
        "generate",
        "--renderer",
        "true",
        "--output-dir",
        out.path().to_str().unwrap(),
        "--no-echo",
    ]);
    assert!(output.status.success());
    assert!(!out.path().join("tenframes.pdf").exists());
    assert!(String::from_utf8_lossy(&output.stderr).contains("produced no document"));
}

#[test]
fn renderer_failure_exits_with_render_error() {
    let output = spawn_command(&["generate", "--renderer", "false", "--no-echo"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("renderer 'false' failed"));
}

#[test]
fn missing_renderer_exits_with_render_error() {
    let output = spawn_command(&[
        "generate",
        "--renderer",
        "tenframes-no-such-renderer",
        "--no-echo",
    ]);
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

#[test]
fn renderer_timeout_exits_with_render_error() {
    let output = spawn_command(&[
        "generate",
        "--pages",
        "1",
        "--renderer",
        "sh -c 'exec sleep 10'",
        "--render-timeout",
        "1s",
        "--no-echo",
    ]);
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("did not finish"));
}

#[test]
fn echo_precedes_render() {
    let output = spawn_command(&["generate", "--pages", "1", "--renderer", "false", "-q"]);
    assert_eq!(output.status.code(), Some(4));
    // The master is echoed before the renderer runs, so stdout is complete
    assert!(String::from_utf8_lossy(&output.stdout).contains("\\end{document}"));
}
