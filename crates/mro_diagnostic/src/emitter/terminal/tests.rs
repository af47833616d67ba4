#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::ErrorCode;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E0001)
        .with_message("inconsistent precedence while linearizing `A`")
        .with_label(3, "`A` declared here")
        .with_secondary_label(2, "`C` declared here")
        .with_note("conflicting types: `B`, `C`")
        .with_suggestion("reorder the parents of `A`")
}

fn render(emitter_setup: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut output = Vec::new();
    emitter_setup(&mut output);
    String::from_utf8(output).unwrap()
}

#[test]
fn test_terminal_emitter_no_color() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit(&sample_diagnostic());
        emitter.flush();
    });

    assert!(text.starts_with("error[E0001]: inconsistent precedence"));
    assert!(text.contains("  --> line 3: `A` declared here\n"));
    assert!(text.contains("      line 2: `C` declared here\n"));
    assert!(text.contains("  = note: conflicting types: `B`, `C`\n"));
    assert!(text.contains("  = help: reorder the parents of `A`\n"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Always, false);
        emitter.emit(&sample_diagnostic());
    });
    assert!(text.contains("\x1b["));
    assert!(text.contains("E0001"));
}

#[test]
fn test_auto_color_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_color_mode_from_name() {
    assert_eq!(ColorMode::from_name("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::from_name("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::from_name("auto"), Some(ColorMode::Auto));
    assert_eq!(ColorMode::from_name("sometimes"), None);
}

#[test]
fn test_source_name_prefixes_lines() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false)
            .with_source_name("collections.txt");
        emitter.emit(&sample_diagnostic());
    });
    assert!(text.contains("  --> collections.txt:3: `A` declared here"));
}

#[test]
fn test_warning_header() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit(&Diagnostic::warning(ErrorCode::W0101).with_message("repeated parent"));
    });
    assert!(text.starts_with("warning[W0101]: repeated parent"));
}

#[test]
fn test_emit_all() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_all(&[
            Diagnostic::error(ErrorCode::E0102).with_message("error 1"),
            Diagnostic::error(ErrorCode::E0103).with_message("error 2"),
        ]);
    });
    assert!(text.contains("error 1"));
    assert!(text.contains("error 2"));
}

#[test]
fn test_summary_errors_and_warnings() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_summary(2, 1);
    });
    assert_eq!(text, "error: aborting due to 2 previous errors; 1 warning emitted\n");
}

#[test]
fn test_summary_single_error() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_summary(1, 0);
    });
    assert_eq!(text, "error: aborting due to previous error\n");
}

#[test]
fn test_summary_warnings_only() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_summary(0, 3);
    });
    assert_eq!(text, "warning: 3 warnings emitted\n");
}

#[test]
fn test_summary_silent_when_clean() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_summary(0, 0);
    });
    assert!(text.is_empty());
}
