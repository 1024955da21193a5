//! Shared helpers for lexer integration tests.
//!
//! Sources passed to [`assert_lex`] may contain location markers
//! `1️⃣` through `9️⃣`. Markers are removed before lexing; each
//! [`DiagnosticSpec`] names the marker its diagnostic must be anchored at.

#![allow(dead_code, reason = "not every test binary uses every helper")]
#![allow(clippy::expect_used, reason = "Tests can panic")]

use std::sync::Once;

use quill_diagnostic::Diagnostic;
use quill_lexer::{lex, LexOptions, LexOutput};

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber once per test binary, if `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

const MARKERS: [&str; 9] = [
    "1\u{FE0F}\u{20E3}",
    "2\u{FE0F}\u{20E3}",
    "3\u{FE0F}\u{20E3}",
    "4\u{FE0F}\u{20E3}",
    "5\u{FE0F}\u{20E3}",
    "6\u{FE0F}\u{20E3}",
    "7\u{FE0F}\u{20E3}",
    "8\u{FE0F}\u{20E3}",
    "9\u{FE0F}\u{20E3}",
];

/// An expected diagnostic: anchored at `marker` (1-9), with `message`.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticSpec {
    pub marker: u8,
    pub message: &'static str,
}

impl DiagnosticSpec {
    pub const fn new(marker: u8, message: &'static str) -> Self {
        DiagnosticSpec { marker, message }
    }
}

/// Source with markers removed, and the byte offset of each marker found.
pub struct MarkedSource {
    pub text: String,
    offsets: [Option<u32>; 9],
}

impl MarkedSource {
    pub fn parse(source: &str) -> Self {
        let mut text = String::with_capacity(source.len());
        let mut offsets = [None; 9];
        let mut rest = source;
        'outer: while !rest.is_empty() {
            for (i, marker) in MARKERS.iter().enumerate() {
                if let Some(after) = rest.strip_prefix(marker) {
                    assert!(offsets[i].is_none(), "marker {} used twice", i + 1);
                    offsets[i] = Some(u32::try_from(text.len()).unwrap());
                    rest = after;
                    continue 'outer;
                }
            }
            let c = rest.chars().next().unwrap();
            text.push(c);
            rest = &rest[c.len_utf8()..];
        }
        MarkedSource { text, offsets }
    }

    pub fn offset(&self, marker: u8) -> u32 {
        assert!((1..=9).contains(&marker), "marker must be 1-9, got {marker}");
        self.offsets[usize::from(marker - 1)]
            .unwrap_or_else(|| panic!("marker {marker} not present in source"))
    }
}

fn describe(output: &LexOutput<'_>, diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| {
            let (line, col) = output.line_col(d.anchor());
            format!("{line}:{col} {d}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lex `source` with default options and check its diagnostics.
pub fn assert_lex(source: &str, expected: &[DiagnosticSpec]) {
    assert_lex_with(source, &LexOptions::default(), expected);
}

/// Lex `source` with `options` and check its diagnostics: the count, each
/// message, each anchor, and that they come out in source order.
pub fn assert_lex_with(source: &str, options: &LexOptions<'_>, expected: &[DiagnosticSpec]) {
    init_tracing();
    let marked = MarkedSource::parse(source);
    let output = lex(&marked.text, options).expect("test sources fit in u32 offsets");
    let diagnostics = output.diagnostics();

    assert_eq!(
        diagnostics.len(),
        expected.len(),
        "diagnostic count for {:?}:\n{}",
        marked.text,
        describe(&output, &diagnostics)
    );

    for (diag, want) in diagnostics.iter().zip(expected) {
        assert_eq!(diag.message, want.message, "in {:?}", marked.text);
        let offset = marked.offset(want.marker);
        assert_eq!(
            diag.anchor(),
            offset,
            "`{}` anchored at {:?}, expected marker {} at {:?}",
            diag.message,
            output.line_col(diag.anchor()),
            want.marker,
            output.line_col(offset)
        );
    }

    let anchors: Vec<u32> = diagnostics.iter().map(Diagnostic::anchor).collect();
    assert!(
        anchors.windows(2).all(|w| w[0] <= w[1]),
        "diagnostics out of source order: {anchors:?}"
    );
}

/// Lex `source` and assert it produces no diagnostics.
pub fn assert_clean(source: &str) {
    assert_lex(source, &[]);
}
