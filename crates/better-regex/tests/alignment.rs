//! Alignment defects between the group table and a misbehaving engine.

use std::sync::Mutex;

use better_regex::{
    CaptureRanges, Engine, EngineError, MatchOptions, NamedRegex, RegexError, RegexOptions,
};
use regex::Regex;

struct RecordingLogger;

static RECORDS: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());
static LOGGER: RecordingLogger = RecordingLogger;

impl log::Log for RecordingLogger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        if let Ok(mut records) = RECORDS.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

fn install_logger() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Trace);
}

fn logged_errors() -> Vec<String> {
    RECORDS.lock().map_or_else(
        |_| Vec::new(),
        |records| {
            records
                .iter()
                .filter(|(level, _)| *level == log::Level::Error)
                .map(|(_, message)| message.clone())
                .collect()
        },
    )
}

/// Engine that silently wraps the pattern in an extra capturing group.
struct ExtraGroupEngine(Regex);

impl Engine for ExtraGroupEngine {
    fn compile(pattern: &str, options: &RegexOptions) -> Result<Self, EngineError> {
        <Regex as Engine>::compile(&format!("({pattern})"), options).map(Self)
    }

    fn captures_len(&self) -> usize {
        self.0.captures_len()
    }

    fn execute(
        &self,
        subject: &str,
        options: &MatchOptions,
    ) -> Result<Vec<CaptureRanges>, EngineError> {
        Engine::execute(&self.0, subject, options)
    }
}

#[test]
fn engine_group_count_mismatch_is_reported_loudly() {
    install_logger();
    let Ok(regex) =
        NamedRegex::<ExtraGroupEngine>::with_engine("(?<a>x)(y)", RegexOptions::default())
    else {
        panic!("pattern should analyze");
    };

    let Err(err) = regex.captures("xy") else {
        panic!("misaligned engine must not produce results");
    };
    assert!(matches!(
        err,
        RegexError::Alignment {
            table: 2,
            engine: 3
        }
    ));
    assert!(
        logged_errors()
            .iter()
            .any(|message| message.contains("engine reports 3")),
        "alignment defects should be logged at error level"
    );
}
