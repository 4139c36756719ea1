//! In-memory logger for asserting on render progress messages.

use std::sync::{Mutex, Once};

static MESSAGES: Mutex<Vec<String>> = Mutex::new(Vec::new());
static INIT: Once = Once::new();

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Info
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut messages) = MESSAGES.lock() {
                messages.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

/// Install the capture logger for this test binary.
pub fn init() {
    INIT.call_once(|| {
        if log::set_logger(&CaptureLogger).is_ok() {
            log::set_max_level(log::LevelFilter::Info);
        }
    });
}

/// Whether any captured message contains `needle`.
pub fn logged(needle: &str) -> bool {
    MESSAGES
        .lock()
        .map(|messages| messages.iter().any(|message| message.contains(needle)))
        .unwrap_or(false)
}
