//! Log capture for unit tests
//!
//! Records are kept per thread, so tests running in parallel only see the
//! lines their own code emitted.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;

use log::{LevelFilter, Log, Metadata, Record};
use std::sync::Once;
use std::thread_local;

thread_local! {
    static LINES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.level() <= log::Level::Info {
            LINES.with(|lines| lines.borrow_mut().push(record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Run `f` and return the `info`-or-louder lines it logged on this thread.
pub(crate) fn capture<F: FnOnce()>(f: F) -> Vec<String> {
    INIT.call_once(|| {
        // Another logger may already be installed; capture is then a no-op
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Info);
    });

    LINES.with(|lines| lines.borrow_mut().clear());
    f();
    LINES.with(|lines| lines.borrow_mut().drain(..).collect())
}
