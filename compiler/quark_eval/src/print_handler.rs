//! Output sink for `flush` and `dump`.
//!
//! The log buffer lives in the [`Context`](crate::Context); flushing hands
//! its contents to a print handler:
//! - Stdout: the `quark` binary (default)
//! - Buffer: tests and embedders that want to inspect output
//! - Silent: discard everything
//!
//! Enum dispatch, no trait objects.

use std::sync::Arc;

use parking_lot::Mutex;

/// Print handler that captures flushed lines in memory.
#[derive(Debug, Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Everything captured so far.
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Where flushed output goes.
#[derive(Debug)]
pub enum PrintHandler {
    Stdout,
    Buffer(BufferPrintHandler),
    Silent,
}

impl PrintHandler {
    /// Emit one line.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    /// Captured output. Empty for handlers that don't capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(h) => h.output(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Drop captured output; no-op for handlers that don't capture.
    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Print handler shared between an interpreter and whoever reads its output.
pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}
