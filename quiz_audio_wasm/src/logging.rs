use std::{io, panic};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use crate::log;

/// Collects one formatted event and hands it to `console.log` when dropped
pub struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if !self.buffer.is_empty() {
            log(String::from_utf8_lossy(&self.buffer).trim_end());
        }
    }
}

pub struct Console;

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buffer: Vec::new() }
    }
}

/// Route panics and `tracing` events to the browser console
pub fn setup_logging() {
    panic::set_hook(Box::new(console_error_panic_hook::hook));

    let subscriber = tracing_subscriber::fmt()
        .with_writer(Console)
        .without_time()
        .with_target(false)
        .with_max_level(Level::DEBUG)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        console_log!("tracing subscriber was already installed");
    }
}
