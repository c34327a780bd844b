//! Tracing writer for the persistent log file.
//!
//! The terminal layer writes straight to stderr; only the file layer needs
//! a custom [`MakeWriter`](tracing_subscriber::fmt::MakeWriter) so each
//! event lands in the shared file as one locked append.

use parking_lot::Mutex;
use std::fs::File;
use std::io::{self, Write};
use std::sync::Arc;

/// [`MakeWriter`](tracing_subscriber::fmt::MakeWriter) for the file layer.
///
/// The file layer should be constructed with `.with_ansi(false)` so the
/// formatter never emits ANSI escape codes.
#[derive(Clone)]
pub struct FileMakeWriter {
    file: Arc<Mutex<File>>,
}

impl FileMakeWriter {
    pub fn new(file: Arc<Mutex<File>>) -> Self {
        Self { file }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for FileMakeWriter {
    type Writer = FileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        FileWriter {
            file: Arc::clone(&self.file),
            buf: Vec::with_capacity(256),
        }
    }
}

/// Per-event writer.
///
/// Buffers the formatted event; on [`Drop`], appends it under the lock.
pub struct FileWriter {
    file: Arc<Mutex<File>>,
    buf: Vec<u8>,
}

impl Write for FileWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }

        let mut file = self.file.lock();
        let _ = file.write_all(&self.buf);
        let _ = file.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn events_are_appended_on_drop() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("rolegate.log");
        let file = File::create(&path).expect("create log file");
        let make = FileMakeWriter::new(Arc::new(Mutex::new(file)));

        {
            let mut w = make.make_writer();
            w.write_all(b"first ").unwrap();
            w.write_all(b"event\n").unwrap();
            // nothing hits the file until drop
            assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
        }
        {
            let mut w = make.make_writer();
            w.write_all(b"second event\n").unwrap();
        }

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "first event\nsecond event\n"
        );
    }
}
