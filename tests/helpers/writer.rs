#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

/// A writer that can be cloned into a subscriber while the test keeps a
/// handle to read back what was written.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    #[track_caller]
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8(buf.clone()).unwrap()
    }
}

impl io::Write for Writer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
