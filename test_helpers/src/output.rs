//! A cloneable in-memory writer for capturing flag diagnostics.
//!
//! A flag set owns its output writer for as long as it lives, so a plain
//! `Vec<u8>` cannot be inspected until the set is dropped. [`SharedBuffer`]
//! hands one clone to the flag set and keeps another for assertions.
//!
//! # Examples
//!
//! ```
//! use std::io::Write;
//! use ortho_flags_test_helpers::output::SharedBuffer;
//!
//! let buffer = SharedBuffer::default();
//! let mut writer = buffer.clone();
//! writeln!(writer, "flag provided but not defined: -x").expect("write");
//! assert!(buffer.contents().contains("-x"));
//! ```

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Writer whose clones share a single byte buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Everything written so far, decoded lossily as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Whether nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    /// Discard everything written so far.
    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
