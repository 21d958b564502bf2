//! Shared statement buffer
//!
//! One buffer backs every handle derived from a statement. Handles hold it
//! through `Rc<RefCell<_>>`, so cloning a handle aliases the buffer instead of
//! copying it, and the `Rc` keeps handles on a single thread.

use crate::config::{Quoting, StatementConfig};
use std::cell::RefCell;
use std::rc::Rc;

pub(crate) type SharedBuffer = Rc<RefCell<Buffer>>;

/// Append-only statement text plus the config it was created with
#[derive(Debug)]
pub(crate) struct Buffer {
    text: String,
    config: StatementConfig,
}

impl Buffer {
    /// Starts the text with the traversal source token
    pub(crate) fn new(config: StatementConfig) -> Self {
        Self {
            text: config.source.clone(),
            config,
        }
    }

    pub(crate) fn shared(config: StatementConfig) -> SharedBuffer {
        Rc::new(RefCell::new(Self::new(config)))
    }

    pub(crate) fn append(&mut self, fragment: &str) {
        self.text.push_str(fragment);
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn config(&self) -> &StatementConfig {
        &self.config
    }

    pub(crate) fn quoting(&self) -> Quoting {
        self.config.quoting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_starts_with_source() {
        let buffer = Buffer::new(StatementConfig::default());
        assert_eq!(buffer.text(), "g");

        let buffer = Buffer::new(StatementConfig::default().with_source("social"));
        assert_eq!(buffer.text(), "social");
    }

    #[test]
    fn test_buffer_append_only() {
        let shared = Buffer::shared(StatementConfig::default());
        let alias = Rc::clone(&shared);

        shared.borrow_mut().append(".V()");
        alias.borrow_mut().append(".count()");

        assert_eq!(shared.borrow().text(), "g.V().count()");
        assert_eq!(shared.borrow().quoting(), Quoting::Verbatim);
    }
}
