//! Where failed operations end up.

use crate::error::CanvasError;
use std::cell::RefCell;
use std::rc::Rc;

/// Receives operations that failed. The session keeps running afterwards.
pub trait ErrorSink {
    fn report(&mut self, operation: &str, error: &CanvasError);
}

/// Logs failures at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ErrorSink for LogSink {
    fn report(&mut self, operation: &str, error: &CanvasError) {
        log::error!("Error {operation}: {error}");
    }
}

/// Logs failures and keeps their messages.
///
/// Clones share the message list.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingSink {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.messages.borrow().len()
    }
}

impl ErrorSink for RecordingSink {
    fn report(&mut self, operation: &str, error: &CanvasError) {
        LogSink.report(operation, error);
        self.messages
            .borrow_mut()
            .push(format!("Error {operation}: {error}"));
    }
}
