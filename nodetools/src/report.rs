//! The channel non-fatal failures are reported to.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;

use crate::error::NodeToolsError;

/// Receives every failure of the DOM helpers.
///
/// Operations never fail loudly: they report here and return an empty result.
pub trait Reporter {
    fn report(&self, error: NodeToolsError);
}

/// Logs failures as warnings, which end up on the browser console when
/// `setup_logging` was called.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, error: NodeToolsError) {
        warn!("{error}");
    }
}

/// Keeps failures in memory.
#[derive(Clone, Debug, Default)]
pub struct CollectingReporter(Rc<RefCell<Vec<NodeToolsError>>>);

impl CollectingReporter {
    /// Removes and returns the failures reported so far.
    pub fn take(&self) -> Vec<NodeToolsError> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, error: NodeToolsError) {
        warn!("{error}");
        self.0.borrow_mut().push(error);
    }
}

impl<R: Reporter + ?Sized> Reporter for Rc<R> {
    fn report(&self, error: NodeToolsError) {
        R::report(self, error)
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, error: NodeToolsError) {
        R::report(self, error)
    }
}

/// Turns the `Err` of an operation into a report.
pub(crate) trait OrReport<T> {
    fn or_report(self, reporter: &dyn Reporter) -> Option<T>;
}

impl<T> OrReport<T> for Result<T, NodeToolsError> {
    fn or_report(self, reporter: &dyn Reporter) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                reporter.report(error);
                None
            }
        }
    }
}
