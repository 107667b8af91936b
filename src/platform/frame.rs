//! Host frame bookkeeping
//!
//! The host keeps at most one animation frame outstanding. `PendingFrame`
//! records the handle of that request so it can be cancelled on quit, and so
//! a restart knows whether a frame still has to be requested.

/// The outstanding frame request, if any
#[derive(Debug)]
pub struct PendingFrame<H> {
    handle: Option<H>,
}

impl<H> PendingFrame<H> {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Record the outcome of a frame request
    ///
    /// A failed request leaves nothing pending; the error is handed back for
    /// logging.
    pub fn record<E>(&mut self, result: Result<H, E>) -> Result<(), E> {
        match result {
            Ok(handle) => {
                self.handle = Some(handle);
                Ok(())
            }
            Err(e) => {
                self.handle = None;
                Err(e)
            }
        }
    }

    /// The requested frame started running
    pub fn fired(&mut self) {
        self.handle = None;
    }

    /// Take the handle for cancellation
    pub fn take(&mut self) -> Option<H> {
        self.handle.take()
    }

    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }

    /// Whether the host must request a frame after a restart
    ///
    /// `was_halted` is the result of `GameLoop::restart`. A running loop whose
    /// last request failed has nothing pending and needs a new one too.
    pub fn needs_request(&self, was_halted: bool) -> bool {
        was_halted || !self.is_pending()
    }
}

impl<H> Default for PendingFrame<H> {
    fn default() -> Self {
        Self::new()
    }
}
