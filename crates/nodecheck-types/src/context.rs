use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Cooperative cancellation handle passed to every check invocation.
///
/// The flag is shared with the interrupt handler installed at CLI startup.
/// The runner consults it between checks; the filesystem and identity calls
/// inside a check are not individually cancellation-aware.
#[derive(Debug, Clone)]
pub struct CheckContext {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CheckContext {
    pub fn new() -> Self {
        CheckContext {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: None,
        }
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        CheckContext {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Some(deadline),
        }
    }

    /// Shared flag for interrupt handlers to set.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    pub fn is_cancelled(&self) -> bool {
        if self.cancelled.load(Ordering::SeqCst) {
            return true;
        }
        match self.deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }
}

impl Default for CheckContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_fresh_context_is_not_cancelled() {
        let ctx = CheckContext::new();
        assert!(!ctx.is_cancelled());
    }

    #[test]
    fn test_cancel_flag_is_shared() {
        let ctx = CheckContext::new();
        let flag = ctx.cancel_flag();
        flag.store(true, Ordering::SeqCst);
        assert!(ctx.is_cancelled());
    }

    #[test]
    fn test_past_deadline_cancels() {
        let ctx = CheckContext::with_deadline(Instant::now() - Duration::from_secs(1));
        assert!(ctx.is_cancelled());
    }

    #[test]
    fn test_future_deadline_does_not_cancel() {
        let ctx = CheckContext::with_deadline(Instant::now() + Duration::from_secs(3600));
        assert!(!ctx.is_cancelled());
    }
}
