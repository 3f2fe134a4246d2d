use std::sync::Arc;

use parking_lot::Mutex;

use async_trait::async_trait;
use ltcwatch::domain::Notice;
use ltcwatch::error::NotifyError;
use ltcwatch::port::Notifier;

/// Thread-safe notice collector for notification assertions in tests.
///
/// A failing recorder still records every attempt before rejecting it.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.notices.lock().len()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, notice: &Notice) -> Result<(), NotifyError> {
        self.notices
            .lock()
            .push(notice.clone());
        if self.fail {
            return Err(NotifyError::Rejected { status: 500 });
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
