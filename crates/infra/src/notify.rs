//! Notifier adapters

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{info, warn};
use veggieworld_core::ports::Notifier;
use veggieworld_domain::constants::NOTICE_QUEUE_CAPACITY;
use veggieworld_domain::{Notice, NoticeVariant};

/// Forwards notices to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.variant {
            NoticeVariant::Default => {
                info!(title = %notice.title, description = %notice.description, "notice")
            }
            NoticeVariant::Destructive | NoticeVariant::Blocking => warn!(
                title = %notice.title,
                description = %notice.description,
                variant = ?notice.variant,
                "notice"
            ),
        }
    }
}

/// Keeps the most recent notices in memory until the shell drains them
///
/// Once `capacity` notices are pending the oldest one is dropped for each new
/// arrival.
#[derive(Debug)]
pub struct RecordingNotifier {
    notices: Mutex<VecDeque<Notice>>,
    capacity: usize,
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::with_capacity(NOTICE_QUEUE_CAPACITY)
    }
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `capacity` pending notices (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { notices: Mutex::new(VecDeque::with_capacity(capacity)), capacity }
    }

    /// Copy of every pending notice, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().iter().cloned().collect()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().back().cloned()
    }

    /// Remove and return pending notices, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        self.notices.lock().drain(..).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        let mut notices = self.notices.lock();
        if notices.len() == self.capacity {
            notices.pop_front();
        }
        notices.push_back(notice);
    }
}

/// Hands every notice to each target in order
#[derive(Clone, Default)]
pub struct FanoutNotifier {
    targets: Vec<Arc<dyn Notifier>>,
}

impl FanoutNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, target: Arc<dyn Notifier>) -> Self {
        self.targets.push(target);
        self
    }
}

impl Notifier for FanoutNotifier {
    fn notify(&self, notice: Notice) {
        for target in &self.targets {
            target.notify(notice.clone());
        }
    }
}
