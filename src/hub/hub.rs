use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tokio::sync::mpsc;

use super::breadcrumb::Breadcrumb;
use super::metrics::{compute_snapshot, InteractionSnapshot};
use super::options::Options;
use crate::error::HubError;

/// The monitoring subsystem as seen from the instrumentation layer.
///
/// Implementations must accept concurrent calls from several screens and
/// must not block the caller: this runs on the UI event path.
pub trait Hub: Send + Sync {
    fn options(&self) -> Arc<Options>;

    /// Stamps and accepts a breadcrumb.
    fn add_breadcrumb(&self, breadcrumb: Breadcrumb) -> Result<(), HubError>;
}

/// Keeps the most recent breadcrumbs in memory, evicting the oldest.
#[derive(Debug)]
pub struct RecordingHub {
    options: Arc<Options>,
    buffer: Mutex<VecDeque<Breadcrumb>>,
}

impl RecordingHub {
    pub fn new(options: Arc<Options>) -> Self {
        let capacity = options.max_breadcrumbs;
        Self {
            options,
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().map(|b| b.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn snapshot(&self) -> InteractionSnapshot {
        compute_snapshot(&self.breadcrumbs())
    }

    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }
}

impl Hub for RecordingHub {
    fn options(&self) -> Arc<Options> {
        Arc::clone(&self.options)
    }

    fn add_breadcrumb(&self, mut breadcrumb: Breadcrumb) -> Result<(), HubError> {
        let mut buffer = self.buffer.lock().map_err(|_| HubError::Poisoned)?;
        if buffer.len() >= self.options.max_breadcrumbs {
            buffer.pop_front();
        }
        breadcrumb.timestamp = Some(Utc::now());
        buffer.push_back(breadcrumb);
        Ok(())
    }
}

/// Fire-and-forget hub: stamps breadcrumbs and enqueues them for a consumer
/// task that owns transport. A full queue drops the breadcrumb.
#[derive(Debug, Clone)]
pub struct ChannelHub {
    options: Arc<Options>,
    sender: mpsc::Sender<Breadcrumb>,
}

impl ChannelHub {
    pub fn new(options: Arc<Options>, capacity: usize) -> (Self, mpsc::Receiver<Breadcrumb>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self { options, sender }, receiver)
    }
}

impl Hub for ChannelHub {
    fn options(&self) -> Arc<Options> {
        Arc::clone(&self.options)
    }

    fn add_breadcrumb(&self, mut breadcrumb: Breadcrumb) -> Result<(), HubError> {
        breadcrumb.timestamp = Some(Utc::now());
        self.sender.try_send(breadcrumb).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => HubError::QueueFull,
            mpsc::error::TrySendError::Closed(_) => HubError::Closed,
        })
    }
}
