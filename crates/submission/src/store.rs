use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};

use crate::Submission;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// In-process submission log.
///
/// Append-only apart from in-place status changes. Every accepted submission
/// is also published on a broadcast channel for the notification
/// subscription; publishing never blocks and never fails the append.
#[derive(Clone)]
pub struct Store {
    submissions: Arc<RwLock<Vec<Submission>>>,
    events: broadcast::Sender<Submission>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

impl Store {
    pub fn new(channel_capacity: usize) -> Self {
        let (events, _) = broadcast::channel(channel_capacity.max(1));

        Self {
            submissions: Arc::default(),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Submission> {
        self.events.subscribe()
    }

    pub async fn append(&self, submission: Submission) {
        self.submissions.write().await.push(submission);
    }

    pub fn publish(&self, submission: Submission) {
        let id = submission.id.to_owned();
        if self.events.send(submission).is_err() {
            tracing::debug!(submission_id = %id, "no notification subscriber");
        }
    }

    pub async fn read<R>(&self, f: impl FnOnce(&[Submission]) -> R) -> R {
        let submissions = self.submissions.read().await;
        f(&submissions)
    }

    /// Runs `f` on the submission with `id` under the write lock. `None` when
    /// no such submission exists.
    pub async fn update<R>(&self, id: &str, f: impl FnOnce(&mut Submission) -> R) -> Option<R> {
        let mut submissions = self.submissions.write().await;
        submissions.iter_mut().find(|s| s.id == id).map(f)
    }

    pub async fn len(&self) -> usize {
        self.submissions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
