use burmuda_submission::Submission;
use futures::future::BoxFuture;

use crate::Notification;

/// Destination for rendered notifications.
pub trait Sink: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    fn deliver<'a>(
        &'a self,
        submission: &'a Submission,
        notification: &'a Notification,
    ) -> BoxFuture<'a, anyhow::Result<()>>;
}

/// Writes every notification to the log stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl Sink for LogSink {
    fn name(&self) -> &'static str {
        "log"
    }

    fn deliver<'a>(
        &'a self,
        submission: &'a Submission,
        notification: &'a Notification,
    ) -> BoxFuture<'a, anyhow::Result<()>> {
        Box::pin(async move {
            tracing::info!(
                submission_id = %submission.id,
                kind = %submission.kind(),
                email = %submission.payload.email(),
                subject = %notification.subject,
                "\n{}",
                notification.body
            );

            Ok(())
        })
    }
}
