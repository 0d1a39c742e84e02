use std::sync::Arc;

use burmuda_submission::{Store, Submission};
use tokio::{
    sync::{
        broadcast::{
            self,
            error::{RecvError, TryRecvError},
        },
        oneshot,
    },
    task::JoinHandle,
};

use crate::{LogSink, Sink, render};

/// Builds the background task that announces every stored submission.
pub fn subscribe_submission(store: &Store) -> SubscribeBuilder {
    SubscribeBuilder {
        receiver: store.subscribe(),
        sinks: vec![Arc::new(LogSink)],
    }
}

pub struct SubscribeBuilder {
    receiver: broadcast::Receiver<Submission>,
    sinks: Vec<Arc<dyn Sink>>,
}

impl SubscribeBuilder {
    pub fn sink(mut self, sink: impl Sink) -> Self {
        self.sinks.push(Arc::new(sink));
        self
    }

    pub fn run(self) -> Subscription {
        let (shutdown, shutdown_rx) = oneshot::channel();
        let handle = tokio::spawn(process(self.receiver, self.sinks, shutdown_rx));

        tracing::info!("Notification subscription started");

        Subscription { shutdown, handle }
    }
}

/// Handle on a running notification subscription.
pub struct Subscription {
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl Subscription {
    /// Stops the subscription once every submission already queued has been
    /// delivered.
    pub async fn shutdown_and_wait(self) -> anyhow::Result<()> {
        let _ = self.shutdown.send(());
        self.handle.await?;

        Ok(())
    }
}

async fn process(
    mut receiver: broadcast::Receiver<Submission>,
    sinks: Vec<Arc<dyn Sink>>,
    mut shutdown: oneshot::Receiver<()>,
) {
    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => {
                loop {
                    match receiver.try_recv() {
                        Ok(submission) => handle_submitted(&sinks, &submission).await,
                        Err(TryRecvError::Lagged(skipped)) => {
                            tracing::warn!(skipped, "Notification subscription lagged");
                        }
                        Err(_) => break,
                    }
                }
                break;
            }
            result = receiver.recv() => match result {
                Ok(submission) => handle_submitted(&sinks, &submission).await,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Notification subscription lagged");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    tracing::info!("Notification subscription stopped");
}

async fn handle_submitted(sinks: &[Arc<dyn Sink>], submission: &Submission) {
    let notification = render(submission);

    for sink in sinks {
        if let Err(e) = sink.deliver(submission, &notification).await {
            tracing::error!(
                error = %e,
                sink = sink.name(),
                submission_id = %submission.id,
                "Failed to deliver notification"
            );
        }
    }
}
