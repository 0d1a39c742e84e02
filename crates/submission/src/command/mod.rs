use std::ops::Deref;

use crate::{Payload, Store, Submission};

mod mark_read;
mod mark_responded;
mod submit_consultation;
mod submit_contact;

pub use submit_consultation::SubmitConsultationInput;
pub use submit_contact::SubmitContactInput;

#[derive(Clone)]
pub struct Command(pub Store);

impl Deref for Command {
    type Target = Store;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub fn new(store: Store) -> Self {
        Self(store)
    }

    async fn create(&self, payload: Payload) -> String {
        let submission = Submission::new(payload);
        let id = submission.id.to_owned();
        let kind = submission.kind();

        self.append(submission.clone()).await;

        tracing::info!(submission_id = %id, %kind, "Submission stored");

        self.publish(submission);

        id
    }
}
