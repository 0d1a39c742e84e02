use crate::Status;

impl super::Command {
    pub async fn mark_responded(&self, id: impl Into<String>) -> burmuda_shared::Result<Status> {
        let id = id.into();

        let Some(status) = self
            .update(&id, |submission| {
                submission.status = Status::Responded;
                submission.status
            })
            .await
        else {
            burmuda_shared::not_found!("submission {id}");
        };

        Ok(status)
    }
}
