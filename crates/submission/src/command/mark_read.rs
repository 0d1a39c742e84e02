use crate::Status;

impl super::Command {
    /// Moves a `new` submission to `read`. Already `read` or `responded`
    /// submissions are left as they are.
    pub async fn mark_read(&self, id: impl Into<String>) -> burmuda_shared::Result<Status> {
        let id = id.into();

        let Some(status) = self
            .update(&id, |submission| {
                if submission.status < Status::Read {
                    submission.status = Status::Read;
                }

                submission.status
            })
            .await
        else {
            burmuda_shared::not_found!("submission {id}");
        };

        Ok(status)
    }
}
