use serde::Serialize;

use crate::{Kind, Status, Store, Submission};

#[derive(Clone)]
pub struct Query(pub Store);

#[derive(Debug, Default, Clone)]
pub struct FilterQuery {
    pub kind: Option<Kind>,
    pub status: Option<Status>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub total: usize,
    pub new: usize,
    pub read: usize,
    pub responded: usize,
}

impl Query {
    /// Matching submissions, newest first. Submissions sharing a timestamp
    /// keep the later-appended one first.
    pub async fn filter(&self, input: FilterQuery) -> Vec<Submission> {
        self.0
            .read(|submissions| {
                let mut rows = submissions
                    .iter()
                    .rev()
                    .filter(|s| input.kind.is_none_or(|kind| s.kind() == kind))
                    .filter(|s| input.status.is_none_or(|status| s.status == status))
                    .cloned()
                    .collect::<Vec<_>>();

                rows.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
                rows
            })
            .await
    }

    pub async fn find(&self, id: impl AsRef<str>) -> Option<Submission> {
        let id = id.as_ref();

        self.0
            .read(|submissions| submissions.iter().find(|s| s.id == id).cloned())
            .await
    }

    pub async fn find_stat(&self) -> Stat {
        self.0
            .read(|submissions| {
                submissions
                    .iter()
                    .fold(Stat::default(), |mut stat, submission| {
                        stat.total += 1;
                        match submission.status {
                            Status::New => stat.new += 1,
                            Status::Read => stat.read += 1,
                            Status::Responded => stat.responded += 1,
                        }
                        stat
                    })
            })
            .await
    }
}
