use strata_store::Commit;
use strata_types::ObjectId;

/// One commit in a history walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub id: ObjectId,
    pub commit: Commit,
}

impl LogEntry {
    pub fn message(&self) -> &str {
        &self.commit.message
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.commit.parent.as_ref()
    }
}
