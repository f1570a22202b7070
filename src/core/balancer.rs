use crate::core::directory::Directory;
use crate::domain::model::Professional;
use crate::utils::error::{MatchError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Process-lifetime rotation counters, one per specialty group.
///
/// The stored counter grows without bound; only the selection index is
/// reduced modulo the group size. The read-increment sequence holds the
/// mutex, so concurrent requests against the same group never observe
/// the same counter value.
pub struct RoundRobinBalancer {
    directory: Arc<Directory>,
    counters: Mutex<HashMap<String, u64>>,
}

impl RoundRobinBalancer {
    pub fn new(directory: Arc<Directory>) -> Self {
        Self {
            directory,
            counters: Mutex::new(HashMap::new()),
        }
    }

    /// Next professional for `group_name`, in declared member order.
    /// Fails only when the group is not registered, which is a
    /// configuration fault rather than a user error.
    pub fn next_in_group(&self, group_name: &str) -> Result<Professional> {
        let group = self
            .directory
            .group(group_name)
            .ok_or_else(|| MatchError::UnknownGroupError {
                name: group_name.to_string(),
            })?;

        let mut counters = self
            .counters
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let counter = counters.entry(group_name.to_string()).or_insert(0);
        let index = (*counter % group.members.len() as u64) as usize;
        *counter += 1;
        drop(counters);

        let key = &group.members[index];
        self.directory
            .get(key)
            .cloned()
            .ok_or_else(|| MatchError::ConfigError {
                message: format!(
                    "specialty group '{}' references unknown professional '{}'",
                    group_name, key
                ),
            })
    }

    /// Read-only view of the rotation counters, for diagnostics.
    pub fn snapshot(&self) -> HashMap<String, u64> {
        self.counters
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
