use super::{BackupError, BackupSnapshot};

/// Trait for snapshot persistence. One snapshot per month label (latest
/// wins).
pub trait BackupStore: Send + Sync {
    /// Save (or overwrite) the snapshot under its label.
    fn save_snapshot(&self, snapshot: BackupSnapshot) -> Result<(), BackupError>;

    /// Load the snapshot for the given label.
    fn get_snapshot(&self, label: &str) -> Result<Option<BackupSnapshot>, BackupError>;

    /// All snapshots, newest `created_at` first.
    fn list_snapshots(&self) -> Result<Vec<BackupSnapshot>, BackupError>;

    /// Delete the snapshot for the given label. Returns true if one existed.
    fn delete_snapshot(&self, label: &str) -> Result<bool, BackupError>;

    /// Delete every snapshot. Returns how many were removed.
    fn clear(&self) -> Result<usize, BackupError>;
}
