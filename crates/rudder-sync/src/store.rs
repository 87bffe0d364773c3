use crate::StoreError;

/// Key under which a successful trigger persists its source id.
pub const SOURCE_ID_KEY: &str = "source_id";

/// Key-value persistence shared across invocations.
///
/// A trigger invocation records its source id through this interface; a
/// later status-check invocation without an explicit `--source-id` reads
/// it back. Implementations own the storage layout.
pub trait SourceIdStore {
    /// Read a previously persisted value, `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Persist a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
