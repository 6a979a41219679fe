use crate::loc::SourceOrigin;
use crate::messages::GraphMessage;
use crate::messages::GraphMessageSeverity;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

/// An append-only, shareable sink of [GraphMessage]s.
///
/// Cloning a `GraphMessageCollection` produces another handle to the *same*
/// underlying collection, so a collection can be handed to concurrently
/// executing fields and read back once they complete. Insertion order is
/// preserved.
#[derive(Clone, Debug, Default)]
pub struct GraphMessageCollection {
    messages: Arc<Mutex<Vec<GraphMessage>>>,
}
impl GraphMessageCollection {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<GraphMessage>> {
        // Poisoning is ignored: the guarded Vec is only ever appended to.
        self.messages.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add(&self, message: GraphMessage) {
        self.lock().push(message);
    }

    pub fn critical(
        &self,
        code: impl Into<String>,
        message: impl Into<String>,
        origin: SourceOrigin,
    ) {
        self.add(GraphMessage::critical(code, message, origin));
    }

    pub fn warning(
        &self,
        code: impl Into<String>,
        message: impl Into<String>,
        origin: SourceOrigin,
    ) {
        self.add(GraphMessage::warning(code, message, origin));
    }

    /// Appends a snapshot of every message in `other` (in order).
    pub fn add_range(&self, other: &GraphMessageCollection) {
        if Arc::ptr_eq(&self.messages, &other.messages) {
            return;
        }
        let incoming = other.to_vec();
        self.lock().extend(incoming);
    }

    pub fn extend(&self, messages: impl IntoIterator<Item = GraphMessage>) {
        let incoming: Vec<GraphMessage> = messages.into_iter().collect();
        self.lock().extend(incoming);
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.lock().iter().any(|msg| msg.code() == code)
    }

    pub fn count_code(&self, code: &str) -> usize {
        self.lock().iter().filter(|msg| msg.code() == code).count()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// `true` when no [Critical](GraphMessageSeverity::Critical) message has
    /// been recorded.
    pub fn is_successful(&self) -> bool {
        !self.lock().iter().any(|msg| msg.is_critical())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// The highest severity recorded so far, if any.
    pub fn severity(&self) -> Option<GraphMessageSeverity> {
        self.lock().iter().map(|msg| msg.severity()).max()
    }

    pub fn to_vec(&self) -> Vec<GraphMessage> {
        self.lock().clone()
    }
}
impl FromIterator<GraphMessage> for GraphMessageCollection {
    fn from_iter<T: IntoIterator<Item = GraphMessage>>(iter: T) -> Self {
        Self {
            messages: Arc::new(Mutex::new(iter.into_iter().collect())),
        }
    }
}
