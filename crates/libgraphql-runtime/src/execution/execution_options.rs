use serde::Deserialize;

/// Settings that apply to every query run by a
/// [GraphQueryExecutor](crate::execution::GraphQueryExecutor).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExecutionOptions {
    /// The source item property batch results are keyed by, for batch
    /// fields that do not name their own.
    pub default_batch_key: String,

    /// Include the text of internal errors in response messages.
    pub expose_exceptions: bool,

    /// Attach field timings to `extensions.tracing` of each response.
    pub expose_metrics: bool,

    /// Reject documents whose field nesting is deeper than this.
    pub max_query_depth: Option<usize>,

    /// Execute the top-level fields of a mutation one after another, in
    /// document order.
    pub serial_mutations: bool,
}
impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            default_batch_key: "id".to_string(),
            expose_exceptions: false,
            expose_metrics: false,
            max_query_depth: None,
            serial_mutations: true,
        }
    }
}
