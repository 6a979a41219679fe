/// How a field's resolver is invoked relative to its source items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldResolutionMode {
    /// The resolver is invoked once per source item and produces that item's
    /// result.
    #[default]
    PerSourceItem,

    /// The resolver is invoked once for every source item of a field at the
    /// same level of the response and produces a single result that is then
    /// split back across the items (see
    /// [BatchResultProcessor](crate::execution::BatchResultProcessor)).
    Batch,
}
