pub mod codes;
mod graph_message;
mod graph_message_collection;

pub use graph_message::GraphMessage;
pub use graph_message::GraphMessageSeverity;
pub use graph_message_collection::GraphMessageCollection;

#[cfg(test)]
mod tests;
