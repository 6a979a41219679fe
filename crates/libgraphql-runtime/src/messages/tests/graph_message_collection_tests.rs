use crate::loc::SourceLocation;
use crate::loc::SourceOrigin;
use crate::loc::SourcePath;
use crate::messages::GraphMessage;
use crate::messages::GraphMessageCollection;
use crate::messages::GraphMessageSeverity;
use crate::messages::codes;

fn origin_at(line: usize, column: usize) -> SourceOrigin {
    SourceOrigin::new(SourceLocation::new(line, column), SourcePath::new())
}

#[test]
fn cloned_collections_share_messages() {
    let messages = GraphMessageCollection::new();
    let handle = messages.clone();
    handle.critical(codes::EXECUTION_ERROR, "boom", origin_at(1, 1));

    assert_eq!(messages.len(), 1);
    assert!(!messages.is_successful());
    assert_eq!(messages.severity(), Some(GraphMessageSeverity::Critical));
}

#[test]
fn warnings_do_not_fail_a_collection() {
    let messages = GraphMessageCollection::new();
    messages.warning("W1", "careful", origin_at(2, 4));

    assert!(messages.is_successful());
    assert!(!messages.is_empty());
    assert_eq!(messages.severity(), Some(GraphMessageSeverity::Warning));
}

#[test]
fn empty_collection_has_no_severity() {
    let messages = GraphMessageCollection::new();
    assert!(messages.is_empty());
    assert!(messages.is_successful());
    assert_eq!(messages.severity(), None);
}

#[test]
fn add_range_appends_in_order() {
    let target = GraphMessageCollection::new();
    target.warning("A", "first", SourceOrigin::default());

    let other = GraphMessageCollection::new();
    other.critical("B", "second", SourceOrigin::default());
    other.critical("B", "third", SourceOrigin::default());
    target.add_range(&other);

    let messages: Vec<String> = target
        .to_vec()
        .iter()
        .map(|msg| msg.message().to_string())
        .collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
    assert_eq!(target.count_code("B"), 2);
    assert!(target.contains_code("A"));
    assert!(!target.contains_code("C"));

    // The source of the range is left untouched.
    assert_eq!(other.len(), 2);
}

#[test]
fn add_range_of_the_same_collection_is_a_no_op() {
    let messages = GraphMessageCollection::new();
    messages.critical("A", "only", SourceOrigin::default());
    let handle = messages.clone();
    messages.add_range(&handle);

    assert_eq!(messages.len(), 1);
}

#[test]
fn exceptions_are_kept_alongside_messages() {
    let err = std::io::Error::other("disk on fire");
    let message = GraphMessage::critical(codes::EXECUTION_ERROR, "failed", origin_at(3, 7))
        .with_exception(&err);

    assert_eq!(message.exception(), Some("disk on fire"));
    assert!(message.is_critical());
    assert_eq!(message.origin().location.line, 3);
}

#[test]
fn collects_from_an_iterator() {
    let messages: GraphMessageCollection = (0..3)
        .map(|idx| GraphMessage::warning("W", format!("warning {idx}"), SourceOrigin::default()))
        .collect();

    assert_eq!(messages.count_code("W"), 3);
}
