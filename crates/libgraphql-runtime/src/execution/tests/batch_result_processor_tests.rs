use crate::execution::BatchResultProcessor;
use crate::execution::DataItemStatus;
use crate::execution::GraphDataItem;
use crate::loc::SourceLocation;
use crate::loc::SourceOrigin;
use crate::loc::SourcePath;
use crate::messages::codes;
use crate::test_utils;
use serde_json::Value;
use serde_json::json;
use std::sync::Arc;

fn processor(sources: Vec<Value>) -> BatchResultProcessor {
    let schema = test_utils::test_schema();
    let field = schema.object_type("Item").unwrap().field("owner").unwrap().clone();
    let items = sources
        .into_iter()
        .enumerate()
        .map(|(index, source)| {
            let path = SourcePath::new().with_field("items").with_index(index).with_field("owner");
            Arc::new(GraphDataItem::new(
                Some(field.clone()),
                SourceOrigin::new(SourceLocation::default(), path),
                source,
                Some("Item".to_string()),
            ))
        })
        .collect();
    BatchResultProcessor::new(field, "id", items, SourceOrigin::default())
}

#[test]
fn assigns_each_item_its_keyed_result() {
    let processor = processor(vec![json!({ "id": "a" }), json!({ "id": 2 })]);
    let resolved = processor.resolve(Some(&json!({
        "2": { "email": "two@example.com" },
        "a": { "email": "a@example.com" },
    })));

    assert_eq!(resolved.len(), 2);
    assert!(processor.messages().is_empty());
    assert_eq!(processor.items()[0].result(), Some(json!({ "email": "a@example.com" })));
    assert_eq!(processor.items()[1].result(), Some(json!({ "email": "two@example.com" })));
}

#[test]
fn every_item_without_a_result_is_reported() {
    let processor = processor(vec![
        json!({ "id": "a" }),
        json!({ "id": "b" }),
        json!({ "name": "no key" }),
    ]);
    let resolved = processor.resolve(Some(&json!({ "a": null })));

    assert_eq!(resolved.len(), 1);
    assert_eq!(processor.messages().count_code(codes::BATCH_ITEM_UNRESOLVED), 2);
    assert_eq!(processor.items()[0].status(), DataItemStatus::Resolved);
    assert_eq!(processor.items()[1].status(), DataItemStatus::Failed);
    assert_eq!(processor.items()[2].status(), DataItemStatus::Failed);

    let messages = processor.messages().to_vec();
    assert_eq!(messages[0].origin().path.to_string(), "items[1].owner");
    assert!(messages[0].message().contains("items[1].owner"));
    assert_eq!(messages[1].origin().path.to_string(), "items[2].owner");
}

#[test]
fn a_result_that_is_not_an_object_fails_the_whole_batch() {
    let processor = processor(vec![json!({ "id": "a" }), json!({ "id": "b" })]);
    let resolved = processor.resolve(Some(&json!([{ "email": "a@example.com" }])));

    assert!(resolved.is_empty());
    assert_eq!(processor.messages().count_code(codes::INVALID_BATCH_RESULT), 1);
    assert_eq!(processor.messages().count_code(codes::BATCH_ITEM_UNRESOLVED), 2);
    assert!(processor.items().iter().all(|item| item.status() == DataItemStatus::Failed));
}

#[test]
fn items_that_already_completed_are_not_overwritten() {
    let processor = processor(vec![json!({ "id": "a" })]);
    processor.items()[0].cancel();
    let resolved = processor.resolve(Some(&json!({ "a": { "email": "a@example.com" } })));

    assert!(resolved.is_empty());
    assert_eq!(processor.items()[0].status(), DataItemStatus::Cancelled);
    assert_eq!(processor.messages().count_code(codes::BATCH_ITEM_UNRESOLVED), 1);
}
