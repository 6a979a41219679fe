use crate::execution::DataItemStatus;
use crate::execution::GraphDataItem;
use crate::messages::GraphMessageCollection;
use crate::messages::codes;
use crate::types::GraphField;
use crate::types::TypeExpression;
use serde_json::Value;
use std::sync::Arc;

/// One source item of a field execution, checked against its field.
///
/// A validation context exists for every item of a request whether or not
/// the field's resolver ever runs. All contexts of a request share one
/// message sink.
#[derive(Clone, Debug)]
pub struct FieldValidationContext {
    field: Arc<GraphField>,
    item: Arc<GraphDataItem>,
    messages: GraphMessageCollection,
}
impl FieldValidationContext {
    pub fn new(
        field: Arc<GraphField>,
        item: Arc<GraphDataItem>,
        messages: GraphMessageCollection,
    ) -> Self {
        Self { field, item, messages }
    }

    pub fn field(&self) -> &Arc<GraphField> {
        &self.field
    }

    pub fn item(&self) -> &Arc<GraphDataItem> {
        &self.item
    }

    pub fn messages(&self) -> &GraphMessageCollection {
        &self.messages
    }

    fn non_null_violation(&self, item: &GraphDataItem) {
        self.messages.critical(
            codes::RULE_6_4_3_NON_NULL_RESULT,
            format!(
                "`{}` is declared `{}` but produced null at `{}`",
                self.field.route(),
                self.field.type_expression(),
                item.origin().path,
            ),
            item.origin().clone(),
        );
    }

    fn invalid_shape(&self, expected: &str) {
        self.messages.critical(
            codes::INVALID_RESULT_SHAPE,
            format!(
                "The resolver of `{}` must produce {expected} for type `{}`",
                self.field.route(),
                self.field.type_expression(),
            ),
            self.item.origin().clone(),
        );
        self.item.fail();
    }
}

/// Checks a freshly assigned result before child fields consume it.
pub struct FieldCompletionRules;
impl FieldCompletionRules {
    pub fn check(context: &FieldValidationContext) {
        let item = context.item();
        match item.status() {
            // The resolver produced nothing for this item.
            DataItemStatus::Pending => {
                item.fail();
                return;
            },
            DataItemStatus::Resolved => (),
            DataItemStatus::Failed | DataItemStatus::Cancelled => return,
        }

        let result = item.result().unwrap_or(Value::Null);
        let field = context.field();
        if result.is_null() {
            if field.type_expression().is_non_null() {
                context.non_null_violation(item);
                item.fail();
            }
            return;
        }
        if !has_valid_shape(&result, field.type_expression(), field.is_leaf()) {
            let expected = match (field.type_expression().is_list(), field.is_leaf()) {
                (true, _) => "a list",
                (false, true) => "a scalar value",
                (false, false) => "an object",
            };
            context.invalid_shape(expected);
        }
    }
}

fn has_valid_shape(value: &Value, expected: &TypeExpression, is_leaf: bool) -> bool {
    if value.is_null() {
        return true;
    }
    match expected.list_item_type() {
        Some(item_type) => match value {
            Value::Array(items) => items
                .iter()
                .all(|item| has_valid_shape(item, &item_type, is_leaf)),
            _ => false,
        },
        None if is_leaf => !matches!(value, Value::Array(_) | Value::Object(_)),
        None => value.is_object(),
    }
}

/// Checks an item once its child fields completed, propagating nulls that
/// non-null types do not allow up to the item itself.
pub struct FieldValidationRules;
impl FieldValidationRules {
    pub fn check(context: &FieldValidationContext) {
        let item = context.item();
        if produces_null(item) {
            return;
        }
        let field = context.field();
        if !Self::check_value(context, item, field.type_expression(), field.is_leaf()) {
            item.fail();
        }
    }

    /// Returns `false` when `item` must become null.
    fn check_value(
        context: &FieldValidationContext,
        item: &GraphDataItem,
        expected: &TypeExpression,
        is_leaf: bool,
    ) -> bool {
        let Some(item_type) = expected.list_item_type() else {
            return is_leaf || Self::check_child_fields(item);
        };

        let elements = item.list_items();
        if elements.is_empty() {
            // Lists of leaf values are never expanded into items.
            let result = item.result().unwrap_or(Value::Null);
            if contains_disallowed_null(&result, &item_type) {
                context.non_null_violation(item);
                return false;
            }
            return true;
        }

        for element in &elements {
            if produces_null(element) {
                if item_type.is_non_null() {
                    context.non_null_violation(element);
                    return false;
                }
                continue;
            }
            if !Self::check_value(context, element, &item_type, is_leaf) {
                element.fail();
                if item_type.is_non_null() {
                    return false;
                }
            }
        }
        true
    }

    /// An object whose non-null child field is null becomes null itself. The
    /// child already reported why it is null.
    fn check_child_fields(item: &GraphDataItem) -> bool {
        item.child_fields().iter().all(|(_, child)| {
            let non_null = child
                .field()
                .is_some_and(|field| field.type_expression().is_non_null());
            !(non_null && produces_null(child))
        })
    }
}

fn produces_null(item: &GraphDataItem) -> bool {
    item.status() != DataItemStatus::Resolved
        || item.result().is_none_or(|result| result.is_null())
}

fn contains_disallowed_null(value: &Value, item_type: &TypeExpression) -> bool {
    let Value::Array(items) = value else {
        return false;
    };
    items.iter().any(|item| match item {
        Value::Null => item_type.is_non_null(),
        Value::Array(_) => item_type
            .list_item_type()
            .is_some_and(|inner| contains_disallowed_null(item, &inner)),
        _ => false,
    })
}
