use apollo_parser::cst;
use apollo_parser::cst::CstNode;
use std::collections::VecDeque;

/// The source order of an object literal's fields, along with the order of
/// any object literals nested in each field's value.
///
/// `graphql_parser` keeps object literal fields in a sorted map, which loses
/// both their order and any repeated names. These are recovered from a
/// second, lossless parse of the same text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ObjectFieldOrder {
    fields: Vec<(String, VecDeque<ObjectFieldOrder>)>,
}
impl ObjectFieldOrder {
    fn from_cst(object: &cst::ObjectValue) -> Self {
        let fields = object
            .object_fields()
            .filter_map(|field| {
                let name = field.name()?.text().to_string();
                let mut nested = VecDeque::new();
                if let Some(value) = field.value() {
                    collect_object_orders(&value, &mut nested);
                }
                Some((name, nested))
            })
            .collect();
        Self { fields }
    }

    pub(crate) fn into_fields(self) -> Vec<(String, VecDeque<ObjectFieldOrder>)> {
        self.fields
    }
}

/// Orders of the outermost object literals within `value` (which may be the
/// object itself, or a list containing objects), in source order.
fn collect_object_orders(value: &cst::Value, out: &mut VecDeque<ObjectFieldOrder>) {
    match value {
        cst::Value::ObjectValue(object) => out.push_back(ObjectFieldOrder::from_cst(object)),
        cst::Value::ListValue(list) => {
            for item in list.values() {
                collect_object_orders(&item, out);
            }
        },
        _ => (),
    }
}

/// Orders of every object literal in `query_src` that is not nested inside
/// another object literal, in source order.
pub(crate) fn outermost_object_orders(query_src: &str) -> VecDeque<ObjectFieldOrder> {
    let tree = apollo_parser::Parser::new(query_src).parse();
    tree.document()
        .syntax()
        .descendants()
        .filter_map(cst::ObjectValue::cast)
        .filter(|object| {
            !object
                .syntax()
                .ancestors()
                .skip(1)
                .any(|node| cst::ObjectValue::can_cast(node.kind()))
        })
        .map(|object| ObjectFieldOrder::from_cst(&object))
        .collect()
}
