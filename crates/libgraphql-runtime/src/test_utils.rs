use crate::document::QueryDocument;
use crate::document::QueryDocumentBuilder;
use crate::execution::GraphQueryExecutor;
use crate::execution::QueryRequest;
use crate::execution::QueryResponse;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use std::sync::Arc;

pub(crate) const TEST_SCHEMA: &str = "
    type Query {
        greeting(name: String = \"world\"): String
        item(id: ID!): Item
        items: [Item!]!
        node: Node
        search(filter: ItemFilter): [SearchResult]
        secret: String
        version: String!
    }

    type Mutation {
        rename(id: ID!, name: String!): Item
    }

    interface Node {
        id: ID!
    }

    type Item implements Node {
        id: ID!
        name: String
        color: Color
        owner: Owner
        tags: [String!]
    }

    type Owner implements Node {
        id: ID!
        email: String!
    }

    union SearchResult = Item | Owner

    input ItemFilter {
        name: String
        limit: Int = 10
        colors: [Color!]
    }

    enum Color {
        RED
        GREEN
        BLUE
    }
";

pub(crate) fn test_schema_builder() -> SchemaBuilder {
    SchemaBuilder::from_str(None, TEST_SCHEMA).expect("test schema parses")
}

pub(crate) fn test_schema() -> Schema {
    test_schema_builder().build().expect("test schema builds")
}

pub(crate) fn build_document(schema: &Schema, query: &str) -> QueryDocument {
    QueryDocumentBuilder::new(schema).build_from_str(query)
}

/// The codes of every message recorded against `document`, in order.
pub(crate) fn message_codes(document: &QueryDocument) -> Vec<String> {
    document
        .messages()
        .to_vec()
        .iter()
        .map(|msg| msg.code().to_string())
        .collect()
}

/// Runs `request` against `schema` with a default executor.
pub(crate) async fn execute(schema: Schema, request: QueryRequest) -> QueryResponse {
    GraphQueryExecutor::new(Arc::new(schema)).execute(request).await
}

/// The codes of every message in `response`, in order.
pub(crate) fn response_codes(response: &QueryResponse) -> Vec<String> {
    response
        .messages()
        .iter()
        .map(|msg| msg.code().to_string())
        .collect()
}
