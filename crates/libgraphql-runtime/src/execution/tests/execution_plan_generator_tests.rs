use crate::document::OperationKind;
use crate::execution::ExecutionPlanGenerator;
use crate::messages::codes;
use crate::test_utils;

mod select_operation {
    use super::*;

    const TWO_OPERATIONS: &str = "query A { version } query B { greeting }";

    #[test]
    fn a_lone_operation_needs_no_name() {
        let schema = test_utils::test_schema();
        let doc = test_utils::build_document(&schema, "{ version }");
        let generator = ExecutionPlanGenerator::new(&schema, &doc);

        let op = generator.select_operation(None).unwrap();
        assert_eq!(Some(&op), doc.operations().get(""));
    }

    #[test]
    fn several_operations_must_be_named() {
        let schema = test_utils::test_schema();
        let doc = test_utils::build_document(&schema, TWO_OPERATIONS);
        let generator = ExecutionPlanGenerator::new(&schema, &doc);

        let err = generator.select_operation(None).unwrap_err();
        assert_eq!(err.code(), codes::OPERATION_NOT_FOUND);

        let op = generator.select_operation(Some("B")).unwrap();
        assert_eq!(Some(&op), doc.operations().get("B"));
    }

    #[test]
    fn unknown_names_are_reported() {
        let schema = test_utils::test_schema();
        let doc = test_utils::build_document(&schema, TWO_OPERATIONS);
        let generator = ExecutionPlanGenerator::new(&schema, &doc);

        let err = generator.select_operation(Some("C")).unwrap_err();
        assert_eq!(err.code(), codes::OPERATION_NOT_FOUND);
        assert!(err.message().contains("`C`"));
    }
}

mod create_plan {
    use super::*;

    #[test]
    fn lists_top_level_fields_in_document_order() {
        let schema = test_utils::test_schema();
        let doc = test_utils::build_document(&schema, "query Q { v: version items { id name } }");
        let generator = ExecutionPlanGenerator::new(&schema, &doc);
        let plan = generator.create_plan(generator.select_operation(None).unwrap());

        assert!(plan.is_valid());
        assert_eq!(plan.operation_name(), Some("Q"));
        assert_eq!(plan.operation_kind(), OperationKind::Query);
        assert_eq!(plan.root_type_name(), "Query");

        let keys: Vec<&str> = plan.fields().iter().map(|f| f.response_key()).collect();
        assert_eq!(keys, vec!["v", "items"]);
        assert_eq!(plan.fields()[0].field().name(), "version");

        let children: Vec<&str> = plan.fields()[1]
            .children()
            .iter()
            .map(|f| f.response_key())
            .collect();
        assert_eq!(children, vec!["id", "name"]);
    }

    #[test]
    fn mutations_plan_against_the_mutation_type() {
        let schema = test_utils::test_schema();
        let doc = test_utils::build_document(
            &schema,
            r#"mutation { rename(id: "1", name: "x") { id } }"#,
        );
        let generator = ExecutionPlanGenerator::new(&schema, &doc);
        let plan = generator.create_plan(generator.select_operation(None).unwrap());

        assert_eq!(plan.operation_kind(), OperationKind::Mutation);
        assert_eq!(plan.root_type_name(), "Mutation");
        assert_eq!(plan.fields()[0].arguments().len(), 2);
    }

    #[test]
    fn fragment_fields_carry_their_type_condition() {
        let schema = test_utils::test_schema();
        let doc = test_utils::build_document(
            &schema,
            "{ node { id ... on Item { name } ...OwnerFields } } fragment OwnerFields on Owner { email }",
        );
        let generator = ExecutionPlanGenerator::new(&schema, &doc);
        let plan = generator.create_plan(generator.select_operation(None).unwrap());

        let children = plan.fields()[0].children();
        let conditions: Vec<(&str, Option<&str>)> = children
            .iter()
            .map(|f| (f.response_key(), f.type_condition()))
            .collect();
        assert_eq!(conditions, vec![
            ("id", Some("Node")),
            ("name", Some("Item")),
            ("email", Some("Owner")),
        ]);
    }

    #[test]
    fn excluded_fields_are_left_out() {
        let schema = test_utils::test_schema();
        let doc = test_utils::build_document(&schema, "{ version greeting }");
        let greeting = doc
            .parts()
            .find(|node| node.path().to_string().ends_with("greeting"))
            .unwrap()
            .id();
        assert!(doc.set_included(greeting, false));

        let generator = ExecutionPlanGenerator::new(&schema, &doc);
        let plan = generator.create_plan(generator.select_operation(None).unwrap());
        let keys: Vec<&str> = plan.fields().iter().map(|f| f.response_key()).collect();
        assert_eq!(keys, vec!["version"]);
    }

    #[test]
    fn document_directives_are_not_planned() {
        let schema = test_utils::test_schema();
        let doc = test_utils::build_document(&schema, "{ version @skip(if: false) }");
        let generator = ExecutionPlanGenerator::new(&schema, &doc);
        let plan = generator.create_plan(generator.select_operation(None).unwrap());

        assert!(plan.fields()[0].directives().is_empty());
    }
}
