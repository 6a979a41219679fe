mod graph_field_tests;
mod type_expression_tests;
