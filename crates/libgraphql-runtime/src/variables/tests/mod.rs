mod input_value_resolver_tests;
mod input_variable_tests;
mod resolved_variable_collection_tests;
