mod batch_result_processor_tests;
mod execution_plan_generator_tests;
mod field_rules_tests;
mod query_executor_tests;
