//! Codes attached to [GraphMessage](crate::messages::GraphMessage)s.
//!
//! Document validation codes are named after the section of the
//! [GraphQL specification](https://spec.graphql.org/October2021/#sec-Validation)
//! that defines the rule being enforced.

pub const ACCESS_DENIED: &str = "ACCESS_DENIED";
pub const BATCH_ITEM_UNRESOLVED: &str = "BATCH_ITEM_UNRESOLVED";
pub const EXECUTION_ERROR: &str = "EXECUTION_ERROR";
pub const FIELD_EXPANSION_LIMIT_EXCEEDED: &str = "FIELD_EXPANSION_LIMIT_EXCEEDED";
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const INVALID_BATCH_RESULT: &str = "INVALID_BATCH_RESULT";
pub const INVALID_DOCUMENT: &str = "INVALID_DOCUMENT";
pub const INVALID_RESULT_SHAPE: &str = "INVALID_RESULT_SHAPE";
pub const INVALID_VARIABLE_VALUE: &str = "INVALID_VARIABLE_VALUE";
pub const NULL_VALUE_NOT_ALLOWED: &str = "NULL_VALUE_NOT_ALLOWED";
pub const OPERATION_NOT_FOUND: &str = "OPERATION_NOT_FOUND";
pub const RESOLVER_ERROR: &str = "RESOLVER_ERROR";
pub const SYNTAX_ERROR: &str = "SYNTAX_ERROR";
pub const UNRESOLVED_CONCRETE_TYPE: &str = "UNRESOLVED_CONCRETE_TYPE";

/// Operation names must be unique.
pub const RULE_5_2_1_1_OPERATION_NAME_UNIQUENESS: &str = "5.2.1.1";
/// An anonymous operation must be the only operation in its document.
pub const RULE_5_2_2_1_LONE_ANONYMOUS_OPERATION: &str = "5.2.2.1";
/// Fields must exist on the type they are selected from.
pub const RULE_5_3_1_FIELD_SELECTIONS: &str = "5.3.1";
/// Leaf fields may not have selections, composite fields must.
pub const RULE_5_3_3_LEAF_FIELD_SELECTIONS: &str = "5.3.3";
/// Arguments must be defined by the field or directive they are passed to.
pub const RULE_5_4_1_ARGUMENT_NAMES: &str = "5.4.1";
/// Arguments may only be supplied once.
pub const RULE_5_4_2_ARGUMENT_UNIQUENESS: &str = "5.4.2";
/// Required (non-null, no default) arguments must be supplied.
pub const RULE_5_4_2_1_REQUIRED_ARGUMENTS: &str = "5.4.2.1";
/// Supplied values must be coercible to the expected input type.
pub const RULE_5_6_1_VALUES_OF_CORRECT_TYPE: &str = "5.6.1";
/// Input object literals may supply each field only once.
pub const RULE_5_6_2_INPUT_OBJECT_FIELD_UNIQUENESS: &str = "5.6.2";
/// Fragment names must be unique.
pub const RULE_5_5_1_1_FRAGMENT_NAME_UNIQUENESS: &str = "5.5.1.1";
/// Fragment type conditions must name a type in the schema.
pub const RULE_5_5_1_2_FRAGMENT_SPREAD_TYPE_EXISTENCE: &str = "5.5.1.2";
/// Fragment type conditions must name a composite type.
pub const RULE_5_5_1_3_FRAGMENTS_ON_COMPOSITE_TYPES: &str = "5.5.1.3";
/// Every defined fragment must be spread somewhere.
pub const RULE_5_5_1_4_FRAGMENTS_MUST_BE_USED: &str = "5.5.1.4";
/// Spreads must target a defined fragment.
pub const RULE_5_5_2_1_FRAGMENT_SPREAD_TARGET_DEFINED: &str = "5.5.2.1";
/// Fragment spreads must not form cycles.
pub const RULE_5_5_2_2_FRAGMENT_SPREADS_MUST_NOT_FORM_CYCLES: &str = "5.5.2.2";
/// Directives must be defined by the schema.
pub const RULE_5_7_1_DIRECTIVES_ARE_DEFINED: &str = "5.7.1";
/// Directives must be used at a location they declare.
pub const RULE_5_7_2_DIRECTIVES_IN_VALID_LOCATIONS: &str = "5.7.2";
/// Non-repeatable directives may appear at most once per location.
pub const RULE_5_7_3_DIRECTIVES_UNIQUE_PER_LOCATION: &str = "5.7.3";
/// Variable names must be unique within an operation.
pub const RULE_5_8_1_VARIABLE_UNIQUENESS: &str = "5.8.1";
/// Every variable referenced must be defined by the operation.
pub const RULE_5_8_3_ALL_VARIABLE_USES_DEFINED: &str = "5.8.3";
/// Every variable defined must be referenced.
pub const RULE_5_8_4_ALL_VARIABLES_USED: &str = "5.8.4";
/// Field selections may not nest deeper than the configured maximum.
pub const MAX_QUERY_DEPTH_EXCEEDED: &str = "MAX_QUERY_DEPTH_EXCEEDED";

/// Non-null fields may not resolve to `null`.
pub const RULE_6_4_3_NON_NULL_RESULT: &str = "6.4.3";
