mod policy_field_authorizer_tests;
