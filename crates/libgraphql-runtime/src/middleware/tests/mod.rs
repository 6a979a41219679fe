mod invoke_field_resolver_middleware_tests;
