mod flatten_tests;
