mod quoted_tests;
