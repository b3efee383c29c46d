mod classify_tests;
mod signature_tests;
mod tokens_tests;
