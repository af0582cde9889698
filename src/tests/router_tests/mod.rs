mod forms_tests;
mod pages_tests;
mod search_tests;
