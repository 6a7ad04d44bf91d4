pub mod api_helper;
pub mod unit_tests_helper;
