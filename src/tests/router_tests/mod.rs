mod dashboard_tests;
mod estates_json_tests;
mod table_tests;
