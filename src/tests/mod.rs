mod cli_tests;
mod errors_tests;
mod notify_banner_tests;
mod report_tests;
mod score_tests;
mod settings_store_tests;
