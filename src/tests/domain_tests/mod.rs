mod filter_tests;
mod render_tests;
mod sort_tests;
