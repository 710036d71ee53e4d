mod domain_tests;
mod router_tests;
