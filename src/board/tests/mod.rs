mod persistence_tests;
mod support;
