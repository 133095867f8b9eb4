//! Integration tests
//!
//! Whole jobs run against the wiremock monitoring API.

mod delete_job_tests;
mod status_job_tests;
