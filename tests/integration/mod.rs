//! Integration tests for the DonLocal scaffolder

mod builtin_layout;
mod creation_property;
mod failure_modes;
mod test_utils;
