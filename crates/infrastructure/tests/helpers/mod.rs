#![allow(dead_code)]

pub mod netbox_mock;

pub use netbox_mock::*;
