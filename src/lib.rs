//! Razorpay Checkout - order creation and payment verification backend
//!
//! This crate creates orders on the Razorpay gateway for a browser checkout
//! page and verifies the signed confirmation the gateway returns after
//! payment.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
