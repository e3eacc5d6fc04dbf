//! Rider Purchases - Conversational purchase intake for motorcycle riders
//!
//! This crate turns free-text messages about protective gear, spare parts and
//! accessories (Arabic or English) into structured request slots, asks for
//! whatever is still missing, and answers complete requests with ranked picks
//! and a marketplace search link.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
