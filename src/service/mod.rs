//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for various services used by the status-bot:
//! - Issue trackers (e.g., Jira)
//! - Code hosts (e.g., GitHub)
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod code;
pub mod issues;
