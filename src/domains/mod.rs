//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes a single domain: the tool catalog over the upstream
//! company-registry API.

pub mod tools;
