//! Shared plumbing for the GBCE workspace: process-wide tracing setup and
//! correlation ids for spans.

pub mod logger;
