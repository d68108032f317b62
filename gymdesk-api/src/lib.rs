//! # Gymdesk API Client Layer
//!
//! Client layer for the gym-management REST backend. The backend is treated
//! as a black box that returns JSON envelopes of the form `{ data: T }` or
//! `{ data: T[], page, limit, total, totalPages }`, with inconsistent field
//! names across legacy and current route shapes (`classType` vs `category`,
//! `durationDays` vs `duration`, ...).
//!
//! This crate owns:
//! - Type-narrowing guards over raw JSON ([`normalize::guards`])
//! - Envelope unwrapping and pagination flattening ([`normalize::payload`])
//! - First-match-wins alias resolution ([`normalize::resolve`])
//! - Canonical record assemblers ([`models`])
//! - The HTTP client with bearer auth and sequential page aggregation
//!   ([`client`])
//! - Endpoint-shape fallback orchestration ([`fallback`])
//! - Per-entity services ([`services`])
//!
//! It owns no storage: every raw payload is normalized synchronously into a
//! fresh canonical record and discarded. Caching, token lifecycle, and
//! user-visible error presentation live with the callers.

pub mod client;
pub mod error;
pub mod fallback;
pub mod models;
pub mod normalize;
pub mod services;

pub use client::{ApiClient, QueryParams, TokenProvider};
pub use error::ApiError;
pub use fallback::{request_with_fallback, FallbackPolicy};
