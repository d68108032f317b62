//! Response normalization
//!
//! Takes heterogeneous, loosely-typed JSON payloads from multiple/legacy
//! backend shapes and deterministically produces canonical record shapes:
//! fallback field resolution, defensive numeric coercion, and pagination
//! flattening. Every function here is total — malformed input yields
//! defaults, never an error.

pub mod guards;
pub mod payload;
pub mod resolve;

pub use payload::{
    normalize_paginated, paginated_envelope, to_array_payload, unwrap_payload, PageEnvelope,
};
