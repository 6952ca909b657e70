//! API schema types for request/response definitions.
//!
//! Response bodies reuse [`catalog_storage::Product`] directly; only request
//! bodies need their own types.

pub mod products;
