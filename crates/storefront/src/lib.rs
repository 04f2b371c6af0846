//! Royal Storefront library.
//!
//! Domain services for the Royal storefront demo: the catalog lookup
//! surface, the cart engine with its persistence and fault-injection ports,
//! recommendation derivation, and the session composition root that wires
//! them together. Presentation (routing, modals, checkout delay, the chat
//! panel) lives in the callers, not here.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod fault;
pub mod recommend;
pub mod seed;
pub mod session;
pub mod storage;
