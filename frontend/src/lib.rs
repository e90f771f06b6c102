//! View-state and API client for the inventory catalog console.
//!
//! The library half implements the client contract: a local [`mirror`] of
//! the server's product list (updated only after a confirmed mutation),
//! pure [`view`] derivations recomputed from the mirror on every change,
//! a typed REST [`client`], and plain-text [`render`] helpers. The
//! `inventory-console` binary wires them together.

pub mod client;
pub mod mirror;
pub mod product;
pub mod render;
pub mod view;
