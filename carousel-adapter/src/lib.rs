//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on index math and interaction state. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Tween-based smooth scrolling (for hosts without native smooth scrolling)
//! - A [`Controller`] that owns the engine and is advanced from a frame/timer clock
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{Controller, DEFAULT_SCROLL_DURATION_MS};
pub use tween::{Easing, Tween};
