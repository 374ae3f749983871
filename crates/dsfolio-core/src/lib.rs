#![cfg_attr(not(test), no_std)]

//! Navigation core for the dual-screen portfolio console.
//!
//! The crate owns every piece of mutable UI state (mode, page, per-page
//! cursors) and exposes it to renderers through the [`render::Screen`] view
//! model. It never draws anything itself.

pub mod app;
pub mod catalog;
pub mod input;
pub mod render;
pub mod text_wrap;
