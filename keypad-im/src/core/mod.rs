//! Core input functionality
//!
//! This module contains the input mode state machines and the engine that
//! drives them from key events.

pub mod engine;
pub mod keycode;
pub mod mode;
pub mod state;
pub mod suggestion;
