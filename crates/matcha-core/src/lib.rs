//! Core types and matching computations for the matcha demo.
//!
//! This crate is deliberately free of terminal and persistence dependencies.
//! Everything here is pure and synchronous: callers pass the catalog and the
//! user pool in, and get values out. No function retains references across
//! calls or mutates its inputs.

pub mod catalog;
pub mod error;
pub mod score;
pub mod swipe;
pub mod user;
pub mod vector;

pub use error::{Error, Result};
