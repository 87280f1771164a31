//! Library root for the asserv command-protocol core.
//!
//! Re-exports all main modules: [`serial`], [`goals`], and [`static_queue`].
//! Used by the board firmware binary and for integration in tests or other
//! binaries.
#![no_std]

pub mod goals;
pub mod serial;
pub mod static_queue;

pub const GOAL_QUEUE_CAPACITY: usize = 8;
pub const ORDER_SET_CAPACITY: usize = 32;
