//! Serial wire protocol of the asserv board.
//!
//! One ASCII message per dispatch: an opcode byte, then `;`-terminated
//! numeric parameters. The transport delimits messages; this layer only
//! decodes and routes them.
//!
//! - [`params`] tokenizes numeric literals and assembles argument tuples.
//! - [`order`] binds opcodes to typed handlers.
//! - [`parser`] scans order registries and runs the match.
//! - [`protocol`] carries the opcode table and the prebuilt registries.
//! - [`tasks`] is the fixed-opcode alternative dispatcher.
//!
//! Used by the board's serial task on every received message.
pub mod order;
pub mod params;
pub mod parser;
pub mod protocol;
pub mod tasks;
