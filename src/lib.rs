//! Interactive simulator of a series circuit of labeled resistors.
//!
//! The [`registry`] module holds the ordered resistor collection; [`circuit`]
//! derives current and voltage drops from it via Ohm's law; [`repl`] is the
//! interactive command loop that ties them to a terminal.

pub mod circuit;
pub mod command;
pub mod error;
pub mod output;
pub mod registry;
pub mod repl;
