//! Low-level parsing utilities.
//!
//! [`whatsapp`] holds the lexer, the timestamp reader and the sender
//! splitter used by [`WhatsAppParser`](crate::parser::WhatsAppParser).

pub mod whatsapp;

pub use whatsapp::{RawEntry, detect_date_order, lex, parse_timestamp, split_sender};
