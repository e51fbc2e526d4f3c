//! Functional core for the chatstore data-access layer.
//!
//! Everything in this crate is pure: entity and query types, the key
//! composition rules that map chat concepts onto partition/row keys, the
//! [`storage::TableStore`] gateway trait implemented by the backends in the
//! `chatstore` crate, and the ordering/formatting rules applied when chat
//! history is read back.

pub mod chat;
pub mod keys;
pub mod storage;
