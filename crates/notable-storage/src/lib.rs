//! Persistence layer for the note service.
//!
//! [`store::NoteStore`] is the single handle over the relational database
//! (SeaORM + SQLite). It is opened once at process start and injected into
//! request handlers; nothing in this crate holds global state.

pub mod auth;
pub mod entities;
pub mod error;
pub mod store;


pub use error::{Result, StorageError};
pub use store::NoteStore;
