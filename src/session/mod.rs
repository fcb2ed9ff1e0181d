// src/session/mod.rs
//
// Session state for the signed-in console user.
//
// - storage: where the session survives a restart (SQLite or memory)
// - store:   the single owner of {name, email, encoded token}
// - policy:  when a successful self-update forces a fresh login

pub mod policy;
pub mod storage;
pub mod store;

pub use policy::{session_impact, SessionImpact};
pub use storage::{MemorySessionStorage, SessionStorage, SqliteSessionStorage};
pub use store::{Session, SessionStore, SESSION_KEY};
