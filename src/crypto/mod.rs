// src/crypto/mod.rs

pub mod codec;

pub use codec::CredentialCodec;
