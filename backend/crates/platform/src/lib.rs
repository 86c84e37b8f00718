//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (OS randomness, Base64url, Argon2id secret hashing)
//! - Password hashing (Argon2id with optional pepper)

pub mod crypto;
pub mod password;
