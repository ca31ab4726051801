//! Credentials: password hashing ([`password`]) and bearer tokens ([`jwt`]).

pub mod jwt;
pub mod password;
