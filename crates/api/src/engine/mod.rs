//! Post-attempt processing.
//!
//! [`cascade`] re-derives a user's module and course completion after every
//! recorded quiz attempt and issues the course certificate on completion.

pub mod cascade;
