//! Request extractors for identity ([`auth`]) and role gates ([`rbac`]).

pub mod auth;
pub mod rbac;
