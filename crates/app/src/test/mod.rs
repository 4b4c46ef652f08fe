//! Shared test support.

mod helpers;

pub(crate) use helpers::*;
pub(crate) use server::*;
