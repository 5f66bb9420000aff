//! Arsroller Rules — roll resolution for Ars Magica 5th Edition.
//!
//! The `domain` module holds the resolvers: stressed and simple dice,
//! formulaic and spontaneous spellcasting, and botch dice. The
//! `application` module binds them to named commands.

pub mod application;
pub mod domain;
