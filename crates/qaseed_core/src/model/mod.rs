//! Domain model for the seeded question/answer schema.
//!
//! # Responsibility
//! - Define the canonical records produced by the seeding pipeline.
//! - Keep entity shapes aligned with the SQLite schema.
//!
//! # Invariants
//! - Every entity is identified by a stable UUID minted at creation.
//! - Entities are create-only; only question/answer ratings are ever updated.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod answer;
pub mod question;
pub mod tag;
pub mod user;
pub mod vote;
