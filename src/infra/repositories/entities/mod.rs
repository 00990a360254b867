//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod admin;
pub mod business;
pub mod certificate;
pub mod changelog;
pub mod employee;
pub mod end_user;
