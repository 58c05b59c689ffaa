//! SeaORM entities.

pub mod blogpost;
