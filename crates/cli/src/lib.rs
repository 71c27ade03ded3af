//! Interactive front end: configuration, seed data and the supplier menu loop.

pub mod config;
pub mod menu;
pub mod render;
pub mod seed;
