pub mod geometry;
pub mod curve;
pub mod dimension;
pub mod command;
