//! Production Estimation Engine for Construction Crews
//!
//! This crate estimates labor time or production for a construction crew
//! performing a set of repeatable tasks, under configurable unit-of-output
//! models (area, linear length, or fixed man-day capacity), with named
//! "impact" time penalties applied per worker.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod export;
pub mod models;
pub mod persistence;
