//! ledgrid - image crops onto LED grids
//!
//! PNG decoding, YAML layouts and sample export around the
//! `led_resample` engine. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
