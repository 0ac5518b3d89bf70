//! Wright-Fisher simulator of allele-frequency evolution in a finite
//! population under genetic drift, selection and two-way mutation.
//!
//! The core pieces are [`engine::Engine`], which advances one population's
//! allele-count trajectory a generation at a time, and [`batch::run_batch`],
//! which drives many independent trajectories to absorption and aggregates
//! them into a [`batch::BatchResult`] with padded trajectories and an
//! empirical fixation probability.

pub mod batch;
pub mod config;
pub mod engine;
pub mod model;
pub mod random;
pub mod stats;

mod utils;
