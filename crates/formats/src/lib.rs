//! Format identification for retro and niche binary containers: ROM dumps, vintage floppy
//! images, TAS movies, media containers, archives, and playlists, all behind one uniform
//! envelope.
//!
//! The two entry points are [`identify`](dispatch::identify), which scans the registry and picks
//! the best match, and [`identify_all`](dispatch::identify_all), which reports every probe's
//! verdict. Both are pure functions over a byte slice; nothing here reads files, allocates
//! global state, or panics on hostile input.
//!
//! Formats live in family modules as stateless namespace structs. Their probing behaviour is
//! declared in [`registry`] as one [`Descriptor`](descriptor::Descriptor) row each, and the
//! handful of routines in [`strategy`] interpret those rows.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
mod no_std {
    extern crate alloc;
    pub use alloc::string::String;
    pub use alloc::vec::Vec;
}

//The engine: descriptors, strategies, the registry, and dispatch
pub mod descriptor;
pub mod dispatch;
pub mod registry;
pub mod strategy;

//One module per format family
pub mod archive;
pub mod audio;
pub mod disc;
pub mod disk;
pub mod executable;
pub mod media;
pub mod movie;
pub mod patch;
pub mod playlist;
pub mod rom;
pub mod save;

pub mod prelude;
