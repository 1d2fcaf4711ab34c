//! Embedded word banks
//!
//! Lists compiled into the binary at build time.

// Include generated lists from build script
include!(concat!(env!("OUT_DIR"), "/targets.rs"));
include!(concat!(env!("OUT_DIR"), "/valid.rs"));
include!(concat!(env!("OUT_DIR"), "/congrats.rs"));
