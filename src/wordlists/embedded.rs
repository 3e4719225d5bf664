//! Embedded word corpus
//!
//! Compiled into the binary from `data/words.txt` by the build script.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
