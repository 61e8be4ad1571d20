//! Dictionary compiled into the binary

include!(concat!(env!("OUT_DIR"), "/words.rs"));
