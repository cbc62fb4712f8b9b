//! Word lists compiled into the binary at build time

include!(concat!(env!("OUT_DIR"), "/sample_words.rs"));
