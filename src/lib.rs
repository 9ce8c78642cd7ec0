#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! A 256-bit digest built on a Keccak-family sponge.
//!
//! The round structure is this crate's own variant of Keccak-f\[1600\], so
//! digests do not match SHA3-256 or Keccak-256 test vectors.

pub mod keccak;

#[doc(inline)]
pub use keccak::sponge::{hash, Digest, DIGEST_BYTES};
