//! One-shot password digest helper.
//!
//! Prints the unsalted SHA-256 hex digest of the single argument; the
//! dashboard's access gate stores this digest instead of the plaintext.

use sha2::{Digest, Sha256};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: fundflow-hash \"YourPassword\"");
        process::exit(1);
    }

    let mut hasher = Sha256::new();
    hasher.update(args[1].as_bytes());
    println!("{}", hex::encode(hasher.finalize()));
}
