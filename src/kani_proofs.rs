//! Kani proof harnesses for the address parser and name grammar.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{Address, is_valid_name};

/// Characters that drive every branch of the parser
const ADDRESS_CHARS: &[u8] = b"[]:a%.";

const MAX_LEN: usize = 6;

/// Generate a short string over `ADDRESS_CHARS`
fn arbitrary_address() -> String {
    let len: usize = kani::any();
    kani::assume(len <= MAX_LEN);
    (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            ADDRESS_CHARS[idx % ADDRESS_CHARS.len()] as char
        })
        .collect()
}

#[kani::proof]
#[kani::unwind(8)]
fn parse_never_panics() {
    let input = arbitrary_address();
    let _ = Address::parse(&input);
}

#[kani::proof]
#[kani::unwind(8)]
fn parsed_parts_come_from_input() {
    let input = arbitrary_address();
    if let Ok(addr) = Address::parse(&input) {
        assert!(input.contains(addr.host()));
        assert!(input.ends_with(addr.port()));
        assert!(!addr.port().contains(':'));
    }
}

#[kani::proof]
#[kani::unwind(8)]
fn valid_names_have_no_quotes() {
    let chars = b" \t\"a";
    let len: usize = kani::any();
    kani::assume(len <= 4);
    let name: String = (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            chars[idx % chars.len()] as char
        })
        .collect();
    if is_valid_name(&name) {
        assert!(!name.is_empty());
        assert!(!name.contains('"'));
        assert!(!name.starts_with(' ') && !name.ends_with(' '));
    }
}
