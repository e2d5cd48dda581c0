//! # Formatting Utilities
//!
//! Small display helpers for addresses, token IDs, and explorer links.

use alloy_primitives::U256;

use crate::utils::constants::EXPLORER_TX_BASE;

/// Shorten a wallet address for display (e.g. `0x20f2...828B`).
/// Provider-supplied strings are not trusted to be plain hex; anything
/// that cannot be sliced cleanly is shown as-is.
pub fn truncate_address(address: &str) -> String {
    let tail = address.len() - address.len().min(4);
    if address.len() <= 10 || !address.is_char_boundary(6) || !address.is_char_boundary(tail) {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[tail..])
}

/// Format a token ID for display (e.g. `#7`)
pub fn format_token_id(id: U256) -> String {
    format!("#{}", id)
}

/// Block explorer URL for a submitted transaction hash
pub fn explorer_tx_url(tx_hash: &str) -> String {
    format!("{}{}", EXPLORER_TX_BASE, tx_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_address() {
        let address = "0x20f229B5c27e8e164ffe54a6f9b03c56f5F4828B";
        assert_eq!(truncate_address(address), "0x20f2...828B");
        assert_eq!(truncate_address("0xshort"), "0xshort");
    }

    #[test]
    fn test_truncate_address_with_multibyte_input() {
        // Multi-byte character straddling the head boundary at byte 6
        let head = "0x123\u{00e9}4567890123";
        assert_eq!(truncate_address(head), head);

        // Multi-byte character straddling the tail boundary at len - 4
        let tail = "0xabcdefghij\u{00e9}zzz";
        assert_eq!(truncate_address(tail), tail);

        // Multi-byte characters away from either boundary still truncate
        let clean = "0x20f2\u{00e9}\u{00e9}\u{00e9}\u{00e9}828B";
        assert_eq!(truncate_address(clean), "0x20f2...828B");
    }

    #[test]
    fn test_format_token_id() {
        assert_eq!(format_token_id(U256::from(7)), "#7");
        assert_eq!(format_token_id(U256::ZERO), "#0");
    }

    #[test]
    fn test_explorer_tx_url() {
        assert_eq!(
            explorer_tx_url("0xdeadbeef"),
            "https://polygonscan.com/tx/0xdeadbeef"
        );
    }
}
