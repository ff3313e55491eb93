//! # Display Formatting
//!
//! Address and transaction-hash formatting for the UI.

/// Format an address by showing the first `prefix_len` and last `suffix_len`
/// characters with an ellipsis between.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned
/// as-is.
///
/// # Examples
///
/// ```rust
/// use swap_core::format::format_address;
///
/// let addr = "0xABCDEF1234567890abcdef";
/// assert_eq!(format_address(addr, 6, 4), "0xABCD...cdef");
/// assert_eq!(format_address("short", 6, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Guard against lengths exceeding the address to prevent slice panics.
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    // Hex addresses and hashes are ASCII-only, so byte slicing is safe here.
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address with the default 6-character prefix and 4-character
/// suffix used throughout the UI.
///
/// # Examples
///
/// ```rust
/// use swap_core::format::truncate_address;
///
/// assert_eq!(truncate_address("0xABCDEF1234567890abcdef"), "0xABCD...cdef");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}
