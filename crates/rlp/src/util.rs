pub fn int_to_hex(value: u64) -> String {
    pad_to_even(&format!("{:x}", value))
}

pub fn is_hex_prefixed(s: &str) -> bool {
    s.starts_with("0x")
}

pub fn strip_hex_prefix(s: &str) -> String {
    pad_to_even(s.strip_prefix("0x").unwrap_or(s))
}

pub fn pad_to_even(hex: &str) -> String {
    if hex.len() % 2 == 0 {
        hex.to_string()
    } else {
        format!("0{}", hex)
    }
}

/// Decodes leading digit pairs, stopping quietly at the first pair that is
/// not valid hex.
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    let valid = hex.bytes().take_while(u8::is_ascii_hexdigit).count();
    hex::decode(&hex[..valid - valid % 2]).unwrap_or_default()
}
