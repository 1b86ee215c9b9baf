//! MD5 hex digests.

use core::fmt::Write;

use heapless::String;
use md5::{Digest, Md5};

/// Length of a rendered MD5 digest: 16 bytes as hex pairs.
pub const HASH_HEX_LEN: usize = 32;

/// MD5 digest of `input`, rendered as 32 uppercase hex digits.
///
/// Takes bytes rather than `&str` so callers control the text encoding;
/// terminal credentials are hashed in the device's native encoding.
///
/// ```
/// use libhht::text::hash::md5_hex;
///
/// let digest = md5_hex(b"abc");
/// assert_eq!(&digest[..], "900150983CD24FB0D6963F7D28E17F72");
/// ```
pub fn md5_hex(input: &[u8]) -> String<HASH_HEX_LEN> {
    let digest = Md5::digest(input);
    let mut out = String::new();
    for byte in digest.iter() {
        // Capacity is exact: 16 bytes, two digits each.
        let _ = write!(out, "{:02X}", byte);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(&md5_hex(b"")[..], "D41D8CD98F00B204E9800998ECF8427E");
        assert_eq!(&md5_hex(b"abc")[..], "900150983CD24FB0D6963F7D28E17F72");
        assert_eq!(
            &md5_hex(b"message digest")[..],
            "F96B697D7CB7938D525A2F31AAF161D0"
        );
    }

    #[test]
    fn output_is_uppercase_hex() {
        let digest = md5_hex(b"handheld");
        assert_eq!(digest.len(), HASH_HEX_LEN);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }
}
