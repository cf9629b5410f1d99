//! Generated class names for scoped pseudo-class rules.

/// Builds a class name from `prefix` and a hash of `content`.
///
/// The same content always gives the same class, so identical rule sets
/// on different elements share one stylesheet entry.
///
/// ```rust
/// use tomato_box::generate_class_name;
///
/// let a = generate_class_name("css", "&:hover { color: red; }\n");
/// let b = generate_class_name("css", "&:hover { color: red; }\n");
/// assert_eq!(a, b);
/// assert!(a.starts_with("css-"));
/// ```
pub fn generate_class_name(prefix: &str, content: &str) -> String {
    format!("{}-{}", prefix, to_base36(murmur2(content.as_bytes())))
}

const M: u32 = 0x5bd1_e995;

/// 32-bit MurmurHash2 with a zero seed and no length mixing.
fn murmur2(bytes: &[u8]) -> u32 {
    let mut h: u32 = 0;
    let mut chunks = bytes.chunks_exact(4);

    for chunk in &mut chunks {
        let mut k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        k = k.wrapping_mul(M);
        k ^= k >> 24;
        k = k.wrapping_mul(M);
        h = h.wrapping_mul(M) ^ k;
    }

    let tail = chunks.remainder();
    if tail.len() == 3 {
        h ^= u32::from(tail[2]) << 16;
    }
    if tail.len() >= 2 {
        h ^= u32::from(tail[1]) << 8;
    }
    if !tail.is_empty() {
        h ^= u32::from(tail[0]);
        h = h.wrapping_mul(M);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(M);
    h ^ (h >> 15)
}

fn to_base36(mut n: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
