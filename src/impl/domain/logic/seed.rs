/// Stable seed for an opaque identifier.
///
/// Rolling `hash * 31 + unit` over the UTF-16 code units of `id`, truncated
/// to a signed 32-bit integer after every step, then made non-negative. This
/// reproduces the seeds of the existing dashboard bit for bit (`i32::MIN`
/// maps to 2^31). The empty string maps to 0.
pub fn seed_from_id(id: &str) -> u32 {
    id.encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id_maps_to_zero() {
        assert_eq!(seed_from_id(""), 0);
    }

    #[test]
    fn short_ids_match_plain_rolling_hash() {
        // 'a' = 97.
        assert_eq!(seed_from_id("a"), 97);
        // 'a' * 31 + 'b' = 97 * 31 + 98.
        assert_eq!(seed_from_id("ab"), 3105);
    }

    #[test]
    fn po_001_overflows_once() {
        // Unwrapped: 2_364_678_499, which wraps to -1_930_288_797.
        assert_eq!(seed_from_id("PO-001"), 1_930_288_797);
    }

    #[test]
    fn overflow_wraps_like_32_bit_signed_arithmetic() {
        let id = "PO-2024-001-EXTENDED-IDENTIFIER";
        let reference = id
            .encode_utf16()
            .fold(0i64, |h, c| {
                let next = (h * 31 + c as i64).rem_euclid(1 << 32);
                if next >= 1 << 31 {
                    next - (1 << 32)
                } else {
                    next
                }
            })
            .abs() as u32;
        assert_eq!(seed_from_id(id), reference);
    }

    #[test]
    fn is_stable_and_total_over_unicode() {
        for id in ["PO-001", "ПО-42", "発注-7", "🧾-emoji", "\u{0}"] {
            assert_eq!(seed_from_id(id), seed_from_id(id));
        }
    }
}
