use std::sync::OnceLock;

/// Environment variable overriding the detected vector register width, in bits.
pub const VLEN_ENV: &str = "STRIDED_VLEN_BITS";

/// Register width assumed when the `simd` feature is disabled.
#[cfg(not(feature = "simd"))]
const FALLBACK_REGISTER_BYTES: usize = 16;

static REGISTER_BYTES: OnceLock<usize> = OnceLock::new();

#[inline(always)]
pub(crate) fn dispatch<R>(f: impl FnOnce() -> R) -> R {
    #[cfg(feature = "simd")]
    {
        pulp::Arch::new().dispatch(f)
    }
    #[cfg(not(feature = "simd"))]
    {
        f()
    }
}

#[inline(always)]
pub(crate) fn dispatch_if_large<R>(len: usize, f: impl FnOnce() -> R) -> R {
    // Avoid runtime-dispatch overhead for short vectors.
    // This is a heuristic; correctness does not depend on it.
    if len >= 64 {
        dispatch(f)
    } else {
        f()
    }
}

/// Width in bytes of one native vector register.
///
/// Queried once per process: `STRIDED_VLEN_BITS` wins when it holds a power of
/// two in `64..=2048`, otherwise the widest register pulp can dispatch to on
/// this CPU is used.
pub fn register_bytes() -> usize {
    *REGISTER_BYTES.get_or_init(|| {
        let detected = detect_register_bytes();
        let bytes = match std::env::var(VLEN_ENV) {
            Ok(raw) => match parse_vlen_bits(&raw) {
                Some(bits) => bits / 8,
                None => {
                    log::warn!("ignoring {VLEN_ENV}={raw:?}: expected a power of two in 64..=2048");
                    detected
                }
            },
            Err(_) => detected,
        };
        log::debug!("vector register width: {} bits (detected {})", bytes * 8, detected * 8);
        bytes
    })
}

fn parse_vlen_bits(raw: &str) -> Option<usize> {
    let bits: usize = raw.trim().parse().ok()?;
    (bits.is_power_of_two() && (64..=2048).contains(&bits)).then_some(bits)
}

#[cfg(feature = "simd")]
fn detect_register_bytes() -> usize {
    use pulp::{Simd, WithSimd};

    struct RegisterBytes;
    impl WithSimd for RegisterBytes {
        type Output = usize;

        #[inline(always)]
        fn with_simd<S: Simd>(self, _simd: S) -> Self::Output {
            core::mem::size_of::<S::f64s>()
        }
    }

    pulp::Arch::new().dispatch(RegisterBytes)
}

#[cfg(not(feature = "simd"))]
fn detect_register_bytes() -> usize {
    FALLBACK_REGISTER_BYTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vlen_bits() {
        assert_eq!(parse_vlen_bits("256"), Some(256));
        assert_eq!(parse_vlen_bits(" 128\n"), Some(128));
        assert_eq!(parse_vlen_bits("2048"), Some(2048));
        assert_eq!(parse_vlen_bits("32"), None);
        assert_eq!(parse_vlen_bits("4096"), None);
        assert_eq!(parse_vlen_bits("384"), None);
        assert_eq!(parse_vlen_bits("wide"), None);
    }

    #[test]
    fn test_register_bytes_is_stable() {
        let first = register_bytes();
        assert!(first >= 8);
        assert!(first.is_power_of_two());
        assert_eq!(register_bytes(), first);
    }

    #[test]
    fn test_dispatch_returns_value() {
        assert_eq!(dispatch(|| 7), 7);
        assert_eq!(dispatch_if_large(3, || 1 + 1), 2);
        assert_eq!(dispatch_if_large(1000, || 40 + 2), 42);
    }
}
