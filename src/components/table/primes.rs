use num_traits::PrimInt;

/// Deterministic primality test by trial division over odd divisors up to `sqrt(n)`.
pub fn is_prime<N: PrimInt>(n: N) -> bool {
    let two = N::one() + N::one();
    let three = two + N::one();

    if n < two {
        return false;
    }
    if n <= three {
        return true;
    }
    if n % two == N::zero() {
        return false;
    }

    let mut d = three;
    // `d <= n / d` instead of `d * d <= n` so we never overflow near `N::max_value()`.
    while d <= n / d {
        if n % d == N::zero() {
            return false;
        }
        d = d + two;
    }

    true
}

/// Smallest prime `>= max(3, n)`. Returns `None` if there is no such prime representable in `N`.
pub fn next_prime<N: PrimInt>(n: N) -> Option<N> {
    let two = N::one() + N::one();
    let mut candidate = n.max(two + N::one());
    if candidate % two == N::zero() {
        candidate = candidate.checked_add(&N::one())?;
    }

    while !is_prime(candidate) {
        candidate = candidate.checked_add(&two)?;
    }

    Some(candidate)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_is_prime() {
        let primes: Vec<u32> = (0..60).filter(|i| is_prime(*i)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59]
        );
        assert!(is_prime(1031usize));
        assert!(!is_prime(1033usize * 1031));
        assert!(is_prime(u32::MAX - 4));
        assert!(!is_prime(u8::MAX));
    }

    #[test]
    fn test_next_prime() {
        assert_eq!(next_prime(0usize), Some(3));
        assert_eq!(next_prime(3usize), Some(3));
        assert_eq!(next_prime(7usize), Some(7));
        assert_eq!(next_prime(8usize), Some(11));
        assert_eq!(next_prime(15usize), Some(17));
        assert_eq!(next_prime(35usize), Some(37));
        assert_eq!(next_prime(2 * 37 + 1usize), Some(79));
        assert_eq!(next_prime(252u8), None);
    }
}
