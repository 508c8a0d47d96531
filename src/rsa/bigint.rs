// RSA Big Integer Operations
// Modular arithmetic and prime generation on top of num-bigint

use log::debug;
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use rand::rngs::OsRng;
use rand::{thread_rng, CryptoRng, RngCore};

use crate::error::{RsaError, RsaResult};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Miller-Rabin rounds used when the caller does not choose.
/// Each round lets a composite through with probability at most 1/4, so 64
/// rounds keep the error below 2^-128.
pub const DEFAULT_MILLER_RABIN_ROUNDS: u32 = 64;

/// Floor applied by [`generate_prime`]; 50 rounds bound the error by 2^-100
pub const MIN_MILLER_RABIN_ROUNDS: u32 = 50;

/// Primes below 256, used for trial division before Miller-Rabin
const SMALL_PRIMES: [u32; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply, scanning the exponent from its least significant
/// bit. Not constant-time: the number of multiplications depends on `exp`.
///
/// `modulus` must be non-zero. A modulus of one yields zero.
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Compute modular inverse: a^(-1) mod m
/// Iterative extended Euclid on signed integers. Returns None if gcd(a, m) != 1.
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    if m.is_zero() {
        return None;
    }

    let modulus = BigInt::from(m.clone());
    let (mut t, mut new_t) = (BigInt::zero(), BigInt::one());
    let (mut r, mut new_r) = (modulus.clone(), BigInt::from(a % m));

    while !new_r.is_zero() {
        let quotient = &r / &new_r;

        let next_t = &t - &quotient * &new_t;
        t = std::mem::replace(&mut new_t, next_t);

        let next_r = &r - &quotient * &new_r;
        r = std::mem::replace(&mut new_r, next_r);
    }

    if !r.is_one() {
        return None;
    }
    if t.is_negative() {
        t += &modulus;
    }

    t.to_biguint()
}

/// Miller-Rabin primality test
/// Returns true if n is probably prime. Small factors are ruled out by trial
/// division first; witnesses do not need a secure source.
pub fn is_probable_prime(n: &RsaBigInt, rounds: u32) -> bool {
    if n < &RsaBigInt::from(2u8) {
        return false;
    }
    for &small in SMALL_PRIMES.iter() {
        let small = RsaBigInt::from(small);
        if *n == small {
            return true;
        }
        if (n % &small).is_zero() {
            return false;
        }
    }

    // Write n-1 as d * 2^s with d odd
    let n_minus_one = n - 1u8;
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    // n > 251 here, so [2, n-1) is never empty
    let mut rng = thread_rng();
    let two = RsaBigInt::from(2u8);

    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = mod_pow(&a, &d, n);

        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }

        // Composite
        return false;
    }

    // Probably prime
    true
}

/// Generate a random prime of exactly `bits` bits from a secure source.
///
/// The two top bits are forced on so that the product of two such primes has
/// exactly `2 * bits` bits. Any failure of the random source aborts the search.
/// `rounds` below [`MIN_MILLER_RABIN_ROUNDS`] are raised to that floor.
pub fn generate_prime<R>(bits: u32, rng: &mut R, rounds: u32) -> RsaResult<RsaBigInt>
where
    R: RngCore + CryptoRng,
{
    if bits < 2 {
        return Err(RsaError::InvalidBitLength(bits));
    }

    let rounds = rounds.max(MIN_MILLER_RABIN_ROUNDS);
    let (byte_len, excess) = candidate_layout(bits);
    let forced = (RsaBigInt::one() << (bits - 1)) | (RsaBigInt::one() << (bits - 2)) | RsaBigInt::one();

    let mut buf = vec![0u8; byte_len];
    let mut candidates = 0u64;
    loop {
        rng.try_fill_bytes(&mut buf)
            .map_err(RsaError::PrimeGenerationFailed)?;
        candidates += 1;

        let mut candidate = RsaBigInt::from_bytes_be(&buf) >> excess;
        candidate |= &forced;

        if is_probable_prime(&candidate, rounds) {
            debug!("found {}-bit prime after {} candidate(s)", bits, candidates);
            return Ok(candidate);
        }
    }
}

/// Bytes to draw for a `bits`-bit candidate and how many surplus low bits to shift out
fn candidate_layout(bits: u32) -> (usize, u32) {
    (bits.div_ceil(8) as usize, (8 - bits % 8) % 8)
}

/// Generate a random prime of specified bit length using the OS entropy source
pub fn random_prime(bits: u32) -> RsaResult<RsaBigInt> {
    generate_prime(bits, &mut OsRng, DEFAULT_MILLER_RABIN_ROUNDS)
}
