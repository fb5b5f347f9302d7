//! Identifier and fixture generation.
//!
//! [`generate_id`] produces throwaway keys for list items; it is not
//! suitable for anything persistent or security-sensitive. The `derive_*`
//! functions produce valid documents deterministically from a seed so test
//! data can be regenerated exactly.

use rand::Rng;
use sha2::{Digest as Sha2Digest, Sha256};

use crate::checksum::{is_repeated, render};
use crate::cnpj::cnpj_check_digits;
use crate::cpf::cpf_check_digits;
use crate::identifiers::{Cnpj, Cpf, DocumentKind};

const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const ID_LEN: usize = 9;

/// Domain separator for fixture derivation: `b"cadastro:fixture:v1\0"`.
const FIXTURE_DOMAIN_SEPARATOR: &[u8] = b"cadastro:fixture:v1\0";

/// Returns a short lowercase alphanumeric key from the thread-local RNG.
pub fn generate_id() -> String {
    generate_id_with(&mut rand::thread_rng())
}

/// Same as [`generate_id`] with a caller-provided RNG.
pub fn generate_id_with<R: Rng>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
        .collect()
}

/// Derives a valid CPF from `seed` and `index`.
///
/// Formula: base digits are `sha256(domain_separator || "CPF" || seed || index)`
/// bytes reduced mod 10, followed by the computed check digits.
pub fn derive_cpf(seed: u64, index: u32) -> Cpf {
    let base: [u8; 9] = derive_base(DocumentKind::Cpf, seed, index);
    let check = cpf_check_digits(&base);
    Cpf::from_checked(render(&[&base[..], &check[..]].concat()))
}

/// Derives a valid CNPJ from `seed` and `index`.
pub fn derive_cnpj(seed: u64, index: u32) -> Cnpj {
    let base: [u8; 12] = derive_base(DocumentKind::Cnpj, seed, index);
    let check = cnpj_check_digits(&base);
    Cnpj::from_checked(render(&[&base[..], &check[..]].concat()))
}

fn derive_base<const N: usize>(kind: DocumentKind, seed: u64, index: u32) -> [u8; N] {
    let mut hasher = Sha256::new();
    hasher.update(FIXTURE_DOMAIN_SEPARATOR);
    hasher.update(kind.label().as_bytes());
    hasher.update(seed.to_le_bytes());
    hasher.update(index.to_le_bytes());
    let hash = hasher.finalize();

    let mut base = [0u8; N];
    for (slot, byte) in base.iter_mut().zip(hash.iter()) {
        *slot = byte % 10;
    }
    // A repeated base yields a repeated document, which never validates.
    if is_repeated(&base) {
        if let Some(last) = base.last_mut() {
            *last = (*last + 1) % 10;
        }
    }
    base
}
