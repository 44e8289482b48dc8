//! Fingerprint del registro de verificaciones.
//!
//! El hash cubre la versión del harness y la lista ordenada `(id, título)`.
//! Cada campo entra al hasher precedido por su longitud en bytes, de modo que
//! la frontera entre campos es inequívoca y el resultado no depende de ningún
//! formato de serialización intermedio.

use blake3::Hasher;

fn absorb(h: &mut Hasher, field: &str) {
    h.update(&(field.len() as u64).to_le_bytes());
    h.update(field.as_bytes());
}

/// Calcula el fingerprint hex de una lista ordenada de pares `(id, título)`.
pub fn registry_fingerprint<'a, I>(version: &str, entries: I) -> String
    where I: IntoIterator<Item = (&'a str, &'a str)>
{
    let mut h = Hasher::new();
    absorb(&mut h, version);
    for (id, title) in entries {
        absorb(&mut h, id);
        absorb(&mut h, title);
    }
    h.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::registry_fingerprint;

    #[test]
    fn same_entries_same_fingerprint() {
        let a = registry_fingerprint("V1", [("config", "Config"), ("init", "Init")]);
        let b = registry_fingerprint("V1", [("config", "Config"), ("init", "Init")]);
        assert_eq!(a, b);
    }

    #[test]
    fn order_and_version_change_the_fingerprint() {
        let base = registry_fingerprint("V1", [("a", "A"), ("b", "B")]);
        assert_ne!(base, registry_fingerprint("V1", [("b", "B"), ("a", "A")]));
        assert_ne!(base, registry_fingerprint("V2", [("a", "A"), ("b", "B")]));
    }

    #[test]
    fn field_boundaries_are_unambiguous() {
        // "ab"+"c" y "a"+"bc" no deben colisionar.
        let x = registry_fingerprint("V", [("ab", "c")]);
        let y = registry_fingerprint("V", [("a", "bc")]);
        assert_ne!(x, y);
    }
}
