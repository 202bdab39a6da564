// Shortcut artwork ID derivation (pure, no I/O)
//
// Steam names custom grid artwork for non-Steam shortcuts after a 32-bit ID
// it derives from the shortcut itself, not after anything stored in
// shortcuts.vdf:
//
//   id = crc32(utf8(exe) ++ utf8(name)) | 0x80000000
//
// The decimal rendering of that u32 is the filename stem under config/grid.
// Older Steam clients also used a 64-bit variant ((id << 32) | 0x02000000)
// for some surfaces; on-disk grid files use the 32-bit form, which is what
// this crate derives everywhere.

/// Derive the grid artwork ID for a shortcut from its executable path and
/// display name. Deterministic; absent fields are treated as empty strings.
pub fn derive_app_id(exe: &str, name: &str) -> String {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(exe.as_bytes());
    hasher.update(name.as_bytes());
    let id = hasher.finalize() | 0x8000_0000;
    id.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        // crc32(b"Test") = 0x784DD132; OR 0x80000000 = 0xF84DD132
        assert_eq!(derive_app_id("", "Test"), "4165849394");
        // crc32(b"test") = 0xD87F7E0C; high bit already set
        assert_eq!(derive_app_id("", "test"), "3632233996");
        // crc32(b"/usr/bin/fooFoo Game") = 0x60A7E33E
        assert_eq!(derive_app_id("/usr/bin/foo", "Foo Game"), "3769099070");
    }

    #[test]
    fn test_high_bit_always_set() {
        for (exe, name) in [
            ("", ""),
            ("/usr/bin/foo", "Foo Game"),
            ("C:\\Games\\x.exe", "X"),
            ("/home/deck/heroic/game", "Ünïcode Née"),
        ] {
            let id: u32 = derive_app_id(exe, name).parse().unwrap();
            assert!(id & 0x8000_0000 != 0);
        }
    }

    #[test]
    fn test_deterministic_and_input_sensitive() {
        assert_eq!(derive_app_id("", ""), derive_app_id("", ""));
        assert_eq!(
            derive_app_id("/usr/bin/foo", "Foo Game"),
            derive_app_id("/usr/bin/foo", "Foo Game")
        );
        assert_ne!(derive_app_id("a", "b"), derive_app_id("", ""));
        // exe and name concatenate with no separator: the pair matters,
        // the split point also matters only through the bytes themselves.
        assert_eq!(derive_app_id("ab", "c"), derive_app_id("a", "bc"));
    }
}
