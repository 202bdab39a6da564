// Binary VDF parser (shortcuts.vdf)
//
// Record layout, little-endian throughout:
//   tag (1 byte) + name (NUL-terminated UTF-8) + value
// A map is a record sequence terminated by tag 0x08. Truncated or
// unrecognized input stops the current map and returns what was collected;
// fabricating entries from garbage bytes would be worse than dropping them.

use crate::vdf::types::{VdfMap, VdfValue};

use std::io;
use std::path::Path;

const TAG_MAP: u8 = 0x00;
const TAG_STRING: u8 = 0x01;
const TAG_U32: u8 = 0x02;
const TAG_U64: u8 = 0x07;
const TAG_END: u8 = 0x08;

/// Read and parse a binary VDF file.
pub fn load_binary(path: &Path) -> io::Result<VdfMap> {
    let bytes = std::fs::read(path)?;
    Ok(parse_binary(&bytes))
}

/// Parse binary VDF bytes into a map. Never fails; see module notes.
pub fn parse_binary(data: &[u8]) -> VdfMap {
    Cursor { data, pos: 0 }.read_map()
}

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn read_map(&mut self) -> VdfMap {
        let mut map = VdfMap::new();

        while self.pos < self.data.len() {
            let tag = self.data[self.pos];
            self.pos += 1;

            if tag == TAG_END {
                break;
            }
            // Unknown tag: byte sync is lost, stop this map here.
            if !matches!(tag, TAG_MAP | TAG_STRING | TAG_U32 | TAG_U64) {
                break;
            }

            let Some(name) = self.read_cstring() else {
                break;
            };

            let value = match tag {
                TAG_MAP => VdfValue::Map(self.read_map()),
                TAG_STRING => match self.read_cstring() {
                    Some(s) => VdfValue::String(s),
                    None => break,
                },
                TAG_U32 => match self.read_u32() {
                    Some(n) => VdfValue::U32(n),
                    None => break,
                },
                _ => match self.read_u64() {
                    Some(n) => VdfValue::U64(n),
                    None => break,
                },
            };
            map.insert(name, value);
        }

        map
    }

    fn read_cstring(&mut self) -> Option<String> {
        let rest = &self.data[self.pos..];
        let end = rest.iter().position(|&b| b == 0)?;
        let s = String::from_utf8_lossy(&rest[..end]).into_owned();
        self.pos += end + 1;
        Some(s)
    }

    fn read_u32(&mut self) -> Option<u32> {
        let bytes = self.data.get(self.pos..self.pos + 4)?;
        self.pos += 4;
        Some(u32::from_le_bytes(bytes.try_into().unwrap()))
    }

    fn read_u64(&mut self) -> Option<u64> {
        let bytes = self.data.get(self.pos..self.pos + 8)?;
        self.pos += 8;
        Some(u64::from_le_bytes(bytes.try_into().unwrap()))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    /// Minimal binary VDF writer for building test fixtures.
    #[derive(Default)]
    pub struct BinWriter {
        pub buf: Vec<u8>,
    }

    impl BinWriter {
        pub fn new() -> Self {
            Self::default()
        }

        fn name(&mut self, name: &str) {
            self.buf.extend_from_slice(name.as_bytes());
            self.buf.push(0);
        }

        pub fn begin_map(&mut self, name: &str) -> &mut Self {
            self.buf.push(super::TAG_MAP);
            self.name(name);
            self
        }

        pub fn end_map(&mut self) -> &mut Self {
            self.buf.push(super::TAG_END);
            self
        }

        pub fn string(&mut self, name: &str, value: &str) -> &mut Self {
            self.buf.push(super::TAG_STRING);
            self.name(name);
            self.buf.extend_from_slice(value.as_bytes());
            self.buf.push(0);
            self
        }

        pub fn u32(&mut self, name: &str, value: u32) -> &mut Self {
            self.buf.push(super::TAG_U32);
            self.name(name);
            self.buf.extend_from_slice(&value.to_le_bytes());
            self
        }

        pub fn u64(&mut self, name: &str, value: u64) -> &mut Self {
            self.buf.push(super::TAG_U64);
            self.name(name);
            self.buf.extend_from_slice(&value.to_le_bytes());
            self
        }
    }
}
