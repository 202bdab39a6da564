// Value tree shared by the text and binary VDF parsers

/// A single value in a parsed VDF document.
///
/// Text VDF only ever produces `String` and `Map`; the binary format
/// (shortcuts.vdf) additionally stores 32- and 64-bit integers.
#[derive(Debug, Clone, PartialEq)]
pub enum VdfValue {
    String(String),
    U32(u32),
    U64(u64),
    Map(VdfMap),
}

impl VdfValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            VdfValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&VdfMap> {
        match self {
            VdfValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

/// An insertion-ordered string-keyed map.
///
/// Keys are unique; re-inserting an existing key replaces its value in
/// place. VDF documents are small (a few hundred entries at most), so a
/// linear key scan beats hashing here and keeps iteration order trivially
/// equal to document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VdfMap {
    entries: Vec<(String, VdfValue)>,
}

impl VdfMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, value: VdfValue) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&VdfValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(VdfValue::as_str)
    }

    pub fn get_map(&self, key: &str) -> Option<&VdfMap> {
        self.get(key).and_then(VdfValue::as_map)
    }

    /// First non-empty string value among the given key aliases.
    ///
    /// shortcuts.vdf is inconsistent about field casing across Steam
    /// versions ("AppName" vs "appname"), so lookups take an explicit
    /// ordered alias list; the first key present wins.
    pub fn get_str_alias<'a>(&'a self, aliases: &[&str]) -> Option<&'a str> {
        aliases.iter().find_map(|key| self.get_str(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VdfValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut map = VdfMap::new();
        map.insert("a".into(), VdfValue::String("1".into()));
        map.insert("b".into(), VdfValue::String("2".into()));
        map.insert("a".into(), VdfValue::String("3".into()));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get_str("a"), Some("3"));
        // Replacement keeps the original position
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_alias_lookup_first_match_wins() {
        let mut map = VdfMap::new();
        map.insert("appname".into(), VdfValue::String("lower".into()));
        map.insert("AppName".into(), VdfValue::String("upper".into()));

        assert_eq!(map.get_str_alias(&["AppName", "appname"]), Some("upper"));
        assert_eq!(map.get_str_alias(&["missing", "appname"]), Some("lower"));
        assert_eq!(map.get_str_alias(&["missing"]), None);
    }
}
