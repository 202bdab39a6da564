// Text VDF parser (libraryfolders.vdf, appmanifest_*.acf)
//
// Best-effort by contract: malformed input degrades to a partial tree,
// it never returns an error to the caller.

use crate::vdf::types::{VdfMap, VdfValue};

use regex::Regex;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

// One token per match: group 1 is a quoted string body, group 2 is { or }.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""((?:\\.|[^\\"])*)"|([{}])"#).unwrap());

/// Read and parse a text VDF file. Invalid UTF-8 bytes are replaced, not
/// rejected; Steam's own files are occasionally mis-encoded.
pub fn load_text(path: &Path) -> io::Result<VdfMap> {
    let bytes = std::fs::read(path)?;
    Ok(parse_text(&String::from_utf8_lossy(&bytes)))
}

/// Parse text VDF content into a map.
///
/// Comments are stripped line-by-line before tokenizing, so a `//` inside a
/// quoted value is treated as a comment start too. That matches how Steam's
/// files have always been parsed here; no real file puts `//` in a value.
pub fn parse_text(content: &str) -> VdfMap {
    let content = strip_comments(content);

    let mut current = VdfMap::new();

    // Open parents, each waiting for its child map to close.
    let mut stack: Vec<(VdfMap, String)> = Vec::new();
    let mut pending_key: Option<String> = None;

    for caps in TOKEN_RE.captures_iter(&content) {
        if let Some(text) = caps.get(1) {
            let value = unescape(text.as_str());
            match pending_key.take() {
                None => pending_key = Some(value),
                Some(key) => current.insert(key, VdfValue::String(value)),
            }
        } else if let Some(structural) = caps.get(2) {
            match structural.as_str() {
                "{" => {
                    // A brace with no key in front of it is malformed; skip it.
                    let Some(key) = pending_key.take() else {
                        continue;
                    };
                    stack.push((std::mem::take(&mut current), key));
                }
                _ => {
                    pending_key = None;
                    if let Some((mut parent, key)) = stack.pop() {
                        parent.insert(key, VdfValue::Map(std::mem::take(&mut current)));
                        current = parent;
                    }
                    // Stray } at root level: stay at root.
                }
            }
        }
    }

    // Unterminated maps at end-of-input still land in their parents.
    while let Some((mut parent, key)) = stack.pop() {
        parent.insert(key, VdfValue::Map(std::mem::take(&mut current)));
        current = parent;
    }

    current
}

fn strip_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| line.split("//").next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_maps() {
        let doc = r#"
"libraryfolders"
{
    "0"
    {
        "path"      "/home/deck/.local/share/Steam"
        "label"     ""
    }
    "1"
    {
        "path"      "/run/media/mmcblk0p1"
    }
}
"#;
        let root = parse_text(doc);
        let folders = root.get_map("libraryfolders").unwrap();
        assert_eq!(folders.len(), 2);
        assert_eq!(
            folders.get_map("0").unwrap().get_str("path"),
            Some("/home/deck/.local/share/Steam")
        );
        assert_eq!(
            folders.get_map("1").unwrap().get_str("path"),
            Some("/run/media/mmcblk0p1")
        );
    }

    #[test]
    fn test_comments_and_blank_lines_stripped() {
        let doc = "// header comment\n\"AppState\"\n{\n\"appid\" \"70\" // trailing\n\n}\n";
        let root = parse_text(doc);
        assert_eq!(root.get_map("AppState").unwrap().get_str("appid"), Some("70"));
    }

    #[test]
    fn test_escaped_characters_unescaped() {
        let doc = r#""k" { "name" "A \"quoted\" name\twith\ttabs" }"#;
        let root = parse_text(doc);
        assert_eq!(
            root.get_map("k").unwrap().get_str("name"),
            Some("A \"quoted\" name\twith\ttabs")
        );
    }

    #[test]
    fn test_unterminated_map_keeps_partial_tree() {
        let doc = r#""AppState" { "appid" "70" "name" "Half-Life"#;
        let root = parse_text(doc);
        // The unterminated quoted string never tokenizes, the rest survives.
        let state = root.get_map("AppState").unwrap();
        assert_eq!(state.get_str("appid"), Some("70"));
        assert_eq!(state.get_str("name"), None);
    }

    #[test]
    fn test_malformed_braces_never_panic() {
        assert!(parse_text("}}}").is_empty());
        assert!(parse_text("{ { }").is_empty());

        // Brace without a key is skipped, later pairs still parse.
        let root = parse_text(r#"{ "a" "b""#);
        assert_eq!(root.get_str("a"), Some("b"));
    }

    #[test]
    fn test_reparse_is_structurally_stable() {
        let doc = r#""root" { "a" "1" "sub" { "b" "2" } }"#;
        let first = parse_text(doc);

        // Re-serialize the same pairs and parse again.
        let rendered = r#"
"root"
{
    "a"     "1"
    "sub"
    {
        "b"     "2"
    }
}
"#;
        assert_eq!(first, parse_text(rendered));
    }
}
