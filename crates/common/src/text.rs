//! Small string helpers shared by the service layer, mostly for turning
//! user-provided titles and URLs into filesystem-safe names.

use uuid::Uuid;

/// Maximum length of a generated slug, in bytes.
pub const MAX_SLUG_LEN: usize = 80;

/// Reduce an arbitrary string to a lowercase ASCII slug.
///
/// Runs of anything that is not `[a-z0-9]` collapse into a single `-`;
/// leading/trailing dashes are trimmed and the result is bounded by
/// [`MAX_SLUG_LEN`]. Returns an empty string when nothing survives
/// (callers are expected to fall back to [`short_uid`]).
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len().min(MAX_SLUG_LEN));
    let mut last_dash = true; // suppress a leading dash
    for c in input.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            out.push(c);
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
        if out.len() >= MAX_SLUG_LEN {
            break;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Short random identifier used as a filename stem of last resort.
pub fn short_uid() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// Split `name` into (stem, extension). The extension excludes the dot
/// and is lowercased; missing or empty extensions yield `None`.
pub fn split_ext(name: &str) -> (&str, Option<String>) {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() && !ext.contains('/') => {
            (stem, Some(ext.to_ascii_lowercase()))
        }
        _ => (name, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_and_trims() {
        assert_eq!(slugify("Hello,  World!"), "hello-world");
        assert_eq!(slugify("--Weird__name--"), "weird-name");
        assert_eq!(slugify("résumé"), "r-sum");
    }

    #[test]
    fn slugify_empty_for_non_ascii_only() {
        assert_eq!(slugify("你好世界"), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn slugify_bounded() {
        let long = "a".repeat(500);
        assert!(slugify(&long).len() <= MAX_SLUG_LEN);
    }

    #[test]
    fn short_uid_is_short_and_unique_enough() {
        let a = short_uid();
        let b = short_uid();
        assert_eq!(a.len(), 12);
        assert_ne!(a, b);
    }

    #[test]
    fn split_ext_variants() {
        assert_eq!(split_ext("photo.JPG"), ("photo", Some("jpg".into())));
        assert_eq!(split_ext("archive.tar.gz"), ("archive.tar", Some("gz".into())));
        assert_eq!(split_ext("noext"), ("noext", None));
        assert_eq!(split_ext(".hidden"), (".hidden", None));
    }
}
