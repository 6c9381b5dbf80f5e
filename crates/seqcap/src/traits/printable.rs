use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::Mutex;

/// Extracts the short type name from a full type path and caches it.
///
/// Module paths are dropped everywhere, including inside generic arguments:
/// `seqcap::list::List<alloc::string::String>` becomes `List<String>`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    static CACHE: OnceLock<Mutex<HashMap<&'static str, &'static str>>> = OnceLock::new();

    let full: &'static str = std::any::type_name::<T>();

    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = cache.lock();

    if let Some(&short) = guard.get(full) {
        return short;
    }

    let mut short_owned = String::with_capacity(full.len());
    let mut token_start = 0;
    let mut after_lifetime = false;
    for (i, c) in full.char_indices() {
        if !matches!(c, '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&') {
            continue;
        }
        let token = &full[token_start..i];
        token_start = i + c.len_utf8();

        // Lifetimes are dropped along with their `, ` separator.
        if token.starts_with('\'') {
            after_lifetime = c == ',';
            if c != ',' {
                close_after_lifetime(&mut short_owned, c);
            }
            continue;
        }
        if after_lifetime && token.is_empty() && c == ' ' {
            after_lifetime = false;
            continue;
        }
        after_lifetime = false;

        short_owned.push_str(strip_path(token));
        short_owned.push(c);
    }
    let tail = &full[token_start..];
    if !tail.starts_with('\'') {
        short_owned.push_str(strip_path(tail));
    }

    let short: &'static str = Box::leak(short_owned.into_boxed_str());
    guard.insert(full, short);
    short
}

#[inline]
fn strip_path(segment: &str) -> &str {
    segment.rsplit("::").next().unwrap_or(segment)
}

/// Emits the delimiter that ended a dropped lifetime token. A generic list left
/// with no arguments (`Foo<'a>`) loses its brackets entirely.
fn close_after_lifetime(short: &mut String, delimiter: char) {
    if short.ends_with(", ") {
        short.truncate(short.len() - 2);
    }
    if delimiter == '>' && short.ends_with('<') {
        short.pop();
    } else {
        short.push(delimiter);
    }
}
