/// Finds the length of the longest prefix shared by `a` and `b`.
///
/// Characters are compared one at a time until a mismatch or until either string
/// ends. The result is a byte offset that lies on a char boundary of both strings,
/// so `&a[lcp..]` and `&b[lcp..]` are always valid slices.
pub fn longest_common_prefix(a: &str, b: &str) -> usize {
    let mut len = 0;

    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        len += ca.len_utf8();
    }

    len
}

/// First character of a label or key, if any.
pub(crate) fn first_char(s: &str) -> Option<char> {
    s.chars().next()
}
