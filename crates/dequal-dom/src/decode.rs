/// Undo the page's percent-escaping of `%`, `'` and `"`
///
/// Replacements run in sequence (`%25`, then `%27`, then `%22`), so an
/// escaped escape such as `%2527` decodes all the way to `'`.
pub fn decode(s: &str) -> String {
    s.replace("%25", "%").replace("%27", "'").replace("%22", "\"")
}
