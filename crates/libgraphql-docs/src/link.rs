/// Joins a base URL path and a relative path. Implemented by the host's
/// routing layer; the result is used verbatim as a link target.
pub trait UrlPathJoiner {
    fn join_url_paths(&self, base: &str, relative: &str) -> String;
}

/// Joins two paths with exactly one `/` between them.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlashJoiner;
impl UrlPathJoiner for SlashJoiner {
    fn join_url_paths(&self, base: &str, relative: &str) -> String {
        let base = base.trim_end_matches('/');
        let relative = relative.trim_start_matches('/');
        if base.is_empty() {
            format!("/{relative}")
        } else {
            format!("{base}/{relative}")
        }
    }
}

/// The reference-page path for a directive, relative to the docs root.
pub fn directive_reference_path(directive_name: &str) -> String {
    format!("/directives/{directive_name}")
}

/// The link target for a directive's reference page under `base`.
pub fn directive_href<J: UrlPathJoiner + ?Sized>(
    joiner: &J,
    base: &str,
    directive_name: &str,
) -> String {
    joiner.join_url_paths(base, &directive_reference_path(directive_name))
}
