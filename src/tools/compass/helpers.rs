/// Joins path segments onto `base`. Segments are appended verbatim: callers
/// pass identifiers through untouched, so nothing is trimmed or escaped.
pub(crate) fn build_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(segment);
    }
    url
}
