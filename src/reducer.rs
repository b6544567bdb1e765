/// Returned in place of a summary when there is nothing to reduce.
pub const NO_CONTENT: &str = "No article content found.";

/// Shortens `text` to its first `sentence_count` sentences.
///
/// Sentences are period-delimited fragments: newlines become spaces, the text is
/// split on every `.`, and fragments that are empty once trimmed are dropped.
/// This is not linguistic segmentation, so abbreviations, decimals and ellipses
/// break sentences apart.
///
/// A non-positive `sentence_count` selects no fragments and yields `"."`.
pub fn reduce(text: &str, sentence_count: i64) -> String {
    if text.trim().is_empty() {
        return NO_CONTENT.to_string();
    }

    let flattened = text.replace('\n', " ");
    let fragments: Vec<&str> = flattened
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let take = usize::try_from(sentence_count.max(0)).unwrap_or(usize::MAX);
    let kept = &fragments[..take.min(fragments.len())];

    let mut summary = kept.join(". ");
    summary.push('.');
    summary
}

/// Length in characters, which is how every `*_length` field is reported.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
