use wiki_digest::reducer::{NO_CONTENT, reduce};

#[cfg(test)]
mod placeholder {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(reduce("", 4), NO_CONTENT);
    }

    #[test]
    fn test_whitespace_only_text() {
        assert_eq!(reduce("   ", 4), NO_CONTENT);
        assert_eq!(reduce("\n\t \n", 1), NO_CONTENT);
    }

    #[test]
    fn test_placeholder_ignores_count() {
        assert_eq!(reduce("", 0), NO_CONTENT);
        assert_eq!(reduce("", -3), NO_CONTENT);
    }
}

#[cfg(test)]
mod truncation {
    use super::*;

    #[test]
    fn test_default_count_of_four() {
        assert_eq!(reduce("A. B. C. D. E.", 4), "A. B. C. D.");
    }

    #[test]
    fn test_exactly_n_fragments_keeps_all() {
        assert_eq!(reduce("One. Two. Three.", 3), "One. Two. Three.");
    }

    #[test]
    fn test_fewer_fragments_keeps_all_and_adds_period() {
        assert_eq!(
            reduce("Only one sentence without a period", 4),
            "Only one sentence without a period."
        );
    }

    #[test]
    fn test_later_content_ignored() {
        let a = reduce("First. Second. Third is different.", 2);
        let b = reduce("First. Second. Something else entirely. And more.", 2);
        assert_eq!(a, "First. Second.");
        assert_eq!(a, b);
    }

    #[test]
    fn test_newlines_become_spaces() {
        assert_eq!(
            reduce("Line one\ncontinues. Line two.", 4),
            "Line one continues. Line two."
        );
    }

    #[test]
    fn test_empty_fragments_dropped() {
        assert_eq!(reduce("A.. . B...C", 4), "A. B. C.");
    }

    #[test]
    fn test_fragments_trimmed() {
        assert_eq!(
            reduce("   padded   .    also padded   .", 4),
            "padded. also padded."
        );
    }

    #[test]
    fn test_only_periods() {
        // Non-blank text with no fragments joins nothing.
        assert_eq!(reduce("...", 4), ".");
    }

    #[test]
    fn test_naive_split_on_decimals_and_abbreviations() {
        assert_eq!(
            reduce("Pi is 3.14 roughly. Dr. Smith agrees.", 2),
            "Pi is 3. 14 roughly."
        );
    }

    #[test]
    fn test_unicode_text() {
        let text = "Ankara, Türkiye'nin başkentidir. İkinci büyük şehridir. Üçüncü cümle.";
        assert_eq!(
            reduce(text, 2),
            "Ankara, Türkiye'nin başkentidir. İkinci büyük şehridir."
        );
    }
}

#[cfg(test)]
mod non_positive_counts {
    use super::*;

    #[test]
    fn test_zero_yields_lone_period() {
        assert_eq!(reduce("A. B. C.", 0), ".");
    }

    #[test]
    fn test_negative_yields_lone_period() {
        assert_eq!(reduce("A. B. C.", -1), ".");
        assert_eq!(reduce("A. B. C.", i64::MIN), ".");
    }

    #[test]
    fn test_huge_count_keeps_all() {
        assert_eq!(reduce("A. B.", i64::MAX), "A. B.");
    }
}
