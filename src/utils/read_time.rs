const WORDS_PER_MINUTE: usize = 200;

/// Estimate reading time in whole minutes from the word count at
/// 200 words per minute. Never less than one minute.
pub fn estimate_read_time(content: &str) -> i32 {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_is_one_minute() {
        assert_eq!(estimate_read_time(""), 1);
    }

    #[test]
    fn short_content_is_one_minute() {
        assert_eq!(estimate_read_time("just a few words"), 1);
    }

    #[test]
    fn exact_page_is_one_minute() {
        let content = "word ".repeat(200);
        assert_eq!(estimate_read_time(&content), 1);
    }

    #[test]
    fn partial_minutes_round_up() {
        let content = "word ".repeat(201);
        assert_eq!(estimate_read_time(&content), 2);
    }

    #[test]
    fn long_content() {
        let content = "word ".repeat(1000);
        assert_eq!(estimate_read_time(&content), 5);
    }
}
