/// Derive a URL-safe slug from free text.
///
/// Lowercases the input, collapses every run of non-alphanumeric
/// characters into a single hyphen, and strips leading/trailing hyphens.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut gap = false;

    for c in input.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(c);
        } else {
            gap = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn collapses_symbol_runs() {
        assert_eq!(
            slugify("Blockchain for Carbon Credits: A Decentralized Approach"),
            "blockchain-for-carbon-credits-a-decentralized-approach"
        );
    }

    #[test]
    fn strips_leading_and_trailing_separators() {
        assert_eq!(slugify("  ...Solar Gardens!  "), "solar-gardens");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(slugify("10 Simple Ways"), "10-simple-ways");
    }

    #[test]
    fn non_ascii_becomes_separator() {
        assert_eq!(slugify("énergie solaire"), "nergie-solaire");
    }

    #[test]
    fn empty_input() {
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn all_symbols_input() {
        assert_eq!(slugify("!?#%"), "");
    }
}
