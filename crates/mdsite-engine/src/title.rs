use crate::error::TitleError;
use crate::parsing::blocks::kinds::Heading;

/// Returns the text of the first h1 line in `markdown`.
///
/// Accepts both `# Title` and a bare `#Title`; `##` and deeper never count.
pub fn extract_title(markdown: &str) -> Result<String, TitleError> {
    for line in markdown.lines() {
        let line = line.trim_start();
        let Some(rest) = line.strip_prefix(Heading::MARKER) else {
            continue;
        };
        if rest.starts_with(Heading::MARKER) {
            continue;
        }
        return Ok(rest.trim().to_string());
    }
    Err(TitleError::NoTitle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Hello", "Hello")]
    #[case("   #   Padded Title  ", "Padded Title")]
    #[case("#NoSpace", "NoSpace")]
    #[case("Intro text\n\n## Sub\n# Real Title\n# Second", "Real Title")]
    fn finds_first_h1(#[case] md: &str, #[case] expected: &str) {
        assert_eq!(extract_title(md).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("no headings here")]
    #[case("## Only h2\n### and h3")]
    fn missing_h1(#[case] md: &str) {
        assert_eq!(extract_title(md), Err(TitleError::NoTitle));
    }
}
