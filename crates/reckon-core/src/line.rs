//! Raw line classification

/// How a raw notebook line participates in evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Nothing but whitespace
    Blank,
    /// Trimmed line starts with `#`; never evaluated
    Comment,
    /// Contains `=`; binds a name visible to subsequent lines
    Assignment,
    /// Anything else; evaluated for its value
    Expression,
}

/// Classify a raw line.
///
/// Comments win over assignments: `# a = 1` is a comment even though it
/// contains `=`.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with('#') {
        LineKind::Comment
    } else if line.contains('=') {
        LineKind::Assignment
    } else {
        LineKind::Expression
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_blank() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("   \t"), LineKind::Blank);
    }

    #[test]
    fn test_classify_comment() {
        assert_eq!(classify_line("# note"), LineKind::Comment);
        assert_eq!(classify_line("   # indented"), LineKind::Comment);
    }

    #[test]
    fn test_comment_wins_over_assignment() {
        assert_eq!(classify_line("# a = 1"), LineKind::Comment);
    }

    #[test]
    fn test_classify_assignment() {
        assert_eq!(classify_line("a = 20"), LineKind::Assignment);
        assert_eq!(classify_line("total=1+2"), LineKind::Assignment);
    }

    #[test]
    fn test_classify_expression() {
        assert_eq!(classify_line("1 + 2"), LineKind::Expression);
        assert_eq!(classify_line("sqrt 9"), LineKind::Expression);
    }
}
