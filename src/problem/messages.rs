use markdownish::language::ParsingError;

/// Generate problem and detail messages for parsing errors. None of these
/// are the fault of the input; they are all bugs in the parser.
pub fn generate_error_message(error: &ParsingError) -> (String, String) {
    match error {
        ParsingError::IllegalParserState(_) => (
            "Illegal parser state".to_string(),
            "Internal parser error. This should not have happened! Sorry.".to_string(),
        ),
        ParsingError::UnexpectedBlankLine(_) => (
            "Unexpected blank line".to_string(),
            "A blank line outside a code block should have ended the section before reaching here."
                .to_string(),
        ),
        ParsingError::ClosedAttachment(_) => (
            "Content added to a closed block".to_string(),
            "Once closed a block cannot be continued, but this line was added to one.".to_string(),
        ),
        ParsingError::LeafAttachment(_) => (
            "Block opened inside a leaf".to_string(),
            "Paragraphs and code blocks hold text only, yet a block was opened inside one."
                .to_string(),
        ),
        ParsingError::EmptySection(_) => (
            "Empty section".to_string(),
            "A section was created with no lines in it.".to_string(),
        ),
    }
}
