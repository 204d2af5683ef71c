use crate::page::{Field, Paragraph, Token};
use crate::style::Style;
use id_arena::Id;

/// Break text into layout tokens, preserving it exactly as written.
///
/// Every whitespace character (tabs included) becomes one [`Token::Space`], every
/// other character a [`Token::Char`], and every source line, the last one
/// included, ends with a [`Token::LineBreak`]. `\r\n`, `\n` and a lone `\r` all end
/// a line. Nothing is wrapped, collapsed or expanded to tab stops, so indented or
/// column-aligned plain text keeps its shape.
///
/// Returns [None] for text that is empty or consists only of whitespace.
pub fn tokenize(text: &str) -> Option<Vec<Token>> {
    if text.trim().is_empty() {
        return None;
    }

    // normalize newlines
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut tokens = Vec::with_capacity(text.len() + 1);
    for line in text.lines() {
        tokens.extend(line.chars().map(|ch| {
            if ch.is_whitespace() {
                Token::Space
            } else {
                Token::Char(ch)
            }
        }));
        tokens.push(Token::LineBreak);
    }
    Some(tokens)
}

/// A paragraph holding `text`, or [None] when there is nothing to show.
pub fn text_paragraph(style: Id<Style>, text: &str) -> Option<Paragraph> {
    tokenize(text).map(|tokens| Paragraph::new(style, tokens))
}

/// The page-number field: `<current page> (<total pages>)`.
pub fn page_number_tokens() -> Vec<Token> {
    vec![
        Token::Field(Field::PageNumber),
        Token::Space,
        Token::Char('('),
        Token::Field(Field::PageCount),
        Token::Char(')'),
    ]
}
