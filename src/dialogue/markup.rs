//! Inline markup for dialogue text
//!
//! Dialogue lines may carry `<tag>content</tag>` emphasis. The lexer splits a
//! line into text runs and tags; the parser pairs each opening tag with the
//! next closing tag of the same name and produces a flat list of segments.
//! Tags that cannot be paired are dropped and render as nothing.

/// A lexical token of dialogue markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Visible text, entities already decoded
    Text(String),
    OpenTag(String),
    CloseTag(String),
}

/// A run of visible text, either plain or inside a styled span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Tag name of the enclosing span, `None` for plain text
    pub style: Option<String>,
    pub text: String,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            style: None,
            text: text.into(),
        }
    }

    pub fn styled(style: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            style: Some(style.into()),
            text: text.into(),
        }
    }

    pub fn is_styled(&self) -> bool {
        self.style.is_some()
    }

    /// Visible units in this segment
    pub fn unit_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Longest entity body considered, `#x10FFFF` fits
const MAX_ENTITY_LEN: usize = 10;

/// Split `source` into text runs and tags.
///
/// A `<` without a later `>` is literal text. A `<...>` whose name is not a
/// word (`< b>`, `<>`, `<!-- -->`) produces no token at all.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut rest = source;

    while let Some(ch) = rest.chars().next() {
        match ch {
            '<' => {
                let Some(end) = rest.find('>') else {
                    text.push('<');
                    rest = &rest[1..];
                    continue;
                };

                if let Some(token) = parse_tag(&rest[1..end]) {
                    flush_text(&mut text, &mut tokens);
                    tokens.push(token);
                }
                rest = &rest[end + 1..];
            }
            '&' => {
                if let Some((decoded, consumed)) = decode_entity_prefix(rest) {
                    text.push(decoded);
                    rest = &rest[consumed..];
                } else {
                    text.push('&');
                    rest = &rest[1..];
                }
            }
            _ => {
                text.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    flush_text(&mut text, &mut tokens);
    tokens
}

fn flush_text(text: &mut String, tokens: &mut Vec<Token>) {
    if !text.is_empty() {
        tokens.push(Token::Text(std::mem::take(text)));
    }
}

/// Parse the inside of `<...>`. Attributes after the name are ignored.
fn parse_tag(body: &str) -> Option<Token> {
    let (closing, body) = match body.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, body),
    };

    let name: String = body
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if name.is_empty() {
        return None;
    }

    Some(if closing {
        Token::CloseTag(name)
    } else {
        Token::OpenTag(name)
    })
}

/// Decode an entity at the start of `s` (which begins with `&`).
/// Returns the character and the number of bytes consumed.
fn decode_entity_prefix(s: &str) -> Option<(char, usize)> {
    let (offset, _) = s[1..]
        .char_indices()
        .take(MAX_ENTITY_LEN + 1)
        .find(|(_, c)| *c == ';')?;
    let semi = offset + 1;
    let decoded = decode_entity(&s[1..semi])?;
    Some((decoded, semi + 1))
}

/// Decode a named or numeric entity body (the part between `&` and `;`)
pub fn decode_entity(entity: &str) -> Option<char> {
    let named = match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        "hellip" => Some('…'),
        "iexcl" => Some('¡'),
        "iquest" => Some('¿'),
        "ntilde" => Some('ñ'),
        "Ntilde" => Some('Ñ'),
        "aacute" => Some('á'),
        "Aacute" => Some('Á'),
        "eacute" => Some('é'),
        "Eacute" => Some('É'),
        "iacute" => Some('í'),
        "Iacute" => Some('Í'),
        "oacute" => Some('ó'),
        "Oacute" => Some('Ó'),
        "uacute" => Some('ú'),
        "Uacute" => Some('Ú'),
        _ => None,
    };
    named.or_else(|| decode_numeric_entity(entity))
}

fn decode_numeric_entity(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let value = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u32>().ok()?,
    };
    char::from_u32(value)
}

/// Pair tags and flatten `tokens` into segments.
///
/// Tags nested inside a styled span are dropped; their text joins the span.
pub fn parse(tokens: &[Token]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        match &tokens[i] {
            Token::Text(text) => push_plain(&mut segments, text),
            Token::OpenTag(name) => {
                let close = tokens[i + 1..]
                    .iter()
                    .position(|t| matches!(t, Token::CloseTag(n) if n == name))
                    .map(|offset| i + 1 + offset);

                if let Some(close) = close {
                    let content: String = tokens[i + 1..close]
                        .iter()
                        .filter_map(|t| match t {
                            Token::Text(text) => Some(text.as_str()),
                            _ => None,
                        })
                        .collect();
                    if !content.is_empty() {
                        segments.push(Segment::styled(name.clone(), content));
                    }
                    i = close;
                }
            }
            Token::CloseTag(_) => {}
        }
        i += 1;
    }

    segments
}

fn push_plain(segments: &mut Vec<Segment>, text: &str) {
    match segments.last_mut() {
        Some(last) if !last.is_styled() => last.text.push_str(text),
        _ => segments.push(Segment::plain(text)),
    }
}

/// Tokenize and parse in one go
pub fn segments(source: &str) -> Vec<Segment> {
    parse(&tokenize(source))
}

/// The visible text of `source` with all markup removed
pub fn plain_text(source: &str) -> String {
    segments(source).into_iter().map(|s| s.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_tags_and_text() {
        assert_eq!(
            tokenize("Hi <b>there</b>!"),
            vec![
                Token::Text("Hi ".to_string()),
                Token::OpenTag("b".to_string()),
                Token::Text("there".to_string()),
                Token::CloseTag("b".to_string()),
                Token::Text("!".to_string()),
            ]
        );
    }

    #[test]
    fn test_lone_angle_bracket_is_text() {
        assert_eq!(tokenize("1 < 2"), vec![Token::Text("1 < 2".to_string())]);
    }

    #[test]
    fn test_nameless_tag_is_zero_width() {
        assert_eq!(tokenize("a<>b< c>d"), vec![Token::Text("abd".to_string())]);
    }

    #[test]
    fn test_attributes_are_ignored() {
        assert_eq!(
            segments(r#"<span class="hl">gold</span>"#),
            vec![Segment::styled("span", "gold")]
        );
    }

    #[test]
    fn test_entities_decode_to_one_char() {
        assert_eq!(plain_text("Fish &amp; chips"), "Fish & chips");
        assert_eq!(plain_text("&Ntilde;&Eacute; &ntilde;&eacute;"), "ÑÉ ñé");
        assert_eq!(plain_text("&lt;b&gt;"), "<b>");
        assert_eq!(plain_text("&#161;Hola! &#x263A;"), "¡Hola! ☺");
        assert_eq!(plain_text("a&nbsp;b").chars().count(), 3);
    }

    #[test]
    fn test_unknown_entity_is_literal() {
        assert_eq!(plain_text("R&D &bogus; & more"), "R&D &bogus; & more");
    }

    #[test]
    fn test_parse_pairs_matching_tags() {
        assert_eq!(
            segments("Hi <b>there</b>!"),
            vec![
                Segment::plain("Hi "),
                Segment::styled("b", "there"),
                Segment::plain("!"),
            ]
        );
    }

    #[test]
    fn test_unmatched_tags_are_dropped() {
        assert_eq!(segments("a<b>c"), vec![Segment::plain("ac")]);
        assert_eq!(segments("a</i>c"), vec![Segment::plain("ac")]);
        assert_eq!(segments("<b>x</i>"), vec![Segment::plain("x")]);
    }

    #[test]
    fn test_nested_tags_flatten_into_span() {
        assert_eq!(
            segments("<b>big <i>deal</i></b>"),
            vec![Segment::styled("b", "big deal")]
        );
    }

    #[test]
    fn test_empty_span_renders_nothing() {
        assert_eq!(segments("a<b></b>c"), vec![Segment::plain("ac")]);
    }

    #[test]
    fn test_unit_count_counts_chars() {
        assert_eq!(Segment::plain("¡Olé!").unit_count(), 5);
    }
}
