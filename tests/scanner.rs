use pretty_assertions::assert_eq;
use sprig::{
    error::ErrorKind,
    interpreter::lexer::{
        scanner::{scan, scan_str},
        token::{AttributeKey, TokenKind},
    },
    util::span::Span,
};

fn kinds(src: &str) -> Vec<TokenKind> {
    scan_str(src).unwrap_or_else(|e| panic!("scan failed: {e}"))
                 .iter()
                 .map(|t| t.kind)
                 .collect()
}

fn lexical_error(src: &str) -> String {
    let error = scan_str(src).expect_err("expected a lexical error");
    assert_eq!(error.kind, ErrorKind::Lexical);
    error.message.clone()
}

#[test]
fn statements_are_scanned_in_order() {
    use TokenKind::*;
    assert_eq!(kinds("var a = 5;\nprint(a)"),
               vec![VariableDeclaration,
                    Identifier,
                    Assign,
                    Number,
                    Semicolon,
                    NewLine,
                    Identifier,
                    OpenParen,
                    Identifier,
                    CloseParen]);
}

#[test]
fn keywords_match_whole_words_only() {
    use TokenKind::*;
    assert_eq!(kinds("return returned var variable true trueish"),
               vec![Return, Identifier, VariableDeclaration, Identifier, Boolean, Identifier]);
}

#[test]
fn strings_keep_their_content_without_quotes() {
    let tokens = scan_str("\"Hello world\" 'single'").unwrap();
    let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();

    assert_eq!(texts, vec!["Hello world", "single"]);
    assert_eq!(tokens[0].span, Span::new(0, 13));
}

#[test]
fn numbers_with_fractions_are_one_token() {
    let tokens = scan_str("3.5/2.25").unwrap();
    let texts: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();

    assert_eq!(texts,
               vec![(TokenKind::Number, "3.5"),
                    (TokenKind::Operator, "/"),
                    (TokenKind::Number, "2.25")]);
}

#[test]
fn spans_are_byte_offsets() {
    let tokens = scan_str("var  abc").unwrap();
    assert_eq!(tokens[0].span, Span::new(0, 3));
    assert_eq!(tokens[1].span, Span::new(5, 8));
}

#[test]
fn function_header_is_a_single_token() {
    let tokens = scan_str("function add(a, b) {}").unwrap();
    let header = &tokens[0];

    assert_eq!(header.kind, TokenKind::FunctionDeclaration);
    assert_eq!(header.text, "function add(a, b)");
    assert_eq!(header.span, Span::new(0, 18));

    let name = header.attribute(AttributeKey::Name).expect("name attribute");
    assert_eq!((name.value.as_str(), name.span), ("add", Span::new(9, 12)));

    let parameters: Vec<_> = header.attributes(AttributeKey::Parameter)
                                   .map(|a| (a.value.as_str(), a.span))
                                   .collect();
    assert_eq!(parameters, vec![("a", Span::new(13, 14)), ("b", Span::new(16, 17))]);

    assert_eq!(tokens[1].kind, TokenKind::OpenBlock);
    assert_eq!(tokens[2].kind, TokenKind::CloseBlock);
}

#[test]
fn function_header_without_parameters() {
    let tokens = scan_str("function welcome(){}").unwrap();
    assert_eq!(tokens[0].attributes(AttributeKey::Parameter).count(), 0);
    assert_eq!(tokens[0].attribute(AttributeKey::Name).map(|a| a.value.as_str()),
               Some("welcome"));
}

#[test]
fn function_header_may_span_lines() {
    let tokens = scan_str("function f(\n  a,\n  b\n)").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].attributes(AttributeKey::Parameter).count(), 2);
}

#[test]
fn malformed_function_headers_are_rejected() {
    assert!(lexical_error("function (a) {}").contains("expected a function name"));
    assert!(lexical_error("function f a {}").contains("expected `(`"));
    assert!(lexical_error("function f(a b) {}").contains("expected `,` or `)`"));
    assert!(lexical_error("function f(a,) {}").contains("expected a parameter name"));
    assert!(lexical_error("function f(a").contains("unterminated function declaration"));
}

#[test]
fn number_running_into_letters_is_rejected() {
    let error = scan_str("var x = 4x").expect_err("4x is not a valid token");
    assert!(error.message.contains("identifiers must not start with a digit"));
    assert_eq!(error.span, Span::new(8, 10));
}

#[test]
fn illegal_characters_are_rejected() {
    let error = scan_str("var a = 1 # comment").expect_err("`#` is not part of the language");
    assert_eq!(error.message, "illegal character `#`");
    assert_eq!(error.span.start, 10);
}

#[test]
fn unterminated_strings_are_rejected() {
    assert!(lexical_error("print(\"open)").contains("unterminated string literal"));
}

#[test]
fn char_sources_are_drained() {
    let tokens = scan("print(1)".chars()).unwrap();
    assert_eq!(tokens.len(), 4);
}

#[test]
fn token_display_shows_kind_text_and_span() {
    let tokens = scan_str("function f(x)").unwrap();
    assert_eq!(tokens[0].to_string(),
               "FunctionDeclaration \"function f(x)\" @0..13 name=\"f\"@9..10 parameter=\"x\"@11..12");
}

#[test]
fn words_running_into_digits_are_rejected() {
    let error = scan_str("var a2 = 1").expect_err("a2 is not a valid identifier");
    assert_eq!(error.message, "identifiers must not contain digits: `a2`");
    assert_eq!(error.span, Span::new(4, 6));

    assert!(lexical_error("function add2(a) {}").contains("identifiers must not contain digits: `add2`"));
    assert!(lexical_error("function f(x1) {}").contains("`x1`"));
}
