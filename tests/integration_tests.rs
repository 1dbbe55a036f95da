//! Integration tests for expression parsing.
//!
//! These tests drive the parser through its public interface only, from a
//! token stream to the rendered expression, covering precedence, grouping,
//! calls and the errors raised on malformed input.

use pratt::{
    errors::errors::ErrorImpl,
    parser::parser::{parse, Parser},
    tokens::tokens::{Token, TokenKind},
    Position,
};
use proptest::prelude::*;
use rstest::rstest;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// Splits `source` into tokens. Runs of letters are names, every other
/// non-space character is a single-character token.
fn tokens(source: &str) -> Vec<Token> {
    let mut tokens = vec![];
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        let kind = match c {
            ' ' => continue,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '~' => TokenKind::Tilde,
            '!' => TokenKind::Bang,
            '/' => TokenKind::Slash,
            '*' => TokenKind::Star,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ',' => TokenKind::Comma,
            c if c.is_alphabetic() => {
                let mut value = c.to_string();
                while let Some(&next) = chars.peek() {
                    if !next.is_alphanumeric() {
                        break;
                    }
                    value.push(next);
                    chars.next();
                }
                tokens.push(Token::new(TokenKind::Name, value));
                continue;
            }
            other => panic!("no token for {:?}", other),
        };
        tokens.push(Token::new(kind, c.to_string()));
    }

    tokens
}

#[rstest]
// Unary
#[case("-a", "-(a)")]
#[case("+b", "+(b)")]
#[case("!c", "!(c)")]
#[case("~d", "~(d)")]
#[case("--e", "-(-(e))")]
// Binary and associativity
#[case("a + bcd", "(a)+(bcd)")]
#[case("a - b - c", "((a)-(b))-(c)")]
#[case("a - b + c", "((a)-(b))+(c)")]
#[case("a / b / c", "((a)/(b))/(c)")]
#[case("a * b / c", "((a)*(b))/(c)")]
// Precedence
#[case("a - b * c", "(a)-((b)*(c))")]
#[case("a * b + c", "((a)*(b))+(c)")]
#[case("a * -b", "(a)*(-(b))")]
#[case("!a * b", "(!(a))*(b)")]
#[case("-a * b", "-((a)*(b))")]
#[case("~a + b", "~((a)+(b))")]
// Grouping
#[case("(a)", "a")]
#[case("((a))", "a")]
#[case("(a + b) * c", "((a)+(b))*(c)")]
#[case("a - (b - c)", "(a)-((b)-(c))")]
// Calls
#[case("a(b, c + d)", "(a)(b,(c)+(d))")]
#[case("a()", "(a)()")]
#[case("a()()", "((a)())()")]
#[case("f(g(x))", "(f)((g)(x))")]
#[case("a + f(b)", "(a)+((f)(b))")]
#[case("-f(x)", "-((f)(x))")]
#[case("(f)(x)", "(f)(x)")]
#[case("(a + b)(c)", "((a)+(b))(c)")]
fn test_parse_expression(#[case] source: &str, #[case] expected: &str) {
    init_tracing();

    let expr = Parser::new(tokens(source)).parse_expression().unwrap();

    assert_eq!(expr.to_string(), expected);
}

#[rstest]
#[case(",", 0)]
#[case(")", 0)]
#[case("", 0)]
#[case("* a", 0)]
#[case("/", 0)]
#[case("a +", 2)]
#[case("a * (", 3)]
#[case("-", 1)]
fn test_unexpected_token(#[case] source: &str, #[case] position: usize) {
    init_tracing();

    let error = Parser::new(tokens(source)).parse_expression().unwrap_err();

    assert!(matches!(error.get_kind(), ErrorImpl::UnexpectedToken { .. }));
    assert_eq!(error.get_position(), &Position(position));
}

#[rstest]
#[case("(a", TokenKind::EOF)]
#[case("(a b)", TokenKind::Name)]
#[case("f(a b)", TokenKind::Name)]
#[case("f(a", TokenKind::EOF)]
fn test_expected_closing_paren(#[case] source: &str, #[case] found_kind: TokenKind) {
    let error = Parser::new(tokens(source)).parse_expression().unwrap_err();

    match error.get_kind() {
        ErrorImpl::ExpectedToken {
            expected, found, ..
        } => {
            assert_eq!(*expected, TokenKind::RightParen);
            assert_eq!(*found, found_kind);
        }
        other => panic!("expected ExpectedToken, got {:?}", other),
    }
}

#[test]
fn test_whole_input_parse() {
    assert_eq!(parse(tokens("a * (b + c)")).unwrap().to_string(), "(a)*((b)+(c))");

    let error = parse(tokens("a b")).unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position(), &Position(1));
}

#[test]
fn test_rendering_is_idempotent() {
    let expr = parse(tokens("f(-a, b * c)(d)")).unwrap();

    let first = expr.to_string();
    let second = expr.to_string();

    assert_eq!(first, second);
    assert_eq!(first, "((f)(-(a),(b)*(c)))(d)");
}

#[test]
fn test_standard_grammar_shared_across_threads() {
    let handles: Vec<_> = ["a - b - c", "a(b, c + d)", "--e"]
        .into_iter()
        .map(|source| std::thread::spawn(move || parse(tokens(source)).map(|e| e.to_string())))
        .collect();

    let rendered: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();

    assert_eq!(rendered, ["((a)-(b))-(c)", "(a)(b,(c)+(d))", "-(-(e))"]);
}

fn token_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        "[a-z]{1,3}".prop_map(|value| Token::new(TokenKind::Name, value)),
        Just(Token::new(TokenKind::Plus, "+")),
        Just(Token::new(TokenKind::Minus, "-")),
        Just(Token::new(TokenKind::Tilde, "~")),
        Just(Token::new(TokenKind::Bang, "!")),
        Just(Token::new(TokenKind::Slash, "/")),
        Just(Token::new(TokenKind::Star, "*")),
        Just(Token::new(TokenKind::LeftParen, "(")),
        Just(Token::new(TokenKind::RightParen, ")")),
        Just(Token::new(TokenKind::Comma, ",")),
    ]
}

fn non_prefix_kind() -> impl Strategy<Value = TokenKind> {
    prop_oneof![
        Just(TokenKind::Comma),
        Just(TokenKind::RightParen),
        Just(TokenKind::Star),
        Just(TokenKind::Slash),
    ]
}

proptest! {
    #[test]
    fn starting_with_non_prefix_token_fails(
        first in non_prefix_kind(),
        rest in prop::collection::vec(token_strategy(), 0..8),
    ) {
        let mut stream = vec![Token::new(first, first.to_string())];
        stream.extend(rest);

        let error = Parser::new(stream).parse_expression().unwrap_err();

        prop_assert_eq!(error.get_error_name(), "UnexpectedToken");
        prop_assert_eq!(error.get_position(), &Position(0));
    }

    #[test]
    fn arbitrary_tokens_never_panic(stream in prop::collection::vec(token_strategy(), 0..16)) {
        if let Ok(expr) = Parser::new(stream).parse_expression() {
            prop_assert_eq!(expr.to_string(), expr.to_string());
        }
    }

    #[test]
    fn equal_power_operators_group_left(
        names in prop::collection::vec("[a-z]{1,3}", 1..6),
        operator in prop_oneof![Just("+"), Just("-"), Just("*"), Just("/")],
    ) {
        let kind = match operator {
            "+" => TokenKind::Plus,
            "-" => TokenKind::Minus,
            "*" => TokenKind::Star,
            _ => TokenKind::Slash,
        };

        let mut stream = vec![];
        let mut expected = String::new();
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                stream.push(Token::new(kind, operator));
                expected = format!("({}){}({})", expected, operator, name);
            } else {
                expected = name.clone();
            }
            stream.push(Token::new(TokenKind::Name, name.as_str()));
        }

        let expr = parse(stream).unwrap();

        prop_assert_eq!(expr.to_string(), expected);
    }
}
