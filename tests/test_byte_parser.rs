use strdb::parser::ParsingErrorType;
use strdb::parser::byte_parser::ConsumeMode::{Exclusive, Inclusive};
use strdb::parser::byte_parser::ByteParser;

#[test]
fn test_skip_whitespace() {
    let mut parser = ByteParser::for_str(" \r  \t\n \t x y");
    parser.skip_whitespace();
    assert_eq!(parser.peek(), Some(b'x'));

    parser.next_byte(); // skip x
    parser.skip_whitespace();
    assert_eq!(parser.peek(), Some(b'y'));
}

#[test]
fn test_consume_if() {
    let mut parser = ByteParser::for_str("AG");
    assert!(!parser.consume_if(b'G'));
    assert!(parser.consume_if(b'A'));
    assert!(parser.consume_if(b'G'));
    assert!(parser.is_eof());
    assert!(!parser.consume_if(b'G'));
}

#[test]
fn test_consume_until_inclusive() {
    let mut parser = ByteParser::for_str("Jane Doe 2 AGAT 3");
    assert!(parser.consume_until(b'A', Inclusive));
    assert_eq!(parser.peek(), Some(b'G'));
    assert_eq!(parser.position(), 12);
}

#[test]
fn test_consume_until_exclusive() {
    let mut parser = ByteParser::for_str("Jane Doe 2 AGAT 3");
    assert!(parser.consume_until(b'A', Exclusive));
    assert_eq!(parser.peek(), Some(b'A'));
    assert_eq!(parser.position(), 11);

    assert!(!parser.consume_until(b'Z', Exclusive));
    assert!(parser.is_eof());
}

#[test]
fn test_parse_line() {
    let mut parser = ByteParser::for_str("AGATAGAT\r\nTATC\n\nlast");
    assert_eq!(parser.parse_line().unwrap(), "AGATAGAT");
    assert_eq!(parser.parse_line().unwrap(), "TATC");
    assert_eq!(parser.parse_line().unwrap(), "");
    assert_eq!(parser.parse_line().unwrap(), "last");

    let err = parser.parse_line().unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::UnexpectedEof);
}

#[test]
fn test_parse_line_keeps_inner_whitespace() {
    let mut parser = ByteParser::for_str("  AG AT \n");
    assert_eq!(parser.parse_line().unwrap(), "  AG AT ");
    assert!(parser.is_eof());
}

#[test]
fn test_parse_token() {
    let mut parser = ByteParser::for_str("  Jane\tDoe\n\n  2  ");
    assert_eq!(parser.parse_token().unwrap(), "Jane");
    assert_eq!(parser.parse_token().unwrap(), "Doe");
    assert_eq!(parser.parse_token().unwrap(), "2");

    let err = parser.parse_token().unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::UnexpectedEof);
    assert_eq!(err.position(), Some(17));
}

#[test]
fn test_parse_number() {
    let mut parser = ByteParser::for_str("0 42\n007");
    assert_eq!(parser.parse_number().unwrap(), 0);
    assert_eq!(parser.parse_number().unwrap(), 42);
    assert_eq!(parser.parse_number().unwrap(), 7);
}

#[test]
fn test_parse_number_invalid() {
    for (input, token) in [("  -3 x", "-3"), ("  AGAT 3", "AGAT"), ("  4.5", "4.5")] {
        let mut parser = ByteParser::for_str(input);
        let err = parser.parse_number().unwrap_err();
        assert_eq!(err.kind(), &ParsingErrorType::InvalidNumber(token.to_string()));
        // Points at the start of the offending token
        assert_eq!(err.position(), Some(2));
        assert!(err.context().starts_with(token));
        assert_eq!(parser.position(), 2);
    }
}

#[test]
fn test_parse_number_eof() {
    let mut parser = ByteParser::for_str(" \n ");
    let err = parser.parse_number().unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::UnexpectedEof);
}

#[test]
fn test_set_position() {
    let mut parser = ByteParser::for_str("Jane Doe");
    parser.set_position(5);
    assert_eq!(parser.parse_token().unwrap(), "Doe");

    parser.set_position(0);
    assert_eq!(parser.parse_token().unwrap(), "Jane");
}

#[test]
fn test_lookahead_string() {
    let mut parser = ByteParser::for_str("Jane Doe 2 AGAT 3 TATC 4");
    parser.consume_until(b'2', Exclusive);
    assert_eq!(parser.lookahead_string(6), "2 AGAT");
    assert_eq!(parser.lookahead_string(100), "2 AGAT 3 TATC 4");
    // Context does not consume
    assert_eq!(parser.peek(), Some(b'2'));
}
