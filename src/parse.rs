use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, digit1},
    combinator::{all_consuming, map, map_res},
    multi::many1,
    sequence::delimited,
    IResult, Parser,
};

use crate::types::{JsonPath, PathToken};

/// Parses a path string into a `JsonPath`.
///
/// The grammar is deliberately lenient and never fails: one leading `.` is
/// stripped, the rest is split on `.` (empty segments are skipped, so `.` and
/// the empty string address the root), and each segment is parsed into key
/// and `[n]` index tokens. A segment the grammar cannot fully consume, such
/// as one with an unbalanced bracket, becomes a single literal key token.
///
/// Only bracketed integers produce index tokens; a bare numeric segment like
/// `.a.0` is the key `"0"`, and a bracketed non-integer like `[name]` is the
/// key `"name"` with the brackets stripped.
pub(crate) fn parse_path(input: &str) -> JsonPath {
    let stripped = input.strip_prefix('.').unwrap_or(input);

    let mut tokens = Vec::new();
    for segment in stripped.split('.') {
        if segment.is_empty() {
            continue;
        }
        match all_consuming(segment_tokens).parse(segment) {
            Ok((_, parsed)) => tokens.extend(parsed),
            // Lenient fallback: whatever the grammar rejects is a key.
            Err(_) => tokens.push(PathToken::Key(segment.to_string())),
        }
    }

    JsonPath::new(tokens)
}

fn segment_tokens(input: &str) -> IResult<&str, Vec<PathToken>> {
    many1(alt((index_token, bracketed_key, bare_key))).parse(input)
}

fn index_token(input: &str) -> IResult<&str, PathToken> {
    map(
        delimited(char('['), map_res(digit1, str::parse::<usize>), char(']')),
        PathToken::Index,
    )
    .parse(input)
}

fn bracketed_key(input: &str) -> IResult<&str, PathToken> {
    map(
        delimited(
            char('['),
            take_while1(|c: char| c != '[' && c != ']'),
            char(']'),
        ),
        |name: &str| PathToken::Key(name.to_string()),
    )
    .parse(input)
}

fn bare_key(input: &str) -> IResult<&str, PathToken> {
    map(take_while1(|c: char| c != '['), |name: &str| {
        PathToken::Key(name.to_string())
    })
    .parse(input)
}
