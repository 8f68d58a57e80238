//! Morse codec built on one register instantiation.
//!
//! One character's pulse pattern lives in a `Register<U16x8>`: up to five
//! pulse tokens in the leading lanes, zero in the rest. Decoding accumulates
//! pulse tokens into such a buffer and resolves it by whole-buffer equality
//! against the symbol table, one register compare per candidate.
//!
//! Wire format, one byte per token: `*` short pulse, `-` long pulse, `&`
//! character separator, `|` word separator.

pub mod io;

use crate::simd::{Register, U16x8};

/// One character's pulse pattern.
pub type Symbol = Register<U16x8>;

/// Short pulse token.
pub const SHORT: u16 = b'*' as u16;
/// Long pulse token.
pub const LONG: u16 = b'-' as u16;
/// Character separator token.
pub const CHAR_SEP: u16 = b'&' as u16;
/// Word separator token.
pub const WORD_SEP: u16 = b'|' as u16;

/// Stands in for a pulse sequence with no symbol table entry. Never written
/// to final output; writers filter it.
pub const UNRECOGNIZED: u8 = b'#';

const S: u16 = SHORT;
const L: u16 = LONG;

/// Pattern of a word separator when it travels as a symbol buffer.
pub(crate) const WORD_SEP_PATTERN: [u16; 8] = [WORD_SEP, 0, 0, 0, 0, 0, 0, 0];

/// Pattern of a character separator when it travels as a symbol buffer.
pub(crate) const CHAR_SEP_PATTERN: [u16; 8] = [CHAR_SEP, 0, 0, 0, 0, 0, 0, 0];

/// Empty buffer; the encoding of anything outside the symbol table.
pub(crate) const NULL_PATTERN: [u16; 8] = [0; 8];

/// International Morse patterns for A-Z then 0-9, zero-padded to the lane
/// count.
static SYMBOL_TABLE: [([u16; 8], u8); 36] = [
    ([S, L, 0, 0, 0, 0, 0, 0], b'A'),
    ([L, S, S, S, 0, 0, 0, 0], b'B'),
    ([L, S, L, S, 0, 0, 0, 0], b'C'),
    ([L, S, S, 0, 0, 0, 0, 0], b'D'),
    ([S, 0, 0, 0, 0, 0, 0, 0], b'E'),
    ([S, S, L, S, 0, 0, 0, 0], b'F'),
    ([L, L, S, 0, 0, 0, 0, 0], b'G'),
    ([S, S, S, S, 0, 0, 0, 0], b'H'),
    ([S, S, 0, 0, 0, 0, 0, 0], b'I'),
    ([S, L, L, L, 0, 0, 0, 0], b'J'),
    ([L, S, L, 0, 0, 0, 0, 0], b'K'),
    ([S, L, S, S, 0, 0, 0, 0], b'L'),
    ([L, L, 0, 0, 0, 0, 0, 0], b'M'),
    ([L, S, 0, 0, 0, 0, 0, 0], b'N'),
    ([L, L, L, 0, 0, 0, 0, 0], b'O'),
    ([S, L, L, S, 0, 0, 0, 0], b'P'),
    ([L, L, S, L, 0, 0, 0, 0], b'Q'),
    ([S, L, S, 0, 0, 0, 0, 0], b'R'),
    ([S, S, S, 0, 0, 0, 0, 0], b'S'),
    ([L, 0, 0, 0, 0, 0, 0, 0], b'T'),
    ([S, S, L, 0, 0, 0, 0, 0], b'U'),
    ([S, S, S, L, 0, 0, 0, 0], b'V'),
    ([S, L, L, 0, 0, 0, 0, 0], b'W'),
    ([L, S, S, L, 0, 0, 0, 0], b'X'),
    ([L, S, L, L, 0, 0, 0, 0], b'Y'),
    ([L, L, S, S, 0, 0, 0, 0], b'Z'),
    ([L, L, L, L, L, 0, 0, 0], b'0'),
    ([S, L, L, L, L, 0, 0, 0], b'1'),
    ([S, S, L, L, L, 0, 0, 0], b'2'),
    ([S, S, S, L, L, 0, 0, 0], b'3'),
    ([S, S, S, S, L, 0, 0, 0], b'4'),
    ([S, S, S, S, S, 0, 0, 0], b'5'),
    ([L, S, S, S, S, 0, 0, 0], b'6'),
    ([L, L, S, S, S, 0, 0, 0], b'7'),
    ([L, L, L, S, S, 0, 0, 0], b'8'),
    ([L, L, L, L, S, 0, 0, 0], b'9'),
];

/// Resolves an accumulated pulse buffer to its plain character.
///
/// Lookup is exact whole-buffer equality, one all-lanes register compare per
/// table entry; the zero padding takes part on both sides, so a prefix of a
/// longer pattern never matches it.
fn character_for(code: Symbol) -> u8 {
    for (pattern, character) in &SYMBOL_TABLE {
        if code == Symbol::from_lanes(*pattern) {
            return *character;
        }
    }

    UNRECOGNIZED
}

/// Pulse pattern of one plain character. Letters fold to upper case;
/// a space becomes the word-separator buffer; anything else becomes the
/// empty buffer, which later decodes to the unrecognized marker.
fn symbol_for(character: u8) -> Symbol {
    let folded = character.to_ascii_uppercase();

    if folded == b' ' {
        return Symbol::from_lanes(WORD_SEP_PATTERN);
    }

    for (pattern, table_character) in &SYMBOL_TABLE {
        if *table_character == folded {
            return Symbol::from_lanes(*pattern);
        }
    }

    Symbol::from_lanes(NULL_PATTERN)
}

/// Decodes a Morse token stream into plain text.
///
/// Separators resolve the buffer accumulated so far, even an empty one: a
/// separator with no preceding pulses contributes the unrecognized marker,
/// which the writers later drop. A word separator additionally emits a
/// literal space. A non-empty buffer still pending at end of input is
/// resolved as if a final character separator were present.
pub fn decode(tokens: &[u8]) -> String {
    let mut code = Symbol::default();
    let mut code_index = 0usize;
    let mut plain = String::new();

    let flush = |code: &mut Symbol, code_index: &mut usize, plain: &mut String| {
        plain.push(char::from(character_for(*code)));
        *code = Symbol::default();
        *code_index = 0;
    };

    for &token in tokens {
        match u16::from(token) {
            CHAR_SEP => flush(&mut code, &mut code_index, &mut plain),
            WORD_SEP => {
                flush(&mut code, &mut code_index, &mut plain);
                plain.push(' ');
            }
            _ => {
                // Runs of pulses longer than the lane count cannot match any
                // table entry; keep the first lanes and let the lookup fail.
                if code_index < Symbol::lane_count() {
                    code = code.insert(code_index, u16::from(token));
                }
                code_index += 1;
            }
        }
    }

    if code_index > 0 {
        flush(&mut code, &mut code_index, &mut plain);
    }

    plain
}

/// Encodes plain text into a sequence of symbol buffers.
///
/// Every character's buffer is followed by a character-separator buffer,
/// except the word separator, which stands on its own.
pub fn encode(text: &[u8]) -> Vec<Symbol> {
    let word_sep = Symbol::from_lanes(WORD_SEP_PATTERN);
    let char_sep = Symbol::from_lanes(CHAR_SEP_PATTERN);

    let mut symbols = Vec::with_capacity(text.len() * 2);

    for &character in text {
        let symbol = symbol_for(character);
        symbols.push(symbol);

        if symbol != word_sep {
            symbols.push(char_sep);
        }
    }

    symbols
}

/// Flattens encoded symbol buffers back into the byte token stream,
/// skipping the zero-padding lanes.
pub fn tokens_of(symbols: &[Symbol]) -> Vec<u8> {
    let mut tokens = Vec::with_capacity(symbols.len() * Symbol::lane_count());

    for symbol in symbols {
        for &lane in symbol.to_lanes().as_ref() {
            if lane != 0 {
                tokens.push(lane as u8);
            }
        }
    }

    tokens
}

/// Removes the unrecognized markers; what remains is printable output.
pub fn strip_unrecognized(plain: &str) -> String {
    plain
        .chars()
        .filter(|&c| c != char::from(UNRECOGNIZED))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_short_long_pairs() {
        assert_eq!(decode(b"*-&-*&"), "AN");
        // long-short-long is K, not a variant of N.
        assert_eq!(decode(b"*-&-*-&"), "AK");
    }

    #[test]
    fn test_decode_word_separator_emits_space() {
        // The empty buffer at `|` resolves to the marker, stripped on write.
        let plain = decode(b"****&**&|****&**&");
        assert_eq!(strip_unrecognized(&plain), "HI HI");
    }

    #[test]
    fn test_decode_flushes_pending_buffer_at_end_of_input() {
        assert_eq!(decode(b"*-"), "A");
    }

    #[test]
    fn test_decode_lone_separator_yields_filtered_marker() {
        let plain = decode(b"&");
        assert_eq!(plain, "#");
        assert_eq!(strip_unrecognized(&plain), "");
    }

    #[test]
    fn test_lookup_is_not_prefix_matching() {
        // "*" is E even though it prefixes A, J, 1 and others.
        assert_eq!(decode(b"*&"), "E");
        assert_eq!(decode(b"****&"), "H");
        assert_eq!(decode(b"*****&"), "5");
    }

    #[test]
    fn test_digits_eight_and_nine_are_distinct() {
        assert_eq!(decode(b"---**&"), "8");
        assert_eq!(decode(b"----*&"), "9");
        assert_eq!(decode(b"-----&"), "0");
    }

    #[test]
    fn test_encode_case_folds() {
        assert_eq!(tokens_of(&encode(b"sos")), tokens_of(&encode(b"SOS")));
    }

    #[test]
    fn test_encode_separates_characters_but_not_words() {
        assert_eq!(tokens_of(&encode(b"HI HI")), b"****&**&|****&**&");
    }

    #[test]
    fn test_round_trip_plain_text() {
        let text = b"THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG 0123456789";

        let tokens = tokens_of(&encode(text));
        let decoded = strip_unrecognized(&decode(&tokens));

        assert_eq!(decoded.as_bytes(), text);
    }

    #[test]
    fn test_round_trip_token_stream() {
        let tokens: &[u8] = b"*-&-***&&**-*&";

        let plain = strip_unrecognized(&decode(tokens));
        assert_eq!(plain, "ABF");

        // The empty buffer between the doubled separators dropped out, so
        // the re-encoding is the canonical form of the same message.
        assert_eq!(tokens_of(&encode(plain.as_bytes())), b"*-&-***&**-*&");
    }

    #[test]
    fn test_unknown_character_encodes_to_filtered_marker() {
        let tokens = tokens_of(&encode(b"A?B"));
        // '?' contributes only its character separator.
        assert_eq!(tokens, b"*-&&-***&");

        let plain = decode(&tokens);
        assert_eq!(plain, "A#B");
        assert_eq!(strip_unrecognized(&plain), "AB");
    }
}
