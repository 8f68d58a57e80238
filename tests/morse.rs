//! End-to-end codec behavior, including the file plumbing.

use std::path::Path;

use lanewise::morse::{self, io};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789 ";

#[test]
fn test_decode_character_separated_sequence() {
    assert_eq!(morse::decode(b"*-&-*&"), "AN");
    assert_eq!(morse::decode(b"*-&-*-&"), "AK");
}

#[test]
fn test_decode_word_separated_sequence() {
    let plain = morse::strip_unrecognized(&morse::decode(b"****&**&|****&**&"));
    assert_eq!(plain, "HI HI");
}

#[test]
fn test_plain_text_round_trips_through_tokens_upper_cased() {
    let mut rng = StdRng::seed_from_u64(0x3035);

    for _ in 0..50 {
        let len = rng.random_range(0..120);
        let text: Vec<u8> = (0..len)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
            .collect();

        let tokens = morse::tokens_of(&morse::encode(&text));
        let decoded = morse::strip_unrecognized(&morse::decode(&tokens));

        assert_eq!(decoded.into_bytes(), text.to_ascii_uppercase());
    }
}

#[test]
fn test_well_formed_tokens_round_trip_through_plain_text() {
    // Canonical encoder output: every character closed by `&`, words split
    // by a bare `|`.
    let tokens: &[u8] = b"*-*-*-&--*--&|***---***&";

    let plain = morse::strip_unrecognized(&morse::decode(tokens));
    let reencoded = morse::tokens_of(&morse::encode(plain.as_bytes()));

    // The two unknown sequences dropped out; everything recognized
    // round-trips in place.
    assert_eq!(plain, " ");
    assert_eq!(reencoded, b"|");

    let tokens: &[u8] = b"***&---&***&|-&*&***&-&";
    let plain = morse::strip_unrecognized(&morse::decode(tokens));
    assert_eq!(plain, "SOS TEST");
    assert_eq!(morse::tokens_of(&morse::encode(plain.as_bytes())), tokens);
}

#[test]
fn test_every_symbol_round_trips() {
    for &character in ALPHABET.iter().filter(|&&c| c != b' ') {
        let tokens = morse::tokens_of(&morse::encode(&[character]));
        let decoded = morse::strip_unrecognized(&morse::decode(&tokens));

        assert_eq!(
            decoded.into_bytes(),
            vec![character.to_ascii_uppercase()],
            "symbol {} failed",
            char::from(character)
        );
    }
}

#[test]
fn test_missing_file_logs_and_returns_empty() {
    let missing = Path::new("/definitely/not/here.morse");

    assert_eq!(io::decode_file(missing), "");
    assert!(io::encode_file(missing).is_empty());
}

#[test]
fn test_files_round_trip_through_the_io_layer() {
    let dir = std::env::temp_dir();
    let plain_path = dir.join("lanewise_morse_plain.txt");
    let token_path = dir.join("lanewise_morse_tokens.txt");
    let decoded_path = dir.join("lanewise_morse_decoded.txt");

    std::fs::write(&plain_path, "granite 42\n").unwrap();

    let symbols = io::encode_file(&plain_path);
    io::write_symbols_file(&token_path, &symbols);

    let plain = io::decode_file(&token_path);
    io::write_plain_text_file(&decoded_path, &plain);

    let decoded = std::fs::read_to_string(&decoded_path).unwrap();
    assert_eq!(decoded, "GRANITE 42");

    for path in [&plain_path, &token_path, &decoded_path] {
        let _ = std::fs::remove_file(path);
    }
}
