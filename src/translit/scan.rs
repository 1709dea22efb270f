use super::tables::Tables;

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Transliterate everything the tables cover, Arabizi digits and plain
/// Latin letters alike.
///
/// Input is folded to lowercase first. At each position the rules are
/// tried in order: digraph, doubled vowel, single character, pass-through.
/// The first hit consumes one or two characters and the cursor moves on.
pub fn transliterate_full(tables: &Tables, input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let lowered = input.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();
    let mut out = String::with_capacity(input.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        if i + 1 < chars.len() {
            // Digraphs take precedence over every single-character rule.
            let pair: String = chars[i..i + 2].iter().collect();
            if let Some(arabic) = tables.digraph(&pair) {
                out.push_str(arabic);
                i += 2;
                continue;
            }

            // A doubled long vowel collapses to one Arabic letter and
            // outranks the word-initial hamza rule below.
            if chars[i] == chars[i + 1] && is_vowel(chars[i]) {
                if let Some(arabic) = tables.single(chars[i]) {
                    out.push_str(arabic);
                    i += 2;
                    continue;
                }
            }
        }

        let c = chars[i];
        match tables.single(c) {
            Some(arabic) if !is_vowel(c) => out.push_str(arabic),
            Some(arabic) => {
                if i == 0 {
                    // Position 0 of the whole input, not of each word: a
                    // vowel right after a space takes the non-initial
                    // rules below instead.
                    match c {
                        'a' | 'u' => out.push_str("أ"),
                        'i' => out.push_str("إ"),
                        _ => out.push_str(arabic),
                    }
                } else if matches!(c, 'i' | 'e') {
                    out.push_str(arabic);
                }
                // Non-initial a, o and u are elided short vowels: Arabic
                // orthography leaves them unwritten.
            }
            None => out.push(c),
        }
        i += 1;
    }

    out
}

/// Transliterate only digraph sequences and Arabizi digits, leaving plain
/// Latin letters untouched so mixed-language prose stays readable.
pub fn transliterate_partial(tables: &Tables, input: &str) -> String {
    let lowered = input.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();
    let mut out = String::with_capacity(input.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        if i + 1 < chars.len() {
            let pair: String = chars[i..i + 2].iter().collect();
            if let Some(arabic) = tables.digraph(&pair) {
                out.push_str(arabic);
                i += 2;
                continue;
            }
        }

        let c = chars[i];
        match tables.single(c) {
            // A lone character converts when it is an Arabizi digit, or
            // when it is itself a digraph key (possible only with custom
            // tables, since every default digraph key is two characters).
            Some(arabic) if c.is_ascii_digit() || tables.is_digraph_key(c) => {
                out.push_str(arabic)
            }
            _ => out.push(c),
        }
        i += 1;
    }

    out
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn full_is_total(input in "\\PC*") {
            let _ = transliterate_full(Tables::global(), &input);
        }

        #[test]
        fn partial_is_total(input in "\\PC*") {
            let _ = transliterate_partial(Tables::global(), &input);
        }

        #[test]
        fn unmapped_chars_pass_through(input in "[014!?,. ]*") {
            prop_assert_eq!(transliterate_full(Tables::global(), &input), input.clone());
            prop_assert_eq!(transliterate_partial(Tables::global(), &input), input);
        }

        #[test]
        fn arabic_input_is_unchanged(input in "[\u{0621}-\u{064A} ]*") {
            prop_assert_eq!(transliterate_full(Tables::global(), &input), input);
        }
    }
}
