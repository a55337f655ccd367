// Translation vectors for the grapheme translator.
//
// Covers the literal cases the speech front end relies on, pass-through of
// everything that is not an English word token, and override precedence.

use libkatakoto::{CachedTranslator, KatakotoTranslator, Translator, WordOverrides};

fn translator() -> KatakotoTranslator {
    KatakotoTranslator::default()
}

#[test]
fn green_and_star() {
    let t = translator();
    assert_eq!(t.translate("Green"), "グリーン");
    assert_eq!(t.translate("Star"), "スター");
}

#[test]
fn common_words() {
    let t = translator();
    assert_eq!(t.translate("check"), "チェック");
    assert_eq!(t.translate("hello"), "ヘロ");
    assert_eq!(t.translate("station"), "スタション");
}

#[test]
fn words_inside_japanese_text() {
    let t = translator();
    assert_eq!(t.translate("今日はGreenです。"), "今日はグリーンです。");
    assert_eq!(t.translate("[Star] 3回"), "[スター] 3回");
}

#[test]
fn non_letters_pass_through() {
    let t = translator();
    for c in ['1', ' ', '!', '-', '\'', 'あ', 'ア', '漢', '\u{3000}', '\n', '😀'] {
        let s = c.to_string();
        assert_eq!(t.translate(&s), s, "char {:?}", c);
    }
}

#[test]
fn all_caps_is_not_a_word() {
    let t = translator();
    assert_eq!(t.translate("NASA"), "NASA");
}

#[test]
fn empty_input() {
    assert_eq!(translator().translate(""), "");
}

#[test]
fn output_keeps_every_non_token_char() {
    let t = translator();
    let inputs = [
        "Hello, world! 123",
        "cat's toy - don't 走る",
        "   ",
        "x",
        "ＡＢＣ full width",
    ];
    for input in inputs {
        let non_token = katakoto_core::tokenize::replace_words(input, |_| String::new())
            .chars()
            .count();
        assert!(t.translate(input).chars().count() >= non_token, "{input}");
    }
}

#[test]
fn override_value_wins() {
    let words: WordOverrides = [("green", "ミドリ"), ("nasa", "ナサ")].into_iter().collect();
    let t = KatakotoTranslator::new(words);
    assert_eq!(t.translate("Green"), "ミドリ");
    assert_eq!(t.translate("green tea"), "ミドリ ティー");
    // all-caps is never tokenized, so the override can't apply
    assert_eq!(t.translate("NASA"), "NASA");
}

#[test]
fn cached_translator_matches_plain() {
    let plain = translator();
    let cached = CachedTranslator::new(translator(), 8);
    for input in ["Green", "Star", "Green", "mixed テキスト here"] {
        assert_eq!(cached.translate(input), plain.translate(input));
    }
    assert_eq!(cached.cache_stats(), (1, 3));
}
