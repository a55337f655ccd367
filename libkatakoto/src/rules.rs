// libkatakoto/src/rules.rs
//
// Built-in rule sets for the two rewrite passes.
//
// Pass 1 (speaking rules) turns English spelling clusters into a rough
// phonetic romanization: `-` marks a long vowel, `ッ` a geminate stop, and a
// few suffixes go straight to katakana.
//
// Pass 2 (kana rules) turns that romanization into katakana: every consonant
// letter alone, and consonant + vowel (including `y`) syllables.
//
// The rules are authored as unordered maps; ordering is entirely the job of
// `RuleTable::build`. Tables are built once and shared.

use std::sync::Arc;

use katakoto_core::RuleTable;
use once_cell::sync::Lazy;
use phf::phf_map;

/// English spelling -> phonetic romanization.
pub static SPEAKING_RULES: phf::Map<&'static str, &'static str> = phf_map! {
    "u" => "a",
    "w" => "u",
    "x" => "ks",

    // vowel digraphs
    "ai" => "ei",
    "ay" => "ei",
    "ea" => "i-",
    "ee" => "i-",
    "ey" => "i-",
    "ie" => "ai",
    "oa" => "o-",
    "ue" => "u-",
    "ui" => "u-",

    // consonant digraphs
    "sh" => "s",
    "ch" => "ch",
    "ph" => "f",
    "wh" => "f",
    "th" => "s",
    "ck" => "ッk",
    "ng" => "ng",
    "gh" => "",

    // doubled consonants
    "gg" => "ッg",
    "ll" => "r",
    "mm" => "m",
    "rr" => "r",
    "ss" => "ッs",

    "oo" => "u-",
    "ou" => "au",
    "ow" => "au",
    "oi" => "oi",
    "oy" => "oi",
    "au" => "ou",
    "aw" => "ou",

    // r-colored vowels
    "ar" => "a-",
    "er" => "a-",
    "ir" => "a-",
    "or" => "o-",
    "air" => "ea",
    "ear" => "ia",
    "wor" => "wa-",

    "tch" => "ッch",

    "ion" => "iョン",
    "tion" => "ション",
};

/// Phonetic romanization -> katakana.
pub static KANA_RULES: phf::Map<&'static str, &'static str> = phf_map! {
    "a" => "ア", "b" => "ブ", "c" => "ク", "d" => "ド", "e" => "エ",
    "f" => "フ", "g" => "グ", "h" => "ハ", "i" => "イ", "j" => "ジ",
    "k" => "ク", "l" => "ル", "m" => "ム", "n" => "ン", "o" => "オ",
    "p" => "プ", "q" => "ク", "r" => "ル", "s" => "ス", "t" => "ト",
    "u" => "ウ", "v" => "ヴ", "w" => "ウ", "x" => "クス", "y" => "イ",
    "z" => "ズ", "-" => "ー",

    "ba" => "バ", "bi" => "ビ", "bu" => "ブ", "be" => "ベ", "bo" => "ボ", "by" => "ビィ",
    "ca" => "キャ", "ci" => "キ", "cu" => "ク", "ce" => "セ", "co" => "コ",
    "cha" => "チャ", "chi" => "チ", "chu" => "チュ", "che" => "チェ", "cho" => "チョ", "chy" => "チ",
    "da" => "ダ", "di" => "ディ", "du" => "ドゥ", "de" => "デ", "do" => "ド", "dy" => "ディ",
    "fa" => "ファ", "fi" => "フィ", "fu" => "フ", "fe" => "フェ", "fo" => "フォ", "fy" => "フィ",
    "ga" => "ガ", "gi" => "ギ", "gu" => "グ", "ge" => "ゲ", "go" => "ゴ", "gy" => "ギィ",
    "ha" => "ハ", "hi" => "ヒ", "hu" => "フ", "he" => "ヘ", "ho" => "ホ", "hy" => "ヒィ",
    "ja" => "ジャ", "ji" => "ジ", "ju" => "ジュ", "je" => "ジェ", "jo" => "ジョ", "jy" => "ジィ",
    "ka" => "カ", "ki" => "キ", "ku" => "ク", "ke" => "ケ", "ko" => "コ", "ky" => "キィ",
    "la" => "ラ", "li" => "リ", "lu" => "ル", "le" => "レ", "lo" => "ロ", "ly" => "リィ",
    "ma" => "マ", "mi" => "ミ", "mu" => "ム", "me" => "メ", "mo" => "モ", "my" => "ミィ",
    "na" => "ナ", "ni" => "ニ", "nu" => "ヌ", "ne" => "ネ", "no" => "ノ", "ny" => "ニィ",
    "pa" => "パ", "pi" => "ピ", "pu" => "プ", "pe" => "ペ", "po" => "ポ", "py" => "ピィ",
    "qa" => "カ", "qi" => "キ", "qu" => "ク", "qe" => "ケ", "qo" => "コ", "qy" => "キィ",
    "ra" => "ラ", "ri" => "リ", "ru" => "ル", "re" => "レ", "ro" => "ロ", "ry" => "リィ",
    "sa" => "サ", "si" => "シ", "su" => "ス", "se" => "セ", "so" => "ソ", "sy" => "シィ",
    "ta" => "タ", "ti" => "ティ", "tu" => "トゥ", "te" => "テ", "to" => "ト", "ty" => "ティ",
    "va" => "バ", "vi" => "ビ", "vu" => "ブ", "ve" => "ベ", "vo" => "ボ", "vy" => "ビィ",
    "za" => "ザ", "zi" => "ジ", "zu" => "ズ", "ze" => "ゼ", "zo" => "ゾ", "zy" => "ジィ",
};

/// Character rule table built from a static string map.
pub fn table_from_map(map: &phf::Map<&'static str, &'static str>) -> RuleTable<char, String> {
    RuleTable::from_strs(map.entries().map(|(k, v)| (*k, *v)))
}

static SPEAKING_TABLE: Lazy<Arc<RuleTable<char, String>>> =
    Lazy::new(|| Arc::new(table_from_map(&SPEAKING_RULES)));

static KANA_TABLE: Lazy<Arc<RuleTable<char, String>>> =
    Lazy::new(|| Arc::new(table_from_map(&KANA_RULES)));

/// Shared speaking-rule table, built on first use.
pub fn speaking_table() -> Arc<RuleTable<char, String>> {
    Arc::clone(&SPEAKING_TABLE)
}

/// Shared kana-rule table, built on first use.
pub fn kana_table() -> Arc<RuleTable<char, String>> {
    Arc::clone(&KANA_TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use katakoto_core::rewrite_str;

    #[test]
    fn tables_hold_every_rule() {
        assert_eq!(speaking_table().len(), SPEAKING_RULES.len());
        assert_eq!(kana_table().len(), KANA_RULES.len());
        assert_eq!(speaking_table().max_key_len(), 4);
        assert_eq!(kana_table().max_key_len(), 3);
    }

    #[test]
    fn tables_are_shared() {
        assert!(Arc::ptr_eq(&speaking_table(), &speaking_table()));
    }

    #[test]
    fn speaking_pass() {
        let t = speaking_table();
        assert_eq!(rewrite_str(&t, "green"), "gri-n");
        assert_eq!(rewrite_str(&t, "star"), "sta-");
        assert_eq!(rewrite_str(&t, "check"), "cheッk");
        assert_eq!(rewrite_str(&t, "nation"), "naション");
        assert_eq!(rewrite_str(&t, "night"), "nit");
    }

    #[test]
    fn kana_pass() {
        let t = kana_table();
        assert_eq!(rewrite_str(&t, "gri-n"), "グリーン");
        assert_eq!(rewrite_str(&t, "sta-"), "スター");
        assert_eq!(rewrite_str(&t, "cheッk"), "チェック");
    }

    #[test]
    fn every_kana_value_is_katakana() {
        for (_, v) in KANA_RULES.entries() {
            assert!(v.chars().all(|c| ('\u{30A0}'..='\u{30FF}').contains(&c)), "{v}");
        }
    }
}
