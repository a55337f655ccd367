// Phoneme matching against the bundled reference kana table.

use libarpabet::{
    load_kana_table, load_kana_table_file, reference_kana_table, try_match, try_match_tokens,
    ArpabetError, KanaTable, Symbol, REFERENCE_KANA_TABLE,
};

fn table() -> KanaTable {
    reference_kana_table().unwrap()
}

fn kana(tokens: &str) -> Option<String> {
    try_match_tokens(&table(), tokens.split_whitespace()).unwrap()
}

#[test]
fn cat() {
    assert_eq!(kana("K AE1 T").as_deref(), Some("カト"));
    assert_eq!(
        try_match(&table(), &[Symbol::K, Symbol::AE, Symbol::T]).unwrap().as_deref(),
        Some("カト")
    );
}

#[test]
fn onsets_and_long_vowels() {
    assert_eq!(kana("G R IY1 N").as_deref(), Some("グリーン"));
    assert_eq!(kana("S T AA1 R").as_deref(), Some("スター"));
    assert_eq!(kana("K AH0 M P Y UW1 T ER0").as_deref(), Some("カムピューター"));
    assert_eq!(kana("K AE1 T S").as_deref(), Some("カツ"));
    assert_eq!(kana("K W IH1 K").as_deref(), Some("クィク"));
}

#[test]
fn empty_sequence() {
    assert_eq!(kana("").as_deref(), Some(""));
}

#[test]
fn every_single_symbol_is_covered() {
    let t = table();
    for s in Symbol::ALL {
        assert!(try_match(&t, &[s]).unwrap().is_some(), "{s}");
    }
}

#[test]
fn file_loader_matches_bundled_source() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/arpabet-kana.csv");
    assert_eq!(load_kana_table_file(path).unwrap(), table());
}

#[test]
fn authoring_order_does_not_matter() {
    let lines: Vec<&str> = REFERENCE_KANA_TABLE.lines().collect();

    // data rows reversed
    let mut reversed_rows = vec![lines[0]];
    reversed_rows.extend(lines[1..].iter().rev());
    let reversed_rows = reversed_rows.join("\n");

    // value columns reversed in every row
    let reversed_columns = lines
        .iter()
        .map(|line| {
            let cells: Vec<&str> = line.split(',').collect();
            let mut out = cells[..2].to_vec();
            out.extend(cells[2..].iter().rev());
            out.join(",")
        })
        .collect::<Vec<_>>()
        .join("\n");

    let base = table();
    for source in [reversed_rows, reversed_columns] {
        let other = load_kana_table(source.as_bytes()).unwrap();
        assert_eq!(other, base);
        assert_eq!(
            try_match_tokens(&other, ["HH", "AH0", "L", "OW1"]).unwrap().as_deref(),
            Some("ハロー")
        );
    }
}

#[test]
fn unmapped_cell_is_fatal() {
    let t = load_kana_table(",,,AA,AE\n,,,ア,ア\nK,,ク,,カ\n".as_bytes()).unwrap();
    assert_eq!(try_match(&t, &[Symbol::K, Symbol::AE]).unwrap().as_deref(), Some("カ"));
    let err = try_match(&t, &[Symbol::K, Symbol::AA]).unwrap_err();
    assert!(matches!(err, ArpabetError::UnmappedCombination(ref key) if key == &[Symbol::K, Symbol::AA]));
    assert_eq!(err.to_string(), "no kana for ARPAbet combination: K AA");
}

#[test]
fn no_match_is_a_plain_miss() {
    let t = load_kana_table(",,AE\nK,,カ\n".as_bytes()).unwrap();
    assert_eq!(try_match(&t, &[Symbol::K, Symbol::AE, Symbol::T]).unwrap(), None);
}
