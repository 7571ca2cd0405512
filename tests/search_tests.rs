use word_chain::{find_chain, is_convertible, CaseFolding, ChainSearch, Progress};

const SMALL_DICT: &[&str] = &[
    "КОТ", "ТОН", "РОТ", "ТОТ", "НОС", "ТОМ", "ТОР", "УХО", "ШОК", "ШОВ", "ШИП", "ШОП", "ТОП", "ШИК",
];

fn chain(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn assert_valid_chain(result: &[String], from: &str, to: &str) {
    assert_eq!(result.first().map(String::as_str), Some(from));
    assert_eq!(result.last().map(String::as_str), Some(to));
    for pair in result.windows(2) {
        assert!(is_convertible(&pair[0], &pair[1]), "{} -> {}", pair[0], pair[1]);
    }
}

#[test]
fn test_chain_from_description() {
    let dict = ["КОТ", "ТОН", "НОТА", "КОТЫ", "РОТ", "РОТА", "ТОТ"];
    let result = find_chain("КОТ", "ТОН", dict);
    assert_eq!(result, chain(&["КОТ", "ТОТ", "ТОН"]));
}

#[test]
fn test_unreachable_target() {
    let result = find_chain("КОТ", "УХО", SMALL_DICT.iter().copied());
    assert!(result.is_empty());
}

#[test]
fn test_long_chain() {
    let result = find_chain("КОТ", "ШИК", SMALL_DICT.iter().copied());
    assert_eq!(result, chain(&["КОТ", "ТОТ", "ТОП", "ШОП", "ШОК", "ШИК"]));
    assert_valid_chain(&result, "КОТ", "ШИК");
}

#[test]
fn test_blank_entry_is_eliminated() {
    let dict = ["КОТ", "УХО", "КОЛ", "", "ОКО"];
    let result = find_chain("КОТ", "УХО", dict);
    assert!(result.is_empty());
}

#[test]
fn test_adjacent_endpoints_skip_search() {
    let empty: [&str; 0] = [];
    assert_eq!(find_chain("COLD", "CORD", empty), chain(&["COLD", "CORD"]));
}

#[test]
fn test_identity_duplicates_word() {
    let empty: [&str; 0] = [];
    assert_eq!(find_chain("КОТ", "КОТ", empty), chain(&["КОТ", "КОТ"]));
    assert_eq!(
        find_chain("КОТ", "КОТ", SMALL_DICT.iter().copied()),
        chain(&["КОТ", "КОТ"])
    );
}

#[test]
fn test_lowercase_input_is_normalized() {
    let dict: Vec<String> = SMALL_DICT.iter().map(|w| w.to_lowercase()).collect();
    let result = find_chain("кот", "шик", dict);
    assert_eq!(result, chain(&["КОТ", "ТОТ", "ТОП", "ШОП", "ШОК", "ШИК"]));
}

#[test]
fn test_ties_broken_by_scan_order() {
    // COLD-CORD-WORD-WARD and COLD-WOLD-WORD-WARD are both shortest
    let result = find_chain("COLD", "WARD", ["CORD", "WOLD", "WORD", "WARD"]);
    assert_eq!(result, chain(&["COLD", "CORD", "WORD", "WARD"]));

    let result = find_chain("COLD", "WARD", ["WOLD", "CORD", "WORD", "WARD"]);
    assert_eq!(result, chain(&["COLD", "WOLD", "WORD", "WARD"]));
}

#[test]
fn test_duplicates_in_dictionary() {
    let dict = ["CORD", "CORD", "COLD", "WARM", "CARD", "CARD", "WARD", "WARD"];
    let result = find_chain("COLD", "WARM", dict);
    assert_eq!(result, chain(&["COLD", "CORD", "CARD", "WARD", "WARM"]));
}

#[test]
fn test_endpoints_of_different_length() {
    let dict = ["CAT", "CATS", "BATS"];
    assert!(find_chain("CAT", "BATS", dict).is_empty());
}

#[test]
fn test_first_step_partitions_dictionary() {
    let mut search = ChainSearch::new("КОТ", "ШИК", SMALL_DICT.iter().copied(), CaseFolding::Unicode);

    assert_eq!(search.step(), Progress::Continue);
    search.check_invariants().unwrap();

    assert!(search.is_classified());
    assert_eq!(search.cursor(), Some(0));
    assert_eq!(search.discovered(), &["РОТ".to_string(), "ТОТ".to_string()]);
    assert_eq!(search.eliminated(), &["ШИК".to_string(), "КОТ".to_string()]);
    assert_eq!(search.undecided().len(), 10);
    assert_eq!(search.current_word(), "РОТ");
}

#[test]
fn test_invariants_hold_after_every_step() {
    let mut search = ChainSearch::new("КОТ", "ШИК", SMALL_DICT.iter().copied(), CaseFolding::Unicode);
    search.check_invariants().unwrap();

    let mut steps = 0;
    let result = loop {
        let progress = search.step();
        search.check_invariants().unwrap();
        steps += 1;
        match progress {
            Progress::Continue => assert!(steps <= SMALL_DICT.len()),
            Progress::Found(chain) => break chain,
            Progress::Exhausted => panic!("expected a chain"),
        }
    };

    assert_eq!(result.len(), 6);
    // finished searches keep reporting their outcome
    assert_eq!(search.step(), Progress::Found(result));
}

#[test]
fn test_exhaustion_visits_every_discovered_word() {
    let mut search = ChainSearch::new("КОТ", "УХО", SMALL_DICT.iter().copied(), CaseFolding::Unicode);
    let mut steps = 0;
    while search.step() == Progress::Continue {
        search.check_invariants().unwrap();
        steps += 1;
    }
    search.check_invariants().unwrap();

    assert_eq!(search.step(), Progress::Exhausted);
    assert_eq!(steps, search.discovered().len());
    assert_eq!(search.cursor(), Some(search.discovered().len()));
}

#[test]
fn test_display_marks_zones() {
    let dict = ["CORD", "CARD", "WARD", "WORD", "WORM", "WARM", "CORM", "WART"];
    let mut search = ChainSearch::new("COLD", "WARM", dict, CaseFolding::Unicode);

    assert_eq!(
        search.to_string(),
        "^,&CORD,CARD,WARD,WORD,WORM,WARM,CORM,WART,#"
    );

    assert_eq!(search.step(), Progress::Continue);
    assert_eq!(
        search.to_string(),
        "^CORD,&CARD,WARD,WORD,WORM,WART,CORM,#WARM"
    );
}

#[test]
fn test_run_matches_stepping() {
    let dict = ["CORD", "CARD", "WARD", "WORD", "WORM", "WARM", "CORM", "WART"];
    let mut search = ChainSearch::new("cold", "warm", dict, CaseFolding::Ascii);
    assert_eq!(search.from_word(), "COLD");
    assert_eq!(search.to_word(), "WARM");

    let result = search.run();
    assert_eq!(result, chain(&["COLD", "CORD", "CARD", "WARD", "WARM"]));
}
