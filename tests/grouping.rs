//! Run grouping of dictionary entries.

use proptest::prelude::*;

use lexicard::{Bag, DictionaryEntry, TermKey, group};

fn entry(key: &TermKey, dictionary: &str) -> DictionaryEntry {
    DictionaryEntry::new(key.clone(), dictionary)
}

fn dictionaries(bag: &Bag<TermKey, DictionaryEntry>) -> Vec<&str> {
    bag.members().iter().map(|e| e.dictionary.as_str()).collect()
}

#[test]
fn empty_list() {
    assert!(group(Vec::<DictionaryEntry>::new()).is_empty());
}

#[test]
fn equal_keys_form_one_bag_in_order() {
    let key = TermKey::new("食べる").with_reading("たべる");
    let bags = group(vec![entry(&key, "JMdict"), entry(&key, "Daijirin")]);

    assert_eq!(bags.len(), 1);
    assert_eq!(bags[0].key(), &key);
    assert_eq!(dictionaries(&bags[0]), ["JMdict", "Daijirin"]);
}

#[test]
fn interleaved_keys_are_not_coalesced() {
    let a = TermKey::new("上手");
    let b = TermKey::new("下手");
    let bags = group(vec![entry(&a, "1"), entry(&b, "2"), entry(&a, "3")]);

    assert_eq!(bags.len(), 3);
    assert!(bags.iter().all(|bag| bag.len() == 1));
    assert_eq!(dictionaries(&bags[2]), ["3"]);
}

#[test]
fn every_key_field_splits() {
    let base = TermKey::new("生")
        .with_reading("なま")
        .with_pitch_accent("なま", vec![1])
        .with_inflection(["-te"]);

    let variants = [
        TermKey {
            expression: "正".into(),
            ..base.clone()
        },
        TermKey {
            readings: vec!["せい".into()],
            ..base.clone()
        },
        TermKey {
            pitch_accents: base
                .pitch_accents
                .iter()
                .cloned()
                .map(|mut p| {
                    p.downsteps.push(2);
                    p
                })
                .collect(),
            ..base.clone()
        },
        TermKey {
            inflections: vec![vec!["-te".into(), "past".into()]],
            ..base.clone()
        },
    ];

    for variant in variants {
        let bags = group(vec![entry(&base, "a"), entry(&variant, "b")]);
        assert_eq!(bags.len(), 2, "{variant:?}");
    }
}

#[test]
fn payload_fields_do_not_split() {
    let key = TermKey::new("猫").with_reading("ねこ");
    let bags = group(vec![
        entry(&key, "JMdict").with_definition("cat").with_tag("n"),
        entry(&key, "Other").with_definition("feline"),
    ]);
    assert_eq!(bags.len(), 1);
    assert_eq!(bags[0].len(), 2);
}

#[test]
fn into_members_keeps_order() {
    let key = TermKey::new("x");
    let bags = group(vec![entry(&key, "1"), entry(&key, "2"), entry(&key, "3")]);
    let names: Vec<_> = bags
        .into_iter()
        .flat_map(Bag::into_members)
        .map(|e| e.dictionary)
        .collect();
    assert_eq!(names, ["1", "2", "3"]);
}

mod properties {
    use super::*;

    /// A small key space so adjacent equal keys are common.
    fn keys() -> impl Strategy<Value = Vec<TermKey>> {
        prop::collection::vec(
            (0u8..3, prop::option::of(0u8..2)).prop_map(|(expr, reading)| {
                let key = TermKey::new(format!("w{expr}"));
                match reading {
                    Some(r) => key.with_reading(format!("r{r}")),
                    None => key,
                }
            }),
            0..40,
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn flattening_restores_input(keys in keys()) {
            let entries: Vec<_> = keys
                .iter()
                .enumerate()
                .map(|(i, k)| entry(k, &i.to_string()))
                .collect();
            let flattened: Vec<_> = group(entries.clone())
                .into_iter()
                .flat_map(Bag::into_members)
                .collect();
            prop_assert_eq!(flattened, entries);
        }

        #[test]
        fn bags_are_maximal_runs(keys in keys()) {
            let entries: Vec<_> = keys.iter().map(|k| entry(k, "d")).collect();
            let bags = group(entries);

            for bag in &bags {
                prop_assert!(bag.len() > 0);
                prop_assert!(bag.members().iter().all(|e| &e.key == bag.key()));
            }
            for pair in bags.windows(2) {
                prop_assert_ne!(pair[0].key(), pair[1].key());
            }

            let boundaries = keys.windows(2).filter(|w| w[0] != w[1]).count();
            let expected = if keys.is_empty() { 0 } else { boundaries + 1 };
            prop_assert_eq!(bags.len(), expected);
        }
    }
}

#[cfg(feature = "serde")]
mod bag_json {
    use super::*;

    #[test]
    fn bag_serializes_key_and_members() {
        let key = TermKey::new("犬").with_reading("いぬ");
        let bags = group(vec![entry(&key, "JMdict"), entry(&key, "Daijirin")]);
        let json = serde_json::to_value(&bags[0]).unwrap();

        assert_eq!(json["key"]["expression"], "犬");
        assert_eq!(json["members"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["members"][1]["dictionary"], "Daijirin");
    }
}
