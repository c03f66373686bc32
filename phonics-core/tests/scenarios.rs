//! End-to-end splits of known words

use phonics_core::{generate_phonics_split, Segmenter};

fn check(cases: &[(&str, &str)]) {
    let segmenter = Segmenter::new();
    for (word, expected) in cases {
        assert_eq!(
            segmenter.split(word),
            *expected,
            "unexpected split for {word:?}"
        );
    }
}

#[test]
fn test_reference_words() {
    check(&[
        ("rabbit", "rab-bit"),
        ("apple", "ap-ple"),
        ("cake", "cake"),
        ("little", "lit-tle"),
        ("market", "mar-ket"),
        ("disappear", "dis-appear"),
        ("street", "str-eet"),
    ]);
}

#[test]
fn test_consonant_boundaries() {
    check(&[
        ("tiger", "ti-ger"),
        ("happy", "hap-py"),
        ("ago", "a-go"),
        ("banana", "ba-na-na"),
        ("watermelon", "wa-ter-me-lon"),
        ("computer", "com-pu-ter"),
        ("different", "dif-fe-rent"),
    ]);
}

#[test]
fn test_units_kept_whole() {
    check(&[
        ("paint", "paint"),
        ("knight", "knight"),
        ("beautiful", "beau-ti-ful"),
        ("elephant", "e-le-phant"),
        ("teacher", "tea-cher"),
        ("fishing", "fi-shing"),
        ("quickly", "quick-ly"),
    ]);
}

#[test]
fn test_extraction_stages() {
    check(&[
        ("nation", "na-tion"),
        ("capable", "ca-pa-ble"),
        ("celebrate", "ce-leb-rate"),
        ("mistake", "mis-take"),
        ("strike", "strike"),
        ("underline", "under-line"),
        ("unhappy", "un-happy"),
    ]);
}

#[test]
fn test_magic_e_keeps_consonant_units() {
    check(&[
        ("sunshine", "sun-shine"),
        ("moonshine", "moon-shine"),
        ("machine", "ma-chine"),
        ("seashore", "sea-shore"),
        ("headphone", "head-phone"),
        ("telephone", "tele-phone"),
        ("microphone", "mic-ro-phone"),
        ("xylophone", "xy-lo-phone"),
        ("awhile", "a-while"),
        ("nowhere", "no-where"),
    ]);
}

#[test]
fn test_no_joint_inside_consonant_units() {
    const UNITS: &[&str] = &[
        "tch", "squ", "spr", "str", "scr", "shr", "ch", "sh", "th", "wh", "ph", "gh",
    ];
    let segmenter = Segmenter::new();

    for word in [
        "sunshine", "machine", "awhile", "xylophone", "moonshine", "headphone", "telephone",
        "microphone", "seashore", "describe", "enshrine", "somewhere",
    ] {
        let split = segmenter.split(word);
        assert_eq!(split.replace('-', ""), word);

        let mut joint = 0;
        let segments: Vec<&str> = split.split('-').collect();
        for segment in &segments[..segments.len() - 1] {
            joint += segment.len();
            for unit in UNITS {
                let first = joint.saturating_sub(unit.len() - 1);
                for start in first..joint {
                    assert_ne!(
                        word.get(start..start + unit.len()),
                        Some(*unit),
                        "{word:?} -> {split:?} breaks {unit:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_post_processing() {
    check(&[
        ("playing", "play-ing"),
        ("played", "play-ed"),
        ("slowness", "slow-ness"),
        ("climb", "climb"),
        ("football", "foot-ball"),
    ]);
}

#[test]
fn test_builtin_exceptions() {
    check(&[
        ("reenter", "re-enter"),
        ("create", "cre-a-te"),
        ("zoology", "zo-o-lo-gy"),
        ("ruin", "ru-in"),
        // a strong prefix still comes off in front of a digraph or trigraph
        ("dishonest", "dis-honest"),
        ("mishap", "mis-hap"),
        ("distrust", "dis-trust"),
    ]);
}

#[test]
fn test_original_casing_is_kept() {
    assert_eq!(generate_phonics_split("Apple"), "Ap-ple");
    assert_eq!(generate_phonics_split("STREET"), "STR-EET");
    assert_eq!(generate_phonics_split("WaterMelon"), "Wa-ter-Me-lon");
    assert_eq!(generate_phonics_split("Cake"), "Cake");
}

#[test]
fn test_degenerate_input() {
    assert_eq!(generate_phonics_split(""), "");
    assert_eq!(generate_phonics_split("a"), "a");
    assert_eq!(generate_phonics_split("é"), "é");
    assert_eq!(generate_phonics_split("zz"), "zz");
}
