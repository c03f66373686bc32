//! English phonics catalogs
//!
//! Every list is lowercase and sorted longest-first; `tests` checks both.

use super::catalog::{Catalog, CatalogKind};

pub static VOWEL_TEAMS: Catalog = Catalog::new(
    "vowel-teams",
    CatalogKind::VowelTeam,
    &[
        "ough", //
        "igh", //
        "ai", "ay", "ea", "ee", "ie", "oa", "ow", "oo", "oi", "oy", "ou", "au", "aw", "ue", "ew",
        "ei", "ey", "ui",
    ],
);

pub static R_CONTROLLED_TRIGRAMS: Catalog = Catalog::new(
    "r-controlled-trigrams",
    CatalogKind::RControlledTrigram,
    &["air", "are", "ear", "ere", "eer", "ire", "ore", "oar"],
);

pub static R_CONTROLLED_DIGRAMS: Catalog = Catalog::new(
    "r-controlled-digrams",
    CatalogKind::RControlledDigram,
    &["ar", "er", "ir", "or", "ur"],
);

pub static CONSONANT_DIGRAPHS: Catalog = Catalog::new(
    "consonant-digraphs",
    CatalogKind::ConsonantDigraph,
    &["ch", "sh", "th", "wh", "ph", "gh"],
);

pub static CONSONANT_TRIGRAPHS: Catalog = Catalog::new(
    "consonant-trigraphs",
    CatalogKind::ConsonantTrigraph,
    &["tch", "squ", "spr", "str", "scr", "shr"],
);

pub static WORD_FAMILIES: Catalog = Catalog::new(
    "word-families",
    CatalogKind::WordFamily,
    &["an", "en", "in", "on", "un"],
);

pub static SPECIAL_INITIALS: Catalog = Catalog::new(
    "special-initials",
    CatalogKind::SpecialInitial,
    &["kn", "wr", "gn", "tw"],
);

pub static FINAL_STABLE: Catalog = Catalog::new(
    "final-stable",
    CatalogKind::FinalStable,
    &[
        "ience", //
        "tion", "sion", "cian", "ture", "sure", "cial", "tial", "ient", //
        "ble", "cle", "dle", "fle", "gle", "kle", "ple", "tle", "zle", "ure", "age", "ous", //
        "le",
    ],
);

pub static STRONG_PREFIXES: Catalog = Catalog::new(
    "strong-prefixes",
    CatalogKind::StrongPrefix,
    &[
        "under", "inter", "super", "trans", //
        "over", "semi", "anti", "auto", //
        "pre", "dis", "mis", "non", "sub", //
        "un", "re", "ex", "im", "in",
    ],
);

pub static PREFIXES: Catalog = Catalog::new(
    "prefixes",
    CatalogKind::Prefix,
    &[
        "under", //
        "tele", "over", "down", "back", //
        "dis", "pre", "sub", "mis", "non", "out", //
        "un", "in", "im", "re", "ex", "en", "em", "up",
    ],
);

pub static SUFFIXES: Catalog = Catalog::new(
    "suffixes",
    CatalogKind::Suffix,
    &[
        "tion", "sion", "ture", "ment", "ness", "less", "able", "ible", "cian", "cial", "tial",
        "ious", "eous", "ical", //
        "ful", "ous", "est", "ing", "age", "ure", "ive", "ity", //
        "al", "en", "er", "ly", "ed", "ic", //
        "y",
    ],
);

pub static BOUNDARY_SUFFIXES: Catalog = Catalog::new(
    "boundary-suffixes",
    CatalogKind::BoundarySuffix,
    &[
        "ness", "ment", "less", "able", "ible", "tion", "sion", "ture", "cian", "cial", "tial",
        "ious", "eous", //
        "ing", "est", "ful", "ous", "age", "ure", //
        "ly", "er", "al", "en", "ed", //
        "y",
    ],
);

/// Known two-part compounds, split into their halves when compound
/// splitting is enabled
pub static COMPOUND_WORDS: &[(&str, &str)] = &[
    ("foot", "ball"),
    ("water", "melon"),
    ("sun", "shine"),
    ("rain", "bow"),
    ("snow", "man"),
    ("birth", "day"),
    ("class", "room"),
    ("play", "ground"),
    ("home", "work"),
    ("book", "store"),
    ("air", "plane"),
    ("fire", "works"),
    ("base", "ball"),
    ("basket", "ball"),
    ("volley", "ball"),
    ("tennis", "ball"),
    ("foot", "print"),
    ("hand", "shake"),
    ("head", "ache"),
    ("tooth", "brush"),
    ("hair", "brush"),
    ("door", "bell"),
    ("mail", "box"),
    ("news", "paper"),
    ("note", "book"),
    ("text", "book"),
    ("work", "book"),
    ("pass", "word"),
    ("user", "name"),
    ("web", "site"),
    ("web", "page"),
    ("down", "load"),
    ("up", "load"),
    ("back", "up"),
    ("log", "in"),
    ("sign", "up"),
    ("check", "out"),
    ("set", "up"),
    ("clean", "up"),
    ("wake", "up"),
    ("get", "up"),
    ("stand", "up"),
    ("sit", "down"),
    ("lie", "down"),
    ("put", "down"),
    ("turn", "off"),
    ("turn", "on"),
    ("switch", "off"),
    ("switch", "on"),
    ("pick", "up"),
    ("give", "up"),
    ("look", "up"),
    ("make", "up"),
    ("break", "fast"),
    ("lunch", "time"),
    ("dinner", "time"),
    ("bed", "time"),
    ("play", "time"),
    ("work", "time"),
    ("school", "time"),
    ("class", "time"),
    ("study", "time"),
    ("read", "ing"),
    ("writ", "ing"),
    ("speak", "ing"),
    ("listen", "ing"),
    ("watch", "ing"),
    ("play", "ing"),
    ("work", "ing"),
    ("learn", "ing"),
    ("teach", "ing"),
    ("help", "ing"),
    ("clean", "ing"),
    ("cook", "ing"),
    ("shop", "ping"),
    ("run", "ning"),
    ("swim", "ming"),
    ("sit", "ting"),
    ("get", "ting"),
    ("put", "ting"),
    ("cut", "ting"),
    ("hit", "ting"),
    ("let", "ting"),
    ("set", "ting"),
    ("wet", "ting"),
    ("pet", "ting"),
    ("bet", "ting"),
    ("net", "ting"),
    ("jet", "ting"),
    ("vet", "ting"),
];
