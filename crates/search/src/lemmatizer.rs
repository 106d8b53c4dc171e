//! Dictionary-free English lemmatizer
//!
//! Reduces inflected tokens to a canonical lemma: plural nouns to singular,
//! common irregular verb forms to their base. The rules follow WordNet's
//! noun morphology (the default part of speech), backed by tables of
//! irregular forms.
//!
//! Rules, applied repeatedly until none fires:
//! 1. Irregular table lookup (`children` → `child`, `written` → `write`,
//!    and `-oes` or single `s`/`z` + `es` plurals like `buses` → `bus`)
//! 2. Words ending in `ss`, `us`, `is` are left alone
//! 3. `-ies` / `-ied` → `-y` (`stories` → `story`, `tried` → `try`)
//! 4. `-sses`, `-zzes`, `-ches`, `-shes`, `-xes` drop `es`
//! 5. A trailing single `s` is dropped
//!
//! A candidate shorter than [`MIN_LEMMA_LEN`] chars, or one that is a
//! stopword, is rejected and the current form kept. Every output is a fixed
//! point: `lemmatize(&lemmatize(w)) == lemmatize(w)`.

use crate::stopwords::is_stopword;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Lemmas shorter than this are rejected.
pub const MIN_LEMMA_LEN: usize = 3;

/// Irregular forms. Words mapping to themselves are protected from the
/// suffix rules.
const IRREGULAR: &[(&str, &str)] = &[
    // Irregular noun plurals
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("loaves", "loaf"),
    ("thieves", "thief"),
    ("halves", "half"),
    ("selves", "self"),
    ("wolves", "wolf"),
    ("shelves", "shelf"),
    ("calves", "calf"),
    ("elves", "elf"),
    ("heroes", "hero"),
    ("echoes", "echo"),
    ("potatoes", "potato"),
    ("tomatoes", "tomato"),
    ("vetoes", "veto"),
    ("volcanoes", "volcano"),
    ("mosquitoes", "mosquito"),
    ("mangoes", "mango"),
    ("tornadoes", "tornado"),
    ("torpedoes", "torpedo"),
    ("dominoes", "domino"),
    // -es after a single s or z
    ("buses", "bus"),
    ("gases", "gas"),
    ("bonuses", "bonus"),
    ("campuses", "campus"),
    ("circuses", "circus"),
    ("viruses", "virus"),
    ("geniuses", "genius"),
    ("choruses", "chorus"),
    ("statuses", "status"),
    ("quizzes", "quiz"),
    ("whizzes", "whiz"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("phenomena", "phenomenon"),
    ("criteria", "criterion"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
    // Words that look plural but are not
    ("series", "series"),
    ("species", "species"),
    ("news", "news"),
    ("always", "always"),
    ("perhaps", "perhaps"),
    ("unless", "unless"),
    ("whereas", "whereas"),
    ("chaos", "chaos"),
    ("cosmos", "cosmos"),
    ("ethos", "ethos"),
    ("pathos", "pathos"),
    ("christmas", "christmas"),
    ("lens", "lens"),
    // Base form "go" is shorter than MIN_LEMMA_LEN
    ("goes", "goes"),
    // Irregular verb forms
    ("made", "make"),
    ("knew", "know"),
    ("known", "know"),
    ("gave", "give"),
    ("given", "give"),
    ("took", "take"),
    ("taken", "take"),
    ("came", "come"),
    ("became", "become"),
    ("began", "begin"),
    ("begun", "begin"),
    ("wrote", "write"),
    ("written", "write"),
    ("spoken", "speak"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("forgave", "forgive"),
    ("forgiven", "forgive"),
    ("said", "say"),
    ("told", "tell"),
    ("kept", "keep"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("taught", "teach"),
    ("sought", "seek"),
    ("fought", "fight"),
    ("understood", "understand"),
    ("stood", "stand"),
    ("ran", "run"),
    ("sang", "sing"),
    ("sung", "sing"),
    ("swam", "swim"),
    ("drank", "drink"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("froze", "freeze"),
    ("frozen", "freeze"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("driven", "drive"),
    ("broke", "break"),
    ("broken", "break"),
    ("woke", "wake"),
    ("stolen", "steal"),
    ("held", "hold"),
    ("meant", "mean"),
    ("slept", "sleep"),
    ("wept", "weep"),
    ("sent", "send"),
    ("spent", "spend"),
    ("built", "build"),
];

static IRREGULAR_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| IRREGULAR.iter().copied().collect());

/// Reduce a lowercase token to its lemma.
///
/// # Example
///
/// ```
/// use quotesearch_search::lemmatizer::lemmatize;
///
/// assert_eq!(lemmatize("stories"), "story");
/// assert_eq!(lemmatize("children"), "child");
/// assert_eq!(lemmatize("kindness"), "kindness");
/// ```
pub fn lemmatize(token: &str) -> String {
    let mut current = token.to_string();
    loop {
        if let Some(base) = IRREGULAR_MAP.get(current.as_str()) {
            if acceptable(base) {
                return (*base).to_string();
            }
            return current;
        }
        match strip_suffix(&current) {
            Some(candidate) if acceptable(&candidate) => current = candidate,
            _ => return current,
        }
    }
}

#[inline]
fn acceptable(candidate: &str) -> bool {
    candidate.chars().count() >= MIN_LEMMA_LEN && !is_stopword(candidate)
}

/// One suffix-rule step. Always shortens the word when it fires.
fn strip_suffix(word: &str) -> Option<String> {
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return None;
    }
    let len = word.chars().count();
    if len > 4 {
        if let Some(stem) = word.strip_suffix("ies").or_else(|| word.strip_suffix("ied")) {
            return Some(format!("{}y", stem));
        }
    }
    for suffix in ["sses", "zzes", "ches", "shes", "xes"] {
        if word.ends_with(suffix) {
            return word.strip_suffix("es").map(String::from);
        }
    }
    word.strip_suffix('s').map(String::from)
}
