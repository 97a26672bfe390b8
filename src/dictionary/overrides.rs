//! Locale override lists applied in front of a lookup source.
//!
//! External dictionaries are unreliable for very short words: they accept
//! abbreviations and interjections and miss common three-letter words. Each
//! locale can carry a deny list (checked first), an allow list for short
//! words, and a minimum length below which unlisted words are rejected
//! without a lookup.

use async_trait::async_trait;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use super::validator::{LookupError, WordValidator};
use crate::core::Locale;

/// Override lists for one locale. Stored lower-case.
#[derive(Clone, Debug, Default)]
pub struct OverrideLists {
    denied: FxHashSet<String>,
    allowed: FxHashSet<String>,
    /// Words shorter than this are never sent to the inner source.
    min_lookup_len: usize,
}

impl OverrideLists {
    pub fn new(min_lookup_len: usize) -> Self {
        Self {
            min_lookup_len,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn deny<'a>(mut self, words: impl IntoIterator<Item = &'a str>) -> Self {
        self.denied.extend(words.into_iter().map(str::to_lowercase));
        self
    }

    #[must_use]
    pub fn allow<'a>(mut self, words: impl IntoIterator<Item = &'a str>) -> Self {
        self.allowed.extend(words.into_iter().map(str::to_lowercase));
        self
    }

    /// A definitive answer from the lists alone, or `None` to consult the source.
    #[must_use]
    pub fn verdict(&self, word: &str) -> Option<bool> {
        let word = word.trim().to_lowercase();
        if self.denied.contains(&word) {
            return Some(false);
        }
        if self.allowed.contains(&word) {
            return Some(true);
        }
        if word.chars().count() < self.min_lookup_len {
            return Some(false);
        }
        None
    }

    /// English lists.
    #[must_use]
    pub fn english() -> Self {
        Self::new(4)
            .allow(ENGLISH_TWO_LETTER.iter().copied())
            .allow(ENGLISH_THREE_LETTER.iter().copied())
            .deny(ENGLISH_DENIED.iter().copied())
    }
}

/// Wraps a source with per-locale override lists.
///
/// Locales without lists go straight to the source.
#[derive(Clone, Debug)]
pub struct LocaleOverrides<V> {
    inner: V,
    lists: FxHashMap<Locale, OverrideLists>,
}

impl<V> LocaleOverrides<V> {
    /// Wrap `inner` with no lists.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            lists: FxHashMap::default(),
        }
    }

    /// Wrap `inner` with the English lists registered.
    pub fn english(inner: V) -> Self {
        Self::new(inner).with_lists(Locale::english(), OverrideLists::english())
    }

    #[must_use]
    pub fn with_lists(mut self, locale: Locale, lists: OverrideLists) -> Self {
        self.lists.insert(locale, lists);
        self
    }
}

#[async_trait]
impl<V: WordValidator> WordValidator for LocaleOverrides<V> {
    async fn exists(&self, locale: &Locale, word: &str) -> Result<bool, LookupError> {
        if let Some(verdict) = self.lists.get(locale).and_then(|l| l.verdict(word)) {
            debug!(%locale, word, verdict, "word decided by override list");
            return Ok(verdict);
        }
        self.inner.exists(locale, word).await
    }
}

const ENGLISH_TWO_LETTER: &[&str] = &[
    "ad", "am", "an", "as", "at", "be", "by", "do", "go", "he", "hi", "if", "in", "is", "it", "me",
    "my", "no", "of", "on", "or", "so", "to", "up", "us", "we",
];

const ENGLISH_THREE_LETTER: &[&str] = &[
    "ace", "act", "add", "age", "ago", "aid", "aim", "air", "all", "and", "any", "apt", "art", "ash",
    "ask", "ate", "bad", "bag", "ban", "bar", "bat", "bay", "bed", "bee", "beg", "bet", "bid", "big",
    "bit", "box", "boy", "bug", "bus", "but", "buy", "can", "cap", "car", "cat", "cow", "cry", "cup",
    "cut", "day", "die", "dig", "dim", "dip", "dog", "dot", "dry", "due", "dug", "ear", "eat", "egg",
    "ego", "end", "era", "eye", "far", "fat", "fee", "few", "fig", "fit", "fix", "fly", "fog", "for",
    "fox", "fun", "fur", "gas", "get", "got", "gun", "gut", "guy", "gym", "had", "ham", "has", "hat",
    "hay", "her", "hey", "him", "hip", "hit", "hop", "hot", "how", "hub", "hue", "hug", "hut", "ice",
    "ill", "ink", "inn", "ion", "its", "jar", "jaw", "jay", "jet", "job", "jog", "joy", "key", "kid",
    "kit", "lab", "lag", "lap", "law", "lay", "leg", "let", "lid", "lie", "lip", "lit", "log", "lot",
    "low", "mad", "man", "map", "mat", "may", "men", "met", "mix", "mob", "mom", "mop", "mud", "mug",
    "nap", "net", "new", "nod", "not", "now", "nun", "nut", "oak", "odd", "off", "oil", "old", "one",
    "our", "out", "owe", "owl", "own", "pad", "pan", "par", "pat", "pay", "pen", "pet", "pig", "pin",
    "pit", "pop", "pot", "pro", "put", "rad", "rag", "ram", "ran", "rap", "rat", "raw", "ray", "red",
    "rib", "rid", "rim", "rip", "rob", "rod", "rot", "row", "rub", "rug", "run", "sad", "sat", "saw",
    "say", "sea", "see", "set", "sew", "she", "shy", "sin", "sip", "sir", "sit", "six", "ski", "sky",
    "sly", "son", "spy", "sum", "sun", "tab", "tag", "tan", "tap", "tar", "tax", "tea", "ten", "the",
    "tie", "tin", "tip", "toe", "too", "top", "toy", "try", "tub", "two", "use", "van", "vat", "vet",
    "via", "war", "was", "wax", "way", "web", "wed", "wet", "who", "why", "win", "wit", "won", "yes",
    "yet", "you", "zip", "zoo",
];

const ENGLISH_DENIED: &[&str] = &[
    "aa", "ae", "ag", "ai", "ed", "ef", "eh", "el", "em", "er", "es", "et", "ex", "fa", "fe", "gi",
    "ha", "hm", "id", "ki", "la", "li", "lo", "ma", "mi", "mm", "mo", "mu", "na", "ne", "oh", "om",
    "op", "os", "ow", "ox", "oy", "pa", "pe", "pi", "po", "qi", "re", "sh", "si", "ta", "ti", "um",
    "un", "ut", "uh", "wo", "xi", "xu", "ya", "ye", "yo", "za", "gax", "zex", "kax", "jax", "vax",
    "fax", "hox", "qix", "wex", "yox",
];
