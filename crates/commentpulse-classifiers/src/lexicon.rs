//! Static sentiment lexicons, emoji weights and modifier tables
//!
//! Tiers are listed strongest-positive first and strongest-negative last. A
//! word takes the weight of the first tier holding an entry it contains or is
//! contained by, so the order is significant.

/// A bucket of sentiment-bearing words sharing one weight
#[derive(Debug, Clone, Copy)]
pub struct LexiconTier {
    pub weight: f32,
    pub words: &'static [&'static str],
}

pub const TIERS: &[LexiconTier] = &[
    LexiconTier {
        weight: 3.0,
        words: &[
            "masterpiece", "phenomenal", "exceptional", "extraordinary", "magnificent",
            "spectacular", "breathtaking", "mindblowing", "lifechanging", "gamechanging",
            "revolutionary", "legendary", "epic", "flawless", "perfection", "godlike",
            "unbelievable", "incredible", "miraculous", "stunning",
        ],
    },
    LexiconTier {
        weight: 2.5,
        words: &[
            "excellent", "amazing", "outstanding", "fantastic", "brilliant", "superb",
            "wonderful", "marvelous", "fabulous", "splendid", "terrific", "tremendous",
            "remarkable", "impressive", "inspiring", "beautiful", "genius", "perfect",
        ],
    },
    LexiconTier {
        weight: 2.0,
        words: &[
            "great", "awesome", "love", "loved", "loving", "best", "favorite",
            "appreciate", "appreciated", "helpful", "valuable", "informative",
            "insightful", "enlightening", "educational", "clear", "concise",
            "recommended", "recommend", "enjoyed", "enjoying", "wonderful",
        ],
    },
    LexiconTier {
        weight: 1.5,
        words: &[
            "good", "nice", "fine", "pleased", "glad", "happy", "satisfied",
            "useful", "interesting", "solid", "decent", "cool", "neat", "sweet",
            "like", "liked", "liking", "better", "improved", "positive", "benefit",
        ],
    },
    LexiconTier {
        weight: 1.0,
        words: &[
            "okay", "ok", "alright", "fair", "acceptable", "adequate", "sufficient",
            "thanks", "thank", "thankyou", "grateful", "gratitude", "appreciate",
        ],
    },
    LexiconTier {
        weight: -3.0,
        words: &[
            "catastrophic", "disastrous", "abysmal", "atrocious", "deplorable",
            "abominable", "detestable", "repulsive", "disgusting", "revolting",
            "horrific", "horrendous", "nightmarish", "unbearable", "intolerable",
        ],
    },
    LexiconTier {
        weight: -2.5,
        words: &[
            "terrible", "horrible", "awful", "dreadful", "appalling", "pathetic",
            "miserable", "horrifying", "shocking", "outrageous", "unacceptable",
        ],
    },
    LexiconTier {
        weight: -2.0,
        words: &[
            "bad", "worst", "hate", "hated", "hating", "poor", "disappointing",
            "disappointed", "frustrating", "frustrated", "annoying", "annoyed",
            "useless", "worthless", "pointless", "waste", "wasted", "fail", "failed",
            "sucks", "sucked", "suck", "crap", "trash", "garbage", "rubbish",
        ],
    },
    LexiconTier {
        weight: -1.5,
        words: &[
            "dislike", "disliked", "boring", "bored", "dull", "tedious", "tiresome",
            "confusing", "confused", "unclear", "difficult", "hard", "complicated",
            "misleading", "misled", "wrong", "incorrect", "inaccurate", "flawed",
        ],
    },
    LexiconTier {
        weight: -1.0,
        words: &[
            "meh", "blah", "whatever", "slow", "long", "short", "lacking",
            "missing", "repetitive", "redundant", "outdated", "old", "weak",
        ],
    },
];

/// Emoji glyphs and their signed weights. Every key is counted on its own, so
/// a toned thumb also counts as the plain one it starts with.
pub const EMOJI_WEIGHTS: &[(&str, f32)] = &[
    // Strong positive
    ("❤️", 3.0), ("😍", 3.0), ("🥰", 3.0), ("🤩", 3.0), ("😘", 3.0),
    ("💖", 3.0), ("💕", 3.0), ("💗", 3.0), ("💞", 3.0), ("💓", 3.0),
    ("🔥", 2.5), ("💯", 2.5), ("🏆", 2.5), ("👑", 2.5), ("⭐", 2.5), ("🌟", 2.5), ("✨", 2.5),
    ("👍", 2.0), ("👏", 2.0), ("🙌", 2.0), ("💪", 2.0), ("🎉", 2.0), ("🎊", 2.0), ("🎆", 2.0),
    ("✅", 2.0), ("✔️", 2.0),
    ("👍🏻", 2.0), ("👍🏼", 2.0), ("👍🏽", 2.0), ("👍🏾", 2.0), ("👍🏿", 2.0),
    ("😊", 1.5), ("😁", 1.5), ("😃", 1.5), ("😄", 1.5), ("😀", 1.5), ("🙂", 1.5), ("😌", 1.5),
    ("😇", 1.5), ("☺️", 1.5),
    // Strong negative
    ("💩", -3.0), ("🤮", -3.0), ("🤬", -3.0), ("😡", -2.5), ("😠", -2.5), ("🤢", -2.5),
    ("👎", -2.0), ("😤", -2.0), ("😾", -2.0), ("💔", -2.0), ("❌", -2.0), ("⛔", -2.0),
    ("👎🏻", -2.0), ("👎🏼", -2.0), ("👎🏽", -2.0), ("👎🏾", -2.0), ("👎🏿", -2.0),
    ("😢", -1.5), ("😭", -1.5), ("😞", -1.5), ("😔", -1.5), ("😟", -1.5), ("😕", -1.5),
    ("🙁", -1.5), ("☹️", -1.5), ("😱", -1.5), ("😫", -1.5), ("😩", -1.5), ("😒", -1.5),
];

/// Multipliers (> 1) applied by the word preceding a sentiment-bearing token
pub const INTENSIFIERS: &[(&str, f32)] = &[
    ("extremely", 2.0), ("incredibly", 2.0), ("absolutely", 1.8), ("completely", 1.8),
    ("totally", 1.7), ("utterly", 1.7), ("thoroughly", 1.7), ("perfectly", 1.6),
    ("very", 1.5), ("really", 1.5), ("truly", 1.5), ("highly", 1.5), ("genuinely", 1.5),
    ("quite", 1.3), ("pretty", 1.3), ("fairly", 1.2), ("rather", 1.2), ("somewhat", 1.1),
    ("super", 1.6), ("mega", 1.7), ("ultra", 1.8), ("so", 1.4), ("too", 1.3),
];

/// Multipliers (< 1); multi-word entries are matched against the two preceding tokens
pub const DIMINISHERS: &[(&str, f32)] = &[
    ("slightly", 0.5), ("barely", 0.4), ("hardly", 0.4), ("scarcely", 0.4),
    ("somewhat", 0.7), ("kind of", 0.7), ("sort of", 0.7), ("kinda", 0.7), ("sorta", 0.7),
    ("a bit", 0.8), ("a little", 0.8), ("little", 0.8), ("bit", 0.8),
];

pub const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nobody", "nothing", "nowhere", "none",
    "don't", "doesn't", "didn't", "won't", "wouldn't", "shouldn't", "couldn't",
    "can't", "cannot", "isn't", "aren't", "wasn't", "weren't", "hasn't", "haven't",
    "hadn't", "without",
];

/// Two-token negating idioms
pub const NEGATION_IDIOMS: &[&str] = &["no longer", "failed to", "fails to"];

pub const CONTRASTS: &[&str] = &["but", "however", "although", "though", "yet", "except", "despite"];

pub const SARCASM_INDICATORS: &[&str] = &["yeah right", "sure", "obviously", "clearly", "definitely"];

/// Replies treated as neutral when a remote model is unsure
pub const ACKNOWLEDGMENTS: &[&str] = &["ok", "okay", "i see", "got it", "alright", "noted", "understood"];

/// Contraction expansions applied before remote classification, in match priority order
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("won't", "will not"),
    ("can't", "cannot"),
    ("n't", " not"),
    ("'re", " are"),
    ("'ve", " have"),
    ("'ll", " will"),
    ("'d", " would"),
    ("'m", " am"),
];

pub fn intensifier(word: &str) -> Option<f32> {
    lookup(INTENSIFIERS, word)
}

pub fn diminisher(word: &str) -> Option<f32> {
    lookup(DIMINISHERS, word)
}

pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}

pub fn is_negation_idiom(bigram: &str) -> bool {
    NEGATION_IDIOMS.contains(&bigram)
}

pub fn is_contrast(word: &str) -> bool {
    CONTRASTS.contains(&word)
}

fn lookup(table: &[(&str, f32)], word: &str) -> Option<f32> {
    table
        .iter()
        .find(|(entry, _)| *entry == word)
        .map(|(_, weight)| *weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_weights_span_plus_three_to_minus_three() {
        let weights: Vec<f32> = TIERS.iter().map(|t| t.weight).collect();
        assert_eq!(weights.first(), Some(&3.0));
        assert_eq!(weights.last(), Some(&-1.0));
        assert!(weights.iter().all(|w| (-3.0..=3.0).contains(w)));
    }

    #[test]
    fn test_somewhat_is_both_intensifier_and_diminisher() {
        assert_eq!(intensifier("somewhat"), Some(1.1));
        assert_eq!(diminisher("somewhat"), Some(0.7));
    }

    #[test]
    fn test_modifier_tables_are_on_the_right_side_of_one() {
        assert!(INTENSIFIERS.iter().all(|(_, m)| *m > 1.0));
        assert!(DIMINISHERS.iter().all(|(_, m)| *m < 1.0));
    }

    #[test]
    fn test_lacking_is_a_tier_word_not_a_negation() {
        assert!(!is_negation("lacking"));
        assert!(!is_negation("lack"));
        assert!(TIERS
            .iter()
            .any(|tier| tier.weight == -1.0 && tier.words.contains(&"lacking")));
    }

    #[test]
    fn test_emoji_keys_are_unique() {
        for (i, (glyph, _)) in EMOJI_WEIGHTS.iter().enumerate() {
            assert!(!EMOJI_WEIGHTS[..i].iter().any(|(seen, _)| seen == glyph), "{glyph}");
        }
    }
}
