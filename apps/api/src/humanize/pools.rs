// Fixed pools used by the humanize pass.

/// A formal phrase and the colloquial forms it may become.
pub struct Substitution {
    pub pattern: &'static str,
    pub replacements: &'static [&'static str],
}

/// Applied in order; each match site picks its own replacement.
/// Replacements may refer to capture groups (`${1}`).
pub const SUBSTITUTIONS: &[Substitution] = &[
    Substitution {
        pattern: r"있습니다\.",
        replacements: &["있어요.", "있죠.", "있답니다."],
    },
    Substitution {
        pattern: r"없습니다\.",
        replacements: &["없어요.", "없죠.", "없답니다."],
    },
    Substitution {
        pattern: r"좋습니다\.",
        replacements: &["좋아요.", "좋죠.", "좋답니다."],
    },
    Substitution {
        pattern: r"많습니다\.",
        replacements: &["많아요.", "많죠.", "많답니다."],
    },
    Substitution {
        pattern: r"같습니다\.",
        replacements: &["같아요.", "같죠.", "같네요."],
    },
    // Any other stem. "죠" and "네요" attach to every 습니다 stem.
    Substitution {
        pattern: r"(\S)습니다\.",
        replacements: &["${1}죠.", "${1}네요."],
    },
    Substitution {
        pattern: r"됩니다\.",
        replacements: &["돼요.", "되죠.", "된답니다."],
    },
    Substitution {
        pattern: r"합니다\.",
        replacements: &["해요.", "하죠.", "한답니다.", "해요!"],
    },
    Substitution {
        pattern: r"입니다\.",
        replacements: &["이에요.", "이죠.", "이랍니다."],
    },
    Substitution {
        pattern: r"하십시오",
        replacements: &["하세요", "해보세요"],
    },
    Substitution {
        pattern: r"그러므로",
        replacements: &["그래서", "그러니까"],
    },
    Substitution {
        pattern: r"또한",
        replacements: &["그리고", "게다가"],
    },
    Substitution {
        pattern: r"결론적으로",
        replacements: &["결국", "정리하자면"],
    },
];

/// Clauses a paragraph may gain, lose or swap at its start.
pub const FILLERS: &[&str] = &[
    "솔직히 말하면,",
    "개인적으로는",
    "사실",
    "음,",
    "그런데 말이죠,",
    "제 경험상",
];

pub const EMOJIS: &[&str] = &["😊", "👍", "✨", "🙌", "💡", "😉", "🔥", "👀", "😄", "🥰"];
