//! Thread packing — greedily fills micro-posts up to a character budget.

/// Per-post character budget.
pub const THREAD_CHAR_BUDGET: usize = 250;

/// Packs sentences into posts, opening the first post with `opener`.
///
/// A new post starts whenever appending the next sentence (plus its joining
/// space) would push the current post past `budget`. The only post that can
/// exceed the budget is one holding a single oversized sentence. If the
/// opener and the first sentence don't fit together, the opener is posted
/// alone.
pub fn pack_thread(opener: &str, sentences: &[String], budget: usize) -> Vec<String> {
    let mut posts = Vec::new();
    let mut current = opener.to_string();
    let mut has_body = false;

    for sentence in sentences {
        let separator = usize::from(has_body);
        let candidate_len = current.chars().count() + separator + sentence.chars().count();

        if candidate_len > budget && !current.trim().is_empty() {
            posts.push(current.trim_end().to_string());
            current.clear();
            has_body = false;
        }

        if has_body {
            current.push(' ');
        }
        current.push_str(sentence);
        has_body = true;
    }

    if !current.trim().is_empty() {
        posts.push(current.trim_end().to_string());
    }

    posts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(len: usize) -> String {
        let mut s = "가".repeat(len - 1);
        s.push('.');
        s
    }

    #[test]
    fn test_empty_pool_yields_opener_only() {
        let posts = pack_thread("🧵 시작 👇\n\n", &[], THREAD_CHAR_BUDGET);
        assert_eq!(posts, vec!["🧵 시작 👇".to_string()]);
    }

    #[test]
    fn test_posts_stay_within_budget() {
        let sentences: Vec<String> = (0..20).map(|i| sentence(30 + i)).collect();
        let posts = pack_thread("🧵 오프너\n\n", &sentences, THREAD_CHAR_BUDGET);

        assert!(posts.len() > 1);
        assert!(posts[0].starts_with("🧵"));
        for post in &posts {
            assert!(post.chars().count() <= THREAD_CHAR_BUDGET, "post too long: {post}");
        }
    }

    #[test]
    fn test_sentences_reconstruct_in_order() {
        let sentences: Vec<String> = (0..12).map(|i| format!("{i}번째 문장은 이렇게 적당히 깁니다.")).collect();
        let posts = pack_thread("🧵 오프너\n\n", &sentences, 60);

        let rebuilt = posts.join(" ");
        let mut cursor = 0;
        for s in &sentences {
            let found = rebuilt[cursor..].find(s.as_str()).expect("sentence missing or out of order");
            cursor += found + s.len();
        }
    }

    #[test]
    fn test_oversized_sentence_gets_its_own_post() {
        let long = sentence(300);
        let sentences = vec![sentence(20), long.clone(), sentence(20)];
        let posts = pack_thread("🧵\n\n", &sentences, THREAD_CHAR_BUDGET);

        assert_eq!(posts.len(), 3);
        assert_eq!(posts[1], long);
    }

    #[test]
    fn test_opener_posted_alone_when_first_sentence_does_not_fit() {
        let sentences = vec![sentence(245)];
        let posts = pack_thread("🧵 꽤 긴 오프너입니다 👇\n\n", &sentences, THREAD_CHAR_BUDGET);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0], "🧵 꽤 긴 오프너입니다 👇");
    }
}
