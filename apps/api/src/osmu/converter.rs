//! OSMU converter — reshapes one content record for another platform.
//!
//! Pure and synchronous. Every derivable target fills `title`, `script`,
//! `sections`, `content` and `hashtags`, so any consumer reading either
//! field name finds the same slots. Unknown targets get the input back with
//! only `platform` overwritten.

use tracing::debug;

use crate::models::content::{ContentRecord, Platform, ScriptLine, Section, ThreadPost};
use crate::osmu::source::{join_paragraphs, SourceText};
use crate::osmu::templates::{
    interpolate, render_hashtags, PlatformTemplate, SlotText, BLOG, REELS, SHORTS,
    THREADS_HASHTAGS, THREADS_OPENER, THREADS_TITLE,
};
use crate::osmu::threads::{pack_thread, THREAD_CHAR_BUDGET};

/// A filled slot, before it is mirrored into `script` and `sections`.
struct Slot {
    label: String,
    heading: String,
    time: String,
    visual: String,
    text: String,
}

/// Converts `record` into the shape of `target`. Never fails.
pub fn transform(record: &ContentRecord, target: &Platform) -> ContentRecord {
    let variant = match target {
        Platform::YouTubeShorts => apply_template(record, target, &SHORTS),
        Platform::InstagramReels => apply_template(record, target, &REELS),
        Platform::NaverBlog => apply_template(record, target, &BLOG),
        Platform::Threads => to_threads(record),
        Platform::Other(_) => ContentRecord {
            platform: target.clone(),
            ..record.clone()
        },
    };

    debug!(
        "Transformed {} -> {}: {} slots",
        record.platform,
        target,
        variant.script.len()
    );

    variant
}

/// Derives one variant per target, in order.
pub fn derive_variants(record: &ContentRecord, targets: &[Platform]) -> Vec<ContentRecord> {
    targets.iter().map(|t| transform(record, t)).collect()
}

/// Every derivable platform except the record's own.
pub fn default_targets(record: &ContentRecord) -> Vec<Platform> {
    Platform::DERIVABLE
        .into_iter()
        .filter(|p| *p != record.platform)
        .collect()
}

/// The string interpolated into templates: topic, else title.
fn subject(record: &ContentRecord) -> &str {
    let topic = record.topic.trim();
    if topic.is_empty() {
        record.title.trim()
    } else {
        topic
    }
}

fn resolve_hashtags(record: &ContentRecord, defaults: &[&str], subject: &str) -> String {
    if record.hashtags.trim().is_empty() {
        render_hashtags(defaults, subject)
    } else {
        record.hashtags.clone()
    }
}

fn apply_template(
    record: &ContentRecord,
    target: &Platform,
    template: &PlatformTemplate,
) -> ContentRecord {
    let subject = subject(record);
    let source = SourceText::resolve(record, template.prefer_flat);
    let mut pool = source.sentences().into_iter();

    debug!("Resolved {} source for {}", source.kind(), target);

    let slots: Vec<Slot> = template
        .slots
        .iter()
        .map(|slot| {
            let text = match slot.text {
                SlotText::Template(t) => interpolate(t, subject),
                SlotText::Sentence { marker, fallback } => match (pool.next(), marker) {
                    (Some(sentence), Some(marker)) => format!("{marker} {sentence}"),
                    (Some(sentence), None) => sentence,
                    (None, _) => interpolate(fallback, subject),
                },
                SlotText::FullSource => source.joined(),
            };
            Slot {
                label: slot.label.to_string(),
                heading: slot.heading.to_string(),
                time: slot.time.to_string(),
                visual: slot.visual.to_string(),
                text,
            }
        })
        .collect();

    assemble(
        record,
        target,
        interpolate(template.title, subject),
        resolve_hashtags(record, template.default_hashtags, subject),
        slots,
        Vec::new(),
    )
}

fn to_threads(record: &ContentRecord) -> ContentRecord {
    let subject = subject(record);
    let source = SourceText::resolve(record, false);
    let opener = interpolate(THREADS_OPENER, subject);
    let posts = pack_thread(&opener, &source.sentences(), THREAD_CHAR_BUDGET);
    let total = posts.len();

    let slots = posts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let position = format!("{}/{}", i + 1, total);
            Slot {
                label: "POST".to_string(),
                heading: position.clone(),
                time: position,
                visual: String::new(),
                text: text.clone(),
            }
        })
        .collect();

    let thread_posts = posts.into_iter().map(|text| ThreadPost { text }).collect();

    assemble(
        record,
        &Platform::Threads,
        interpolate(THREADS_TITLE, subject),
        resolve_hashtags(record, THREADS_HASHTAGS, subject),
        slots,
        thread_posts,
    )
}

/// Mirrors slots into both `script` and `sections` and joins their text.
fn assemble(
    record: &ContentRecord,
    target: &Platform,
    title: String,
    hashtags: String,
    slots: Vec<Slot>,
    thread_posts: Vec<ThreadPost>,
) -> ContentRecord {
    let content = join_paragraphs(slots.iter().map(|s| s.text.as_str()));

    let sections = slots
        .iter()
        .map(|s| Section {
            title: s.heading.clone(),
            content: s.text.clone(),
        })
        .collect();

    let script = slots
        .into_iter()
        .map(|s| ScriptLine {
            time: s.time,
            kind: s.label,
            text: s.text,
            visual: s.visual,
        })
        .collect();

    ContentRecord {
        topic: record.topic.clone(),
        title,
        content: Some(content),
        sections,
        script,
        thread_posts,
        hashtags,
        platform: target.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diet_record() -> ContentRecord {
        ContentRecord {
            topic: "다이어트".to_string(),
            content: Some("첫줄입니다. 둘째줄입니다. 셋째줄입니다.".to_string()),
            hashtags: "#다이어트".to_string(),
            ..Default::default()
        }
    }

    fn long_record() -> ContentRecord {
        ContentRecord {
            topic: "아침 루틴".to_string(),
            title: "아침 루틴 가이드".to_string(),
            content: Some(
                "아침에 일어나자마자 물 한 잔을 마시면 몸이 깨어납니다.\n\
                 가벼운 스트레칭으로 굳은 근육을 풀어주는 것이 좋습니다.\n\
                 하루 계획을 세 줄로 적어두면 집중력이 올라갑니다.\n\
                 햇빛을 십 분 정도 쬐면 생체 리듬이 안정됩니다."
                    .to_string(),
            ),
            platform: Platform::NaverBlog,
            ..Default::default()
        }
    }

    #[test]
    fn test_shorts_scenario() {
        let result = transform(&diet_record(), &Platform::YouTubeShorts);

        assert_eq!(result.platform, Platform::YouTubeShorts);
        assert_eq!(result.script.len(), 6);
        assert_eq!(result.script[0].kind, "HOOK");
        assert!(result.title.contains("다이어트"));
        assert!(result.title.contains("#Shorts"));
        assert_eq!(result.hashtags, "#다이어트");
    }

    #[test]
    fn test_shorts_fills_content_slots_from_sentences() {
        let result = transform(&long_record(), &Platform::YouTubeShorts);

        assert_eq!(
            result.script[2].text,
            "자, 아침에 일어나자마자 물 한 잔을 마시면 몸이 깨어납니다."
        );
        assert_eq!(
            result.script[3].text,
            "그리고 가벼운 스트레칭으로 굳은 근육을 풀어주는 것이 좋습니다."
        );
        assert!(result.script[4].text.starts_with("마지막으로 하루 계획을"));
        assert_eq!(result.script[5].kind, "CTA");
    }

    #[test]
    fn test_shorts_falls_back_when_sentences_run_out() {
        let result = transform(&diet_record(), &Platform::YouTubeShorts);
        // every sentence in the diet record is under the minimum length
        assert!(result.script[2].text.contains("다이어트의 기본"));
        assert!(!result.script[2].visual.is_empty());
    }

    #[test]
    fn test_reels_slot_sequence() {
        let result = transform(&long_record(), &Platform::InstagramReels);
        let labels: Vec<_> = result.script.iter().map(|l| l.kind.as_str()).collect();

        assert_eq!(labels, ["HOOK", "POV", "TIP", "TIP", "OUTRO", "CTA"]);
        assert!(result.script[2].text.starts_with("🌿 아침에"));
        assert_eq!(result.hashtags, "#아침루틴 #릴스 #Reels #감성");
    }

    #[test]
    fn test_threads_scenario() {
        let result = transform(&diet_record(), &Platform::Threads);

        assert!(!result.thread_posts.is_empty());
        assert!(result.thread_posts[0].text.starts_with("🧵"));
        for post in &result.thread_posts {
            assert!(post.text.chars().count() <= 260);
        }
        assert_eq!(result.script.len(), result.thread_posts.len());
        assert_eq!(result.sections.len(), result.thread_posts.len());
    }

    #[test]
    fn test_threads_packs_all_sentences() {
        let record = long_record();
        let result = transform(&record, &Platform::Threads);
        let joined: String = result
            .thread_posts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        for sentence in SourceText::resolve(&record, false).sentences() {
            assert!(joined.contains(&sentence), "missing: {sentence}");
        }
        assert_eq!(result.script[0].kind, "POST");
        assert_eq!(result.script[0].time, format!("1/{}", result.thread_posts.len()));
    }

    #[test]
    fn test_blog_from_sections_scenario() {
        let source = ContentRecord {
            topic: "홈트".to_string(),
            sections: vec![
                Section {
                    title: "HOOK".to_string(),
                    content: "집에서도 충분히 운동할 수 있어요.".to_string(),
                },
                Section {
                    title: "CONTENT".to_string(),
                    content: "스쿼트 스무 개로 하루를 시작해 보세요.".to_string(),
                },
            ],
            platform: Platform::YouTubeShorts,
            ..Default::default()
        };

        let result = transform(&source, &Platform::NaverBlog);
        let titles: Vec<_> = result.sections.iter().map(|s| s.title.as_str()).collect();

        assert_eq!(titles, ["인트로", "핵심 내용", "마치며"]);
        assert_eq!(
            result.sections[1].content,
            "집에서도 충분히 운동할 수 있어요.\n\n스쿼트 스무 개로 하루를 시작해 보세요."
        );
        assert_eq!(result.script.len(), 3);
        assert_eq!(result.script[1].kind, "BODY");
    }

    #[test]
    fn test_blog_prefers_flat_content_verbatim() {
        let mut record = long_record();
        record.sections = vec![Section {
            title: "무시됨".to_string(),
            content: "구조화된 내용은 블로그에서 쓰이지 않습니다.".to_string(),
        }];
        record.content = record.content.map(|c| format!("\n  {c}\n"));
        let result = transform(&record, &Platform::NaverBlog);

        assert_eq!(
            result.sections[1].content,
            record.content.as_deref().unwrap_or_default()
        );
    }

    #[test]
    fn test_unknown_target_is_identity_except_platform() {
        let record = diet_record();
        let target = Platform::from("TikTok");
        let result = transform(&record, &target);

        assert_eq!(result.platform, target);
        assert_eq!(
            ContentRecord {
                platform: record.platform.clone(),
                ..result
            },
            record
        );
    }

    #[test]
    fn test_empty_record_still_populates_required_fields() {
        let record = ContentRecord::default();
        for target in Platform::DERIVABLE {
            let result = transform(&record, &target);
            assert_eq!(result.platform, target);
            assert!(result.content.is_some());
            assert!(!result.title.is_empty());
            assert!(!result.hashtags.is_empty());
            assert!(!result.script.is_empty());
            assert_eq!(result.script.len(), result.sections.len());
        }
    }

    #[test]
    fn test_subject_falls_back_to_title() {
        let record = ContentRecord {
            title: "캠핑 준비물".to_string(),
            ..Default::default()
        };
        let result = transform(&record, &Platform::YouTubeShorts);
        assert!(result.title.starts_with("캠핑 준비물"));
        assert!(result.hashtags.starts_with("#캠핑준비물"));
    }

    #[test]
    fn test_slot_labels_are_stable_across_sources() {
        let a = transform(&diet_record(), &Platform::InstagramReels);
        let b = transform(&long_record(), &Platform::InstagramReels);
        let labels = |r: &ContentRecord| r.script.iter().map(|l| l.kind.clone()).collect::<Vec<_>>();
        assert_eq!(labels(&a), labels(&b));
    }

    #[test]
    fn test_content_joins_slot_texts() {
        let result = transform(&long_record(), &Platform::NaverBlog);
        let expected = result
            .script
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        assert_eq!(result.content.as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn test_derive_variants_skips_own_platform_by_default() {
        let record = long_record();
        let targets = default_targets(&record);
        assert_eq!(targets.len(), 3);
        assert!(!targets.contains(&Platform::NaverBlog));

        let variants = derive_variants(&record, &targets);
        let platforms: Vec<_> = variants.iter().map(|v| v.platform.clone()).collect();
        assert_eq!(platforms, targets);
    }

    #[test]
    fn test_transform_leaves_input_untouched() {
        let record = long_record();
        let before = record.clone();
        let _ = transform(&record, &Platform::Threads);
        assert_eq!(record, before);
    }
}
