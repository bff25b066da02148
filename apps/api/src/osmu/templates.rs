// Per-platform slot templates.
// `{subject}` in any template string is replaced with the record's subject
// (topic, or title when the topic is blank).

/// Where a slot's text comes from.
#[derive(Debug, Clone, Copy)]
pub enum SlotText {
    /// Literal template.
    Template(&'static str),
    /// Next unused source sentence, prefixed with `marker` when present.
    /// `fallback` is used once the sentence pool runs dry.
    Sentence {
        marker: Option<&'static str>,
        fallback: &'static str,
    },
    /// The full joined source text, verbatim.
    FullSource,
}

#[derive(Debug, Clone, Copy)]
pub struct SlotTemplate {
    /// Script `type`, e.g. `HOOK`.
    pub label: &'static str,
    /// Section title in the mirrored `sections` field.
    pub heading: &'static str,
    pub time: &'static str,
    pub visual: &'static str,
    pub text: SlotText,
}

#[derive(Debug)]
pub struct PlatformTemplate {
    pub title: &'static str,
    pub default_hashtags: &'static [&'static str],
    /// Long-form targets read flat `content` before structured fields.
    pub prefer_flat: bool,
    pub slots: &'static [SlotTemplate],
}

pub const SHORTS: PlatformTemplate = PlatformTemplate {
    title: "{subject} 60초 핵심 정리 #Shorts",
    default_hashtags: &["#{subject}", "#Shorts", "#쇼츠", "#꿀팁"],
    prefer_flat: false,
    slots: &[
        SlotTemplate {
            label: "HOOK",
            heading: "HOOK",
            time: "0-3초",
            visual: "강렬한 클로즈업 + 큰 자막",
            text: SlotText::Template("와, {subject} 아직도 이렇게 하세요? 😱"),
        },
        SlotTemplate {
            label: "INTRO",
            heading: "INTRO",
            time: "3-10초",
            visual: "진행자 정면 샷, 빠른 줌인",
            text: SlotText::Template("오늘은 {subject}, 딱 60초 만에 정리해 드릴게요!"),
        },
        SlotTemplate {
            label: "CONTENT",
            heading: "CONTENT",
            time: "10-25초",
            visual: "핵심 키워드 자막 + B-roll",
            text: SlotText::Sentence {
                marker: Some("자,"),
                fallback: "자, 첫 번째! {subject}의 기본부터 짚고 갈게요.",
            },
        },
        SlotTemplate {
            label: "CONTENT",
            heading: "CONTENT",
            time: "25-40초",
            visual: "화면 분할 비교 컷",
            text: SlotText::Sentence {
                marker: Some("그리고"),
                fallback: "그리고 두 번째! 많은 분들이 {subject}에서 이 부분을 놓쳐요.",
            },
        },
        SlotTemplate {
            label: "CONTENT",
            heading: "CONTENT",
            time: "40-52초",
            visual: "체크리스트 그래픽",
            text: SlotText::Sentence {
                marker: Some("마지막으로"),
                fallback: "마지막으로! 꾸준함이 {subject}의 핵심이에요.",
            },
        },
        SlotTemplate {
            label: "CTA",
            heading: "CTA",
            time: "52-60초",
            visual: "구독 버튼 애니메이션",
            text: SlotText::Template("도움이 됐다면 구독과 좋아요 꾹! 🙌"),
        },
    ],
};

pub const REELS: PlatformTemplate = PlatformTemplate {
    title: "✨ {subject} | 오늘의 감성 루틴",
    default_hashtags: &["#{subject}", "#릴스", "#Reels", "#감성"],
    prefer_flat: false,
    slots: &[
        SlotTemplate {
            label: "HOOK",
            heading: "HOOK",
            time: "0-3초",
            visual: "햇살 드는 창가, 슬로모션",
            text: SlotText::Template("✨ {subject}, 이렇게 바꾸니까 하루가 달라졌어요"),
        },
        SlotTemplate {
            label: "POV",
            heading: "POV",
            time: "3-8초",
            visual: "1인칭 시점 핸드헬드",
            text: SlotText::Template("POV: {subject}을(를) 처음 시작한 당신"),
        },
        SlotTemplate {
            label: "TIP",
            heading: "TIP",
            time: "8-16초",
            visual: "따뜻한 톤 디테일 컷",
            text: SlotText::Sentence {
                marker: Some("🌿"),
                fallback: "🌿 작은 것부터, {subject}은(는) 천천히 시작해도 괜찮아요.",
            },
        },
        SlotTemplate {
            label: "TIP",
            heading: "TIP",
            time: "16-24초",
            visual: "감성 텍스트 오버레이",
            text: SlotText::Sentence {
                marker: Some("🤍"),
                fallback: "🤍 나만의 속도로, {subject}을(를) 즐겨보세요.",
            },
        },
        SlotTemplate {
            label: "OUTRO",
            heading: "OUTRO",
            time: "24-28초",
            visual: "노을 배경 페이드아웃",
            text: SlotText::Template("오늘도 나를 위한 작은 루틴, 잊지 마세요 🌙"),
        },
        SlotTemplate {
            label: "CTA",
            heading: "CTA",
            time: "28-30초",
            visual: "저장 아이콘 강조",
            text: SlotText::Template("저장해두고 필요할 때 꺼내보세요 📌"),
        },
    ],
};

pub const BLOG: PlatformTemplate = PlatformTemplate {
    title: "{subject} 완벽 정리: 꼭 알아야 할 핵심 포인트",
    default_hashtags: &["#{subject}", "#네이버블로그", "#정보공유"],
    prefer_flat: true,
    slots: &[
        SlotTemplate {
            label: "INTRO",
            heading: "인트로",
            time: "도입",
            visual: "대표 이미지",
            text: SlotText::Template(
                "안녕하세요! 오늘은 {subject}에 대해 자세히 알아보려고 합니다. 끝까지 읽어보시면 분명 도움이 되실 거예요.",
            ),
        },
        SlotTemplate {
            label: "BODY",
            heading: "핵심 내용",
            time: "본문",
            visual: "본문 설명 이미지",
            text: SlotText::FullSource,
        },
        SlotTemplate {
            label: "OUTRO",
            heading: "마치며",
            time: "결론",
            visual: "마무리 이미지",
            text: SlotText::Template(
                "지금까지 {subject}에 대해 알아보았습니다. 도움이 되셨다면 공감과 댓글 부탁드려요!",
            ),
        },
    ],
};

pub const THREADS_TITLE: &str = "🧵 {subject} 스레드";
pub const THREADS_OPENER: &str = "🧵 {subject}, 스레드로 정리해볼게요 👇\n\n";
pub const THREADS_HASHTAGS: &[&str] = &["#{subject}", "#스레드", "#Threads"];

/// Replaces `{subject}` in a template.
pub fn interpolate(template: &str, subject: &str) -> String {
    template.replace("{subject}", subject)
}

/// Renders a default hashtag set. The subject tag loses its inner whitespace
/// and is skipped entirely when the subject is blank.
pub fn render_hashtags(tags: &[&str], subject: &str) -> String {
    let subject_tag: String = subject.split_whitespace().collect();

    tags.iter()
        .filter(|tag| !(tag.contains("{subject}") && subject_tag.is_empty()))
        .map(|tag| interpolate(tag, &subject_tag))
        .collect::<Vec<_>>()
        .join(" ")
}
