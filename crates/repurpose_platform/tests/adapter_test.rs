//! Tests for platform formatting and validation.

use repurpose_platform::{ContentIssueKind, PlatformId, PlatformRegistry, text::char_len};
use strum::IntoEnumIterator;

fn sample_contents() -> Vec<String> {
    vec![
        String::new(),
        "   ".to_string(),
        "短内容".to_string(),
        "很".repeat(70),
        "这是一个句子。".repeat(40),
        "word ".repeat(3000),
        "标题\n\n正文内容😊😊".to_string(),
        format!("{}\n{}", "开头".repeat(20), "正文".repeat(12000)),
        "A sentence. Another one! A question? ".repeat(400),
        "😊".repeat(60_000),
    ]
}

fn many_tags(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("tag{}", i)).collect()
}

#[test]
fn test_douyin_truncates_long_sentence_with_ellipsis() {
    let registry = PlatformRegistry::builtin();
    let adapter = registry.adapter("douyin").expect("douyin registered");

    let content = "抖音上最火的好物推荐来了快来看看吧".repeat(5);
    let content: String = content.chars().take(70).collect();
    assert_eq!(char_len(&content), 70);

    let formatted = adapter.format_content(&content, &Vec::<String>::new());
    assert!(formatted.content().ends_with("..."));
    assert!(char_len(formatted.content()) <= 55);
    assert_eq!(*formatted.metadata().char_count(), char_len(formatted.content()));
}

#[test]
fn test_xiaohongshu_caps_hashtags_and_extracts_title() {
    let registry = PlatformRegistry::builtin();
    let adapter = registry.adapter("xiaohongshu").expect("xiaohongshu registered");

    let tags = many_tags(12);
    let formatted = adapter.format_content("标题\n\n正文内容😊😊", &tags);

    assert_eq!(formatted.hashtags().len(), 10);
    assert_eq!(formatted.hashtags()[..], tags[..10]);
    assert_eq!(formatted.metadata().title().as_deref(), Some("标题"));
    assert_eq!(*formatted.metadata().emoji_count(), Some(2));
    assert_eq!(*formatted.metadata().hashtag_count(), 10);
    assert!(formatted.metadata().hook().is_none());
}

#[test]
fn test_xiaohongshu_long_first_line_has_no_title() {
    let registry = PlatformRegistry::builtin();
    let adapter = registry.adapter("xiaohongshu").expect("xiaohongshu registered");

    let content = format!("{}\n正文", "长".repeat(50));
    let formatted = adapter.format_content(&content, &["a"]);
    assert!(formatted.metadata().title().is_none());

    let formatted = adapter.format_content("\n正文", &["a"]);
    assert!(formatted.metadata().title().is_none());
}

#[test]
fn test_wechat_drops_hashtags_and_warns_short_article() {
    let registry = PlatformRegistry::builtin();
    let adapter = registry.adapter("wechat").expect("wechat registered");

    let content = "公众号".repeat(50);
    assert_eq!(char_len(&content), 150);

    let formatted = adapter.format_content(&content, &["a", "b"]);
    assert!(formatted.hashtags().is_empty());

    let report = adapter.validate_content(&content, &["a", "b"]);
    assert!(report.errors.is_empty());
    assert!(report.is_valid());
    assert!(
        report
            .warnings
            .iter()
            .any(|w| w.message.contains("too short")),
        "Expected a too-short warning, got: {:?}",
        report.warnings
    );
}

#[test]
fn test_wechat_article_metadata() {
    let registry = PlatformRegistry::builtin();
    let adapter = registry.adapter("wechat").expect("wechat registered");

    let formatted = adapter.format_content("# 标题\n\n第一段\n\n第二段", &Vec::<String>::new());
    assert_eq!(*formatted.metadata().has_title(), Some(true));
    assert_eq!(*formatted.metadata().paragraph_count(), Some(3));
    assert!(formatted.metadata().title().is_none());

    let formatted = adapter.format_content("一整段没有换行", &Vec::<String>::new());
    assert_eq!(*formatted.metadata().has_title(), Some(false));
    assert_eq!(*formatted.metadata().paragraph_count(), Some(1));
}

#[test]
fn test_douyin_hook_metadata() {
    let registry = PlatformRegistry::builtin();
    let adapter = registry.adapter("douyin").expect("douyin registered");

    let formatted = adapter.format_content("  发现一个宝藏好物！  \n快看", &["好物"]);
    assert_eq!(formatted.metadata().hook().as_deref(), Some("发现一个宝藏好物！"));

    let long_opening: String = "宝".repeat(30);
    let formatted = adapter.format_content(&long_opening, &["好物"]);
    assert!(formatted.metadata().hook().is_none());
}

#[test]
fn test_weibo_exact_limit_is_unchanged() {
    let registry = PlatformRegistry::builtin();
    let adapter = registry.adapter("weibo").expect("weibo registered");

    let content = "微".repeat(140);
    let formatted = adapter.format_content(&content, &["话题"]);
    assert_eq!(formatted.content(), &content);
    assert!(!formatted.content().ends_with("..."));
}

#[test]
fn test_base_metadata_only_for_plain_platforms() {
    let registry = PlatformRegistry::builtin();
    for id in ["weibo", "zhihu"] {
        let adapter = registry.adapter(id).expect("registered");
        let formatted = adapter.format_content("hello world\n\nsecond 😊", &["x"]);
        let metadata = formatted.metadata();
        assert_eq!(*metadata.word_count(), 4);
        assert!(metadata.title().is_none());
        assert!(metadata.emoji_count().is_none());
        assert!(metadata.hook().is_none());
        assert!(metadata.has_title().is_none());
        assert!(metadata.paragraph_count().is_none());
    }
}

#[test]
fn test_metadata_serializes_camel_case_and_omits_absent_facts() {
    let registry = PlatformRegistry::builtin();
    let adapter = registry.adapter("weibo").expect("weibo registered");
    let formatted = adapter.format_content("hello world", &["x"]);

    let json = serde_json::to_value(formatted.metadata()).expect("serializable");
    assert_eq!(json["platform"], "weibo");
    assert_eq!(json["charCount"], 11);
    assert_eq!(json["wordCount"], 2);
    assert_eq!(json["hashtagCount"], 1);
    assert!(json.get("title").is_none());
}

#[test]
fn test_word_count_of_blank_content_is_zero() {
    let registry = PlatformRegistry::builtin();
    for config in registry.all() {
        let adapter = registry.adapter(config.id().as_ref()).expect("registered");
        for blank in ["", "   ", "\n\n\t"] {
            let formatted = adapter.format_content(blank, &Vec::<String>::new());
            assert_eq!(*formatted.metadata().word_count(), 0);
        }
    }
}

#[test]
fn test_content_never_exceeds_platform_limit() {
    let registry = PlatformRegistry::builtin();
    for config in &registry {
        let adapter = registry.adapter(config.id().as_ref()).expect("registered");
        for content in sample_contents() {
            let formatted = adapter.format_content(&content, &many_tags(3));
            assert!(
                char_len(formatted.content()) <= *config.max_chars(),
                "{} produced {} chars (limit {})",
                config.id(),
                char_len(formatted.content()),
                config.max_chars()
            );
        }
    }
}

#[test]
fn test_hashtags_never_exceed_cap() {
    let registry = PlatformRegistry::builtin();
    for config in &registry {
        let adapter = registry.adapter(config.id().as_ref()).expect("registered");
        for count in [0, 1, 5, 6, 10, 11, 50] {
            let formatted = adapter.format_content("内容", &many_tags(count));
            assert!(formatted.hashtags().len() <= adapter.max_hashtags());
            if !*config.hashtags() {
                assert!(formatted.hashtags().is_empty());
            }
        }
    }
}

#[test]
fn test_hashtag_order_is_preserved() {
    let registry = PlatformRegistry::builtin();
    let adapter = registry.adapter("douyin").expect("douyin registered");
    let tags = ["c", "a", "b", "e", "d", "f", "g"];
    let formatted = adapter.format_content("内容", &tags);
    assert_eq!(formatted.hashtags(), &vec!["c", "a", "b", "e", "d", "f"]);
}

#[test]
fn test_reformatting_is_idempotent() {
    let registry = PlatformRegistry::builtin();
    for id in PlatformId::iter() {
        let adapter = registry.adapter(id.as_ref()).expect("registered");
        for content in sample_contents() {
            let first = adapter.format_content(&content, &many_tags(12));
            let second = adapter.format_content(first.content(), first.hashtags());
            assert_eq!(second.content(), first.content());
            assert_eq!(second.hashtags(), first.hashtags());
        }
    }
}

#[test]
fn test_validate_reports_char_limit_error() {
    let registry = PlatformRegistry::builtin();
    let adapter = registry.adapter("weibo").expect("weibo registered");

    let report = adapter.validate_content(&"字".repeat(150), &["a"]);
    assert!(!report.is_valid());
    assert_eq!(report.errors.len(), 1);
    assert_eq!(
        report.errors[0].kind,
        ContentIssueKind::ExceedsCharLimit {
            actual: 150,
            limit: 140
        }
    );
    assert!(report.errors[0].message.contains("150 / 140"));
}

#[test]
fn test_validate_hashtag_warning_does_not_invalidate() {
    let registry = PlatformRegistry::builtin();
    let adapter = registry.adapter("weibo").expect("weibo registered");

    let report = adapter.validate_content("短", &many_tags(6));
    assert!(report.is_valid());
    assert_eq!(
        report.warnings[0].kind,
        ContentIssueKind::TooManyHashtags {
            actual: 6,
            limit: 5
        }
    );
}

#[test]
fn test_validate_xiaohongshu_readability_warnings() {
    let registry = PlatformRegistry::builtin();
    let adapter = registry.adapter("xiaohongshu").expect("xiaohongshu registered");

    let report = adapter.validate_content("一段没有换行也没有表情的内容", &["a"]);
    let kinds: Vec<_> = report.warnings.iter().map(|w| w.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            ContentIssueKind::MissingParagraphBreaks,
            ContentIssueKind::FewEmoji {
                found: 0,
                recommended: 2
            },
        ]
    );

    let report = adapter.validate_content("标题✨\n\n正文😊", &["a"]);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
}

#[test]
fn test_validate_douyin_hook_length() {
    let registry = PlatformRegistry::builtin();
    let adapter = registry.adapter("douyin").expect("douyin registered");

    let report = adapter.validate_content(&"长".repeat(31), &["a"]);
    assert!(
        report
            .warnings
            .iter()
            .any(|w| matches!(w.kind, ContentIssueKind::HookTooLong { actual: 31, limit: 30 }))
    );

    let report = adapter.validate_content(&format!("{}\n后文", "短".repeat(30)), &["a"]);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_validate_empty_input_is_well_defined() {
    let registry = PlatformRegistry::builtin();
    for config in &registry {
        let adapter = registry.adapter(config.id().as_ref()).expect("registered");
        let report = adapter.validate_content("", &Vec::<String>::new());
        assert!(report.is_valid());
    }
}

#[test]
fn test_validation_report_formats_human_output() {
    let registry = PlatformRegistry::builtin();
    let adapter = registry.adapter("weibo").expect("weibo registered");

    let report = adapter.validate_content(&"字".repeat(141), &many_tags(6));
    let text = report.format_human();
    assert!(text.starts_with("Error 1: Content exceeds character limit"));
    assert!(text.contains("Warning 1: Too many hashtags"));
}
