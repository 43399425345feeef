//! Tests for hashtag handling.

use repurpose_content::{compose_post, merge_hashtags, normalize_hashtag, render_hashtags};

#[test]
fn test_normalize_strips_marks_and_whitespace() {
    assert_eq!(normalize_hashtag("#科普"), Some("科普".to_string()));
    assert_eq!(normalize_hashtag("  ##rust "), Some("rust".to_string()));
    assert_eq!(normalize_hashtag("plain"), Some("plain".to_string()));
    assert_eq!(normalize_hashtag("   "), None);
    assert_eq!(normalize_hashtag("# "), None);
}

#[test]
fn test_merge_preserves_order_and_skips_duplicates() {
    let existing = vec!["好物推荐".to_string(), "种草".to_string()];
    let merged = merge_hashtags(&existing, ["#种草", "护肤", "", "好物推荐", "美妆"]);
    assert_eq!(merged, ["好物推荐", "种草", "护肤", "美妆"]);
}

#[test]
fn test_render_and_compose() {
    let tags = ["科普", "冷知识"];
    assert_eq!(render_hashtags(&tags), "#科普 #冷知识");
    assert_eq!(compose_post("正文", &tags), "正文\n\n#科普 #冷知识");
    assert_eq!(compose_post("正文", &Vec::<String>::new()), "正文");
}
