//! Tests for reading model drafts.

use repurpose_content::Draft;

#[test]
fn test_parses_fenced_json() {
    let response = r##"好的，以下是优化后的内容：

```json
{
  "content": "今日份小确幸 💕\n\n阳光正好",
  "hashtags": ["日常分享", "#生活记录"]
}
```
"##;

    let draft = Draft::from_response(response).expect("valid draft");
    assert_eq!(draft.content(), "今日份小确幸 💕\n\n阳光正好");
    assert_eq!(draft.hashtags(), &vec!["日常分享", "生活记录"]);
}

#[test]
fn test_parses_bare_json_and_unlabelled_fence() {
    let bare = Draft::from_response(r#"  {"content": "hello"}  "#).expect("bare JSON");
    assert_eq!(bare.content(), "hello");
    assert!(bare.hashtags().is_empty());

    let fenced = Draft::from_response("```\n{\"content\": \"hi\", \"hashtags\": []}\n```")
        .expect("unlabelled fence");
    assert_eq!(fenced.content(), "hi");
}

#[test]
fn test_deduplicates_hashtags() {
    let draft = Draft::from_response(r##"{"content": "x", "hashtags": ["a", "#a", " ", "b"]}"##)
        .expect("valid draft");
    assert_eq!(draft.hashtags(), &vec!["a", "b"]);
}

#[test]
fn test_rejects_prose() {
    let err = Draft::from_response("Sorry, I cannot help with that.").expect_err("not JSON");
    assert!(err.message.contains("Failed to parse draft"));
}

#[test]
fn test_falls_back_on_unparseable_response() {
    let previous = Draft::new("原来的内容".to_string(), vec!["旧标签".to_string()]);
    let draft = Draft::from_response_or("```json\n{broken\n```", previous.clone());
    assert_eq!(draft, previous);
}

#[test]
fn test_into_parts() {
    let (content, hashtags) = Draft::new("c".to_string(), vec!["t".to_string()]).into_parts();
    assert_eq!(content, "c");
    assert_eq!(hashtags, ["t"]);
}
