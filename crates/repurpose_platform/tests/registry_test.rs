//! Tests for the platform registry.

use repurpose_platform::{
    PlatformConfig, PlatformErrorKind, PlatformId, PlatformOverride, PlatformRegistry,
    get_all_platforms, get_platform_adapter,
};

#[test]
fn test_unknown_platform_is_not_found() {
    let registry = PlatformRegistry::builtin();
    let err = get_platform_adapter(&registry, "unknown").expect_err("unknown platform");
    assert_eq!(
        err.kind(),
        &PlatformErrorKind::NotFound("unknown".to_string())
    );
    assert!(err.to_string().contains("Platform not found: unknown"));
}

#[test]
fn test_lookup_is_case_sensitive() {
    let registry = PlatformRegistry::builtin();
    assert!(registry.get("Weibo").is_err());
    assert!(registry.get("weibo").is_ok());
}

#[test]
fn test_all_platforms_in_registry_order() {
    let registry = PlatformRegistry::builtin();
    let ids: Vec<String> = get_all_platforms(&registry)
        .iter()
        .map(|config| config.id().to_string())
        .collect();
    assert_eq!(ids, ["weibo", "xiaohongshu", "douyin", "wechat", "zhihu"]);
}

#[test]
fn test_builtin_limits() {
    let registry = PlatformRegistry::builtin();
    let expected = [
        (PlatformId::Weibo, 140, true, 5),
        (PlatformId::Xiaohongshu, 1000, true, 10),
        (PlatformId::Douyin, 55, true, 6),
        (PlatformId::Wechat, 50000, false, 0),
        (PlatformId::Zhihu, 10000, false, 5),
    ];
    for (id, max_chars, hashtags, max_hashtags) in expected {
        let config = registry.config(id).expect("builtin platform");
        assert_eq!(*config.max_chars(), max_chars, "{}", id);
        assert_eq!(*config.hashtags(), hashtags, "{}", id);
        assert_eq!(*config.max_hashtags(), max_hashtags, "{}", id);
    }
}

#[test]
fn test_adapter_borrows_registry_config() {
    let registry = PlatformRegistry::builtin();
    let adapter = get_platform_adapter(&registry, "zhihu").expect("zhihu registered");
    assert!(std::ptr::eq(
        adapter.config(),
        registry.config(PlatformId::Zhihu).expect("zhihu")
    ));
}

#[test]
fn test_custom_registry_rejects_duplicates() {
    let weibo = PlatformConfig::builtin(PlatformId::Weibo);
    let err = PlatformRegistry::from_configs(vec![weibo.clone(), weibo])
        .expect_err("duplicate ids");
    assert!(matches!(err.kind(), PlatformErrorKind::InvalidConfig(_)));
}

#[test]
fn test_custom_registry_keeps_order_and_subset() {
    let registry = PlatformRegistry::from_configs(vec![
        PlatformConfig::builtin(PlatformId::Zhihu),
        PlatformConfig::builtin(PlatformId::Weibo),
    ])
    .expect("valid registry");

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.all()[0].id(), &PlatformId::Zhihu);
    assert!(registry.adapter("douyin").is_err());
}

#[test]
fn test_builder_defaults_hashtag_cap() {
    let config = PlatformConfig::builder()
        .id(PlatformId::Weibo)
        .name("Weibo Pro")
        .max_chars(2000usize)
        .hashtags(true)
        .build()
        .expect("complete config");

    assert_eq!(*config.max_hashtags(), 5);
    assert!(config.special_formatting().is_none());
}

#[test]
fn test_zero_character_limit_rejected() {
    let config = PlatformConfig::builder()
        .id(PlatformId::Douyin)
        .name("抖音")
        .max_chars(0usize)
        .build()
        .expect("complete config");

    let err = PlatformRegistry::from_configs(vec![config]).expect_err("zero limit");
    assert!(matches!(err.kind(), PlatformErrorKind::InvalidConfig(_)));
}

#[test]
fn test_overrides_produce_new_registry() {
    let registry = PlatformRegistry::builtin();
    let longer = PlatformOverride::default().with_max_chars(2000).with_max_hashtags(3);
    let adjusted = registry
        .with_overrides([(PlatformId::Weibo, &longer)])
        .expect("valid override");

    assert_eq!(*adjusted.config(PlatformId::Weibo).expect("weibo").max_chars(), 2000);
    assert_eq!(*adjusted.config(PlatformId::Weibo).expect("weibo").max_hashtags(), 3);
    assert_eq!(*registry.config(PlatformId::Weibo).expect("weibo").max_chars(), 140);

    let adapter = adjusted.adapter("weibo").expect("weibo");
    let formatted = adapter.format_content(&"字".repeat(500), &["a", "b", "c", "d"]);
    assert_eq!(formatted.content().chars().count(), 500);
    assert_eq!(formatted.hashtags().len(), 3);
}

#[test]
fn test_override_enabling_hashtags_on_wechat_keeps_zero_cap() {
    let registry = PlatformRegistry::builtin();
    let enable = PlatformOverride::default().with_hashtags(true);
    let adjusted = registry
        .with_overrides([(PlatformId::Wechat, &enable)])
        .expect("valid override");

    let adapter = adjusted.adapter("wechat").expect("wechat");
    let formatted = adapter.format_content("文章", &["a"]);
    assert!(formatted.hashtags().is_empty());
}

#[test]
fn test_zero_limit_override_rejected() {
    let registry = PlatformRegistry::builtin();
    let broken = PlatformOverride::default().with_max_chars(0);
    assert!(registry.with_overrides([(PlatformId::Zhihu, &broken)]).is_err());
}

#[test]
fn test_platform_override_from_toml() {
    let adjustment: PlatformOverride = toml::from_str(
        r#"
        max_chars = 300
        special_formatting = "短小精悍"
        "#,
    )
    .expect("valid TOML");

    let config = adjustment.apply(&PlatformConfig::builtin(PlatformId::Douyin));
    assert_eq!(*config.max_chars(), 300);
    assert_eq!(config.special_formatting().as_deref(), Some("短小精悍"));
    assert_eq!(*config.max_hashtags(), 6);
}

#[test]
fn test_config_json_shape() {
    let json = serde_json::to_value(PlatformConfig::builtin(PlatformId::Xiaohongshu))
        .expect("serializable");
    assert_eq!(json["id"], "xiaohongshu");
    assert_eq!(json["maxChars"], 1000);
    assert_eq!(json["maxHashtags"], 10);
    assert_eq!(json["supportsMarkdown"], false);
}
