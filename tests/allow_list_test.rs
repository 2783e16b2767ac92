use mediascan::{
    default_allow_list, extension_of, ExtensionAllowList, MediaScanner, ScanConfig,
    DEFAULT_MEDIA_EXTENSIONS,
};

#[test]
fn test_extension_of() {
    assert_eq!(extension_of("a.jpg"), "jpg");
    assert_eq!(extension_of("PHOTO.JPG"), "jpg");
    assert_eq!(extension_of("archive.tar.gz"), "gz");
    assert_eq!(extension_of("clip.final.mp4"), "mp4");
    assert_eq!(extension_of("README"), "readme");
    assert_eq!(extension_of("file."), "");
    assert_eq!(extension_of(".hidden"), "hidden");
}

#[test]
fn test_default_allow_list() {
    let list = default_allow_list();
    assert_eq!(list.len(), 9);
    for ext in DEFAULT_MEDIA_EXTENSIONS {
        assert!(list.contains(ext));
        assert!(list.contains(&ext.to_uppercase()));
    }
    assert!(!list.contains("txt"));
    assert!(!list.contains(""));
    assert_eq!(&ExtensionAllowList::default(), list);
}

#[test]
fn test_matches_name() {
    let list = default_allow_list();
    assert!(list.matches_name("Video.Mp4"));
    assert!(list.matches_name("clip.final.mp4"));
    assert!(!list.matches_name("archive.tar.gz"));
    assert!(!list.matches_name("README"));
    assert!(!list.matches_name("image."));
}

#[test]
fn test_custom_list_normalizes_input() {
    let list = ExtensionAllowList::new([".TIFF", "Avif", "heic"]);
    assert_eq!(list.to_sorted_vec(), vec!["avif", "heic", "tiff"]);
    assert!(list.contains("TIFF"));
    assert!(!list.contains("jpg"));
}

#[test]
fn test_config_defaults_when_empty() {
    let config: ScanConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ScanConfig::default());
    assert_eq!(&config.extensions, default_allow_list());
}

#[test]
fn test_config_overrides_extensions() {
    let config: ScanConfig = serde_json::from_str(r#"{"extensions": [".PNG", "svg"]}"#).unwrap();
    let scanner = MediaScanner::from_config(&config);
    assert_eq!(scanner.extensions().to_sorted_vec(), vec!["png", "svg"]);

    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"extensions":["png","svg"]}"#);
}
