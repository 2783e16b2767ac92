use mediascan::{scan_directory, MediaKind, MemoryDirectory, MimeResolver};

#[test]
fn test_mime_guess() {
    assert_eq!(MimeResolver::guess_mime_type("a.jpg"), "image/jpeg");
    assert_eq!(MimeResolver::guess_mime_type("b.PNG"), "image/png");
    assert_eq!(MimeResolver::guess_mime_type("c.mp4"), "video/mp4");
    assert_eq!(MimeResolver::guess_mime_type("README"), "application/octet-stream");
}

#[test]
fn test_media_kind() {
    assert_eq!(MimeResolver::media_kind("a.gif"), MediaKind::Image);
    assert_eq!(MimeResolver::media_kind("a.webp"), MediaKind::Image);
    assert_eq!(MimeResolver::media_kind("a.webm"), MediaKind::Video);
    assert_eq!(MimeResolver::media_kind("a.mov"), MediaKind::Video);
    assert_eq!(MimeResolver::media_kind("a.txt"), MediaKind::Other);
    assert_eq!(MimeResolver::media_kind("noext"), MediaKind::Other);
}

#[tokio::test]
async fn test_split_scan_result_by_kind() {
    let dir = MemoryDirectory::new("memory:///mixed")
        .with_file("one.jpeg", b"")
        .with_file("two.mkv", b"")
        .with_file("three.png", b"");

    let entries = scan_directory(&dir).await.unwrap();
    let (images, videos): (Vec<_>, Vec<_>) = entries
        .iter()
        .partition(|e| MimeResolver::media_kind_of(&***e) == MediaKind::Image);

    assert_eq!(images.len(), 2);
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].name(), "two.mkv");
}
