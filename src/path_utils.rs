use std::path::Path;

// URI でそのまま使える文字（RFC 3986 の非予約文字 + パス区切り）
fn is_uri_safe(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~' | b'/' | b':')
}

/// ローカルパスを file:// URI に変換
pub fn path_to_uri(path: &Path) -> String {
    let mut text = path.to_string_lossy().into_owned();

    if cfg!(windows) {
        text = text.replace('\\', "/");
    }
    // "C:/..." のようなドライブ付きパスも "/C:/..." にそろえる
    if !text.starts_with('/') {
        text.insert(0, '/');
    }

    let mut uri = String::with_capacity(text.len() + 8);
    uri.push_str("file://");
    for byte in text.bytes() {
        if is_uri_safe(byte) {
            uri.push(byte as char);
        } else {
            uri.push_str(&format!("%{:02X}", byte));
        }
    }
    uri
}
