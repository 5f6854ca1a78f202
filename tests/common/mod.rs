#![allow(dead_code)]

use std::io::Write;

pub const EXAMPLE_INI: &str = r#"
[bundle]
server_url = https://api.example.com
protocol = https
"#;

pub const EXAMPLE_JSON: &str =
    r#"{"server_url": "https://api.example.com", "protocol": "https", "build": 42}"#;

/// Write `content` to a temp file whose name ends in `suffix`.
pub fn write_temp_metadata(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("Info")
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn exit_code_debug(code: std::process::ExitCode) -> String {
    format!("{:?}", code)
}
