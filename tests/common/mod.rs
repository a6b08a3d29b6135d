//! Shared utilities for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// The route table the frontend ships with, as a config file.
pub const APP_ROUTES: &str = r#"
not_found_page = "NotFoundPage"

[[routes]]
path = "/"
page = "HomePage"

[[routes]]
path = "/login"
page = "LoginPage"

[[routes]]
path = "/signup"
page = "SignupPage"

[[routes]]
path = "/find/password"
page = "FindPasswordPage"

[[routes]]
path = "/mypage"
page = "MyPage"
"#;

/// Write a config file that lives as long as the returned handle.
pub fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
