use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Cookie the server stores the anti-forgery token under.
pub const CSRF_COOKIE: &str = "csrftoken";
/// Header mutating requests carry the token in.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Current anti-forgery token from the document cookie jar, if one is set.
pub fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let jar = document.dyn_into::<HtmlDocument>().ok()?.cookie().ok()?;
    token_from_jar(&jar, CSRF_COOKIE)
}

/// Finds `name` in a semicolon-separated cookie string, tolerating
/// whitespace around each entry. A cookie whose name merely starts with
/// `name` does not match.
fn token_from_jar(jar: &str, name: &str) -> Option<String> {
    jar.split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('=').map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_finds_token_among_multiple_cookies() {
        let jar = "sessionid=abc123; csrftoken=tok-456; theme=dark";
        assert_eq!(token_from_jar(jar, "csrftoken"), Some("tok-456".to_string()));
    }

    #[wasm_bindgen_test]
    fn test_tolerates_surrounding_whitespace() {
        let jar = "  csrftoken=spaced-token  ;sessionid=abc";
        assert_eq!(
            token_from_jar(jar, "csrftoken"),
            Some("spaced-token".to_string())
        );
    }

    #[wasm_bindgen_test]
    fn test_absent_token_is_none() {
        assert_eq!(token_from_jar("", "csrftoken"), None);
        assert_eq!(token_from_jar("sessionid=abc", "csrftoken"), None);
    }

    #[wasm_bindgen_test]
    fn test_longer_cookie_name_does_not_match() {
        let jar = "csrftoken_backup=old; csrftoken=current";
        assert_eq!(token_from_jar(jar, "csrftoken"), Some("current".to_string()));
    }

    #[wasm_bindgen_test]
    fn test_empty_value_is_preserved() {
        assert_eq!(token_from_jar("csrftoken=", "csrftoken"), Some(String::new()));
    }
}
