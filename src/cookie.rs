use wasm_bindgen::JsCast;

/// Client-readable cookie carrying the current user's id. The auth token
/// itself is HttpOnly and never visible here.
pub const USER_ID_COOKIE: &str = "id_cookie";

/// Read a named cookie from `document.cookie`. Returns `None` outside a
/// browser context, or when the cookie is absent or empty.
pub fn read_cookie(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let document: web_sys::HtmlDocument = document.dyn_into().ok()?;
    let header = document.cookie().ok()?;
    find_cookie(&header, name)
}

fn find_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        let value = value.trim();
        (key.trim() == name && !value.is_empty()).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_cookie_in_header() {
        let header = "theme=dark; id_cookie=u-42; lang=en";
        assert_eq!(find_cookie(header, "id_cookie"), Some("u-42".to_string()));
        assert_eq!(find_cookie(header, "theme"), Some("dark".to_string()));
        assert_eq!(find_cookie(header, "lang"), Some("en".to_string()));
    }

    #[test]
    fn test_find_cookie_absent_or_empty() {
        assert_eq!(find_cookie("", "id_cookie"), None);
        assert_eq!(find_cookie("theme=dark", "id_cookie"), None);
        assert_eq!(find_cookie("id_cookie=", "id_cookie"), None);
        // A name that is only a prefix of another cookie must not match.
        assert_eq!(find_cookie("id_cookie_v2=x", "id_cookie"), None);
    }
}
