use url::Url;

/// Extract the video identifier from a YouTube URL.
///
/// Two shapes are accepted:
/// - `youtube.com/...?v=<id>` (the `v` query parameter on the canonical host)
/// - `youtu.be/<id>`, scheme and `www.` optional
///
/// Anything else yields `None`. Pure function, no I/O.
pub fn video_id(input: &str) -> Option<String> {
    if let Ok(u) = Url::parse(input) {
        if matches!(u.host_str(), Some("youtube.com") | Some("www.youtube.com")) {
            return u
                .query_pairs()
                .find(|(k, _)| k == "v")
                .map(|(_, v)| v.into_owned())
                .filter(|id| !id.is_empty());
        }
    }

    short_link_id(input)
}

/// `youtu.be/<id>` form. The identifier runs up to the next `?` or `&`.
fn short_link_id(input: &str) -> Option<String> {
    let rest = input
        .strip_prefix("https://")
        .or_else(|| input.strip_prefix("http://"))
        .unwrap_or(input);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    let rest = rest.strip_prefix("youtu.be/")?;

    let id: String = rest.chars().take_while(|c| *c != '?' && *c != '&').collect();
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url_returns_v_parameter() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?v=abc123").as_deref(),
            Some("abc123")
        );
        assert_eq!(
            video_id("https://youtube.com/watch?v=dQw4w9WgXcQ&t=42").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn watch_url_takes_first_v_value() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?v=first&v=second").as_deref(),
            Some("first")
        );
    }

    #[test]
    fn short_link_returns_path_segment() {
        assert_eq!(video_id("https://youtu.be/xyz789").as_deref(), Some("xyz789"));
        assert_eq!(
            video_id("https://youtu.be/xyz789?t=5").as_deref(),
            Some("xyz789")
        );
        assert_eq!(
            video_id("http://www.youtu.be/xyz789&feature=share").as_deref(),
            Some("xyz789")
        );
    }

    #[test]
    fn short_link_without_scheme_is_accepted() {
        assert_eq!(video_id("youtu.be/abc123").as_deref(), Some("abc123"));
    }

    #[test]
    fn unrecognized_shapes_yield_none() {
        assert_eq!(video_id("not-a-url"), None);
        assert_eq!(video_id("https://vimeo.com/watch?v=abc123"), None);
        assert_eq!(video_id("https://www.youtube.com/watch"), None);
        assert_eq!(video_id("https://www.youtube.com/watch?v="), None);
        assert_eq!(video_id("https://youtu.be/"), None);
        assert_eq!(video_id(""), None);
    }
}
