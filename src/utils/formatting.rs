//! Formatting utilities used for CLI output.

use crate::models::GeoPoint;

/// Wrap free text (descriptions, observations) under a label.
pub fn wrap_block(text: &str, width: usize, indent: &str) -> String {
    let options = textwrap::Options::new(width)
        .initial_indent(indent)
        .subsequent_indent(indent);
    textwrap::fill(text, options)
}

pub fn describe_location(location: Option<GeoPoint>) -> String {
    match location {
        Some(p) => p.to_string(),
        None => "Not set".to_string(),
    }
}

/// Data URIs are huge; show kind and size instead.
pub fn describe_photo(photo: Option<&str>) -> String {
    match photo {
        Some(uri) if !uri.is_empty() => {
            let mime = uri
                .strip_prefix("data:")
                .and_then(|rest| rest.split(';').next())
                .unwrap_or("image");
            format!("{} ({} KB encoded)", mime, uri.len().div_ceil(1024))
        }
        _ => "No photo".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_summary_hides_payload() {
        assert_eq!(describe_photo(None), "No photo");
        assert_eq!(describe_photo(Some("")), "No photo");
        assert_eq!(
            describe_photo(Some("data:image/jpeg;base64,/9j/")),
            "image/jpeg (1 KB encoded)"
        );
    }

    #[test]
    fn wrapped_text_keeps_indent() {
        let out = wrap_block("fundação concluída sem ressalvas", 14, "  ");
        assert!(out.lines().all(|l| l.starts_with("  ")));
        assert!(out.lines().count() > 1);
    }
}
