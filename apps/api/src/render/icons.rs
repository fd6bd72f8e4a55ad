/// Maps the short icon names used in the content sheets to ion-icon names.
pub fn ion_icon(key: &str) -> Option<&'static str> {
    let name = match key {
        "code" => "code-outline",
        "brain" => "bulb-outline",
        "coffee" => "cafe-outline",
        "puzzle-piece" => "extension-puzzle-outline",
        "briefcase" => "briefcase-outline",
        "graduation-cap" => "school-outline",
        "school" => "library-outline",
        "book" => "book-outline",
        "linkedin" => "logo-linkedin",
        "github" => "logo-github",
        "twitter" => "logo-twitter",
        "instagram" => "logo-instagram",
        "facebook" => "logo-facebook",
        "email" => "mail-outline",
        "phone" => "phone-portrait-outline",
        "resume" => "document-outline",
        _ => return None,
    };
    Some(name)
}

pub fn ion_icon_or(key: &str, fallback: &'static str) -> &'static str {
    ion_icon(key).unwrap_or(fallback)
}
