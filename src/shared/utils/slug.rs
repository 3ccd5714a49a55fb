use std::time::{SystemTime, UNIX_EPOCH};

/// Transliterate a single Cyrillic letter to its Latin spelling
fn transliterate(letter: char) -> Option<&'static str> {
    let mapped = match letter {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "j",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ы' => "i",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(mapped)
}

/// Build a URL-safe slug from a human-readable name.
///
/// Cyrillic input is transliterated so Russian titles produce readable
/// slugs; everything that is not alphanumeric collapses into single dashes.
pub fn slugify(source: &str) -> String {
    let mut slug = String::with_capacity(source.len());
    let mut previous_dash = true; // suppress a leading dash

    for letter in source.to_lowercase().chars() {
        if let Some(mapped) = transliterate(letter) {
            slug.push_str(mapped);
            previous_dash = false;
        } else if letter.is_ascii_alphanumeric() {
            slug.push(letter);
            previous_dash = false;
        } else if !previous_dash {
            slug.push('-');
            previous_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Resolve a slug collision by appending the current unix timestamp
pub fn generate_unique_slug(slug: &str) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}-{}", slug, timestamp)
}
