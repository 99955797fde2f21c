//! Hero Records and the Normalizer
//!
//! Raw payload types for the Superhero API search envelope, and the pure
//! normalization step that maps an arbitrary/partial candidate into the
//! fixed presentation shape a render surface can display.
//!
//! Normalization substitutes a fixed placeholder for textual fields that
//! are null, empty, or one of a small set of sentinel tokens the remote
//! service uses for "missing" (`"-"`, `"null"`, `"none"`). The portrait
//! URL is distinct: absence stays `None` and triggers the placeholder-image
//! path downstream rather than a placeholder string.

use printpdf::image_crate::{self, DynamicImage, GenericImageView};
use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Placeholder shown for missing textual fields.
pub const FIELD_PLACEHOLDER: &str = "Unknown";

/// Raw values the remote service uses to mean "no data".
const SENTINEL_TOKENS: &[&str] = &["-", "null", "none"];

/// One raw result entry returned by the remote search call.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawCandidate {
    /// Hero name as reported by the service.
    #[serde(default)]
    pub name: Option<String>,
    /// Biography block; only `place-of-birth` is consumed.
    #[serde(default)]
    pub biography: Option<RawBiography>,
    /// Work block; only `base` is consumed.
    #[serde(default)]
    pub work: Option<RawWork>,
    /// Image block; only `url` is consumed.
    #[serde(default)]
    pub image: Option<RawImage>,
}

/// Raw `biography` block of a candidate.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawBiography {
    /// Place of birth, possibly a sentinel token.
    #[serde(rename = "place-of-birth", default)]
    pub place_of_birth: Option<String>,
}

/// Raw `work` block of a candidate.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawWork {
    /// Base of operations, possibly a sentinel token.
    #[serde(default)]
    pub base: Option<String>,
}

/// Raw `image` block of a candidate.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawImage {
    /// Portrait URL.
    #[serde(default)]
    pub url: Option<String>,
}

/// The JSON envelope returned by the search endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchEnvelope {
    /// Top-level status flag (`"success"` or `"error"`).
    #[serde(default)]
    pub response: String,
    /// Candidate list, present on success.
    #[serde(default)]
    pub results: Vec<RawCandidate>,
}

impl SearchEnvelope {
    /// Whether the remote service reported a successful search.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.response == "success"
    }
}

/// Normalized, display-ready character data.
///
/// Immutable once constructed; the controller holds it as the current
/// record until the next successful lookup replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroRecord {
    /// Display name, uppercased.
    pub name: String,
    /// Place of birth, or the fixed placeholder.
    pub place_of_birth: String,
    /// Base of operations, or the fixed placeholder.
    pub base: String,
    /// Portrait URL; `None` means "no portrait", not "placeholder text".
    pub portrait_url: Option<String>,
}

impl HeroRecord {
    /// Normalize a raw candidate into the fixed presentation shape.
    ///
    /// Pure function: no side effects, no network access, idempotent for a
    /// given input.
    #[must_use]
    pub fn normalize(raw: &RawCandidate) -> Self {
        let name = clean_field(raw.name.as_deref()).to_uppercase();
        let place_of_birth = clean_field(
            raw.biography
                .as_ref()
                .and_then(|b| b.place_of_birth.as_deref()),
        );
        let base = clean_field(raw.work.as_ref().and_then(|w| w.base.as_deref()));
        let portrait_url = raw
            .image
            .as_ref()
            .and_then(|i| i.url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(ToString::to_string);

        Self {
            name,
            place_of_birth,
            base,
            portrait_url,
        }
    }

    /// Default export file stem: the hero name with spaces replaced by
    /// underscores.
    #[must_use]
    pub fn file_stem(&self) -> String {
        self.name.replace(' ', "_")
    }
}

/// Map a raw field value to its display form.
///
/// Null, empty, and sentinel values become the fixed placeholder; anything
/// else is kept verbatim.
fn clean_field(value: Option<&str>) -> String {
    match value {
        Some(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty()
                || SENTINEL_TOKENS
                    .iter()
                    .any(|tok| trimmed.eq_ignore_ascii_case(tok))
            {
                FIELD_PLACEHOLDER.to_string()
            } else {
                v.to_string()
            }
        }
        None => FIELD_PLACEHOLDER.to_string(),
    }
}

/// Portrait bytes plus the decoded bitmap.
///
/// Owned by the controller for the lifetime of the displayed record and
/// discarded (never persisted) when a new record is loaded or the user
/// navigates back to the menu.
#[derive(Debug, Clone)]
pub struct PortraitImage {
    /// Raw bytes as fetched.
    bytes: Vec<u8>,
    /// Decoded bitmap.
    image: DynamicImage,
}

impl PortraitImage {
    /// Decode fetched bytes into a portrait.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Image`] when the bytes are not a decodable
    /// image.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ExportError> {
        let image = image_crate::load_from_memory(&bytes)
            .map_err(|e| ExportError::Image(e.to_string()))?;
        Ok(Self { bytes, image })
    }

    /// Pixel width of the decoded bitmap.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.dimensions().0
    }

    /// Pixel height of the decoded bitmap.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.dimensions().1
    }

    /// Width / height ratio of the decoded bitmap.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        let (w, h) = self.image.dimensions();
        if h == 0 {
            1.0
        } else {
            w as f32 / h as f32
        }
    }

    /// The decoded bitmap.
    #[must_use]
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// The raw fetched bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn candidate(name: &str, pob: Option<&str>, base: Option<&str>) -> RawCandidate {
        RawCandidate {
            name: Some(name.to_string()),
            biography: Some(RawBiography {
                place_of_birth: pob.map(ToString::to_string),
            }),
            work: Some(RawWork {
                base: base.map(ToString::to_string),
            }),
            image: None,
        }
    }

    #[test]
    fn normalize_uppercases_the_display_name() {
        let record = HeroRecord::normalize(&candidate("Iron Man", None, None));
        assert_eq!(record.name, "IRON MAN");
    }

    #[test]
    fn sentinel_tokens_become_the_placeholder() {
        for sentinel in ["-", "null", "none", "NULL", "None", " - "] {
            let record = HeroRecord::normalize(&candidate("Thor", Some(sentinel), None));
            assert_eq!(record.place_of_birth, FIELD_PLACEHOLDER, "for {sentinel:?}");
        }
    }

    #[test]
    fn missing_blocks_become_the_placeholder() {
        let record = HeroRecord::normalize(&RawCandidate::default());
        assert_eq!(record.name, FIELD_PLACEHOLDER.to_uppercase());
        assert_eq!(record.place_of_birth, FIELD_PLACEHOLDER);
        assert_eq!(record.base, FIELD_PLACEHOLDER);
        assert_eq!(record.portrait_url, None);
    }

    #[test]
    fn real_values_pass_through_verbatim() {
        let record = HeroRecord::normalize(&candidate("Hulk", Some("Dayton, Ohio"), Some("Avengers Tower")));
        assert_eq!(record.place_of_birth, "Dayton, Ohio");
        assert_eq!(record.base, "Avengers Tower");
    }

    #[test]
    fn absent_portrait_url_is_a_distinct_state() {
        let mut raw = candidate("Storm", None, None);
        raw.image = Some(RawImage {
            url: Some("   ".to_string()),
        });
        let record = HeroRecord::normalize(&raw);
        // Blank URL is absence, not placeholder text.
        assert_eq!(record.portrait_url, None);

        raw.image = Some(RawImage {
            url: Some("https://example.com/storm.jpg".to_string()),
        });
        let record = HeroRecord::normalize(&raw);
        assert_eq!(
            record.portrait_url.as_deref(),
            Some("https://example.com/storm.jpg")
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let raw = candidate("Loki", Some("-"), Some("Asgard"));
        let once = HeroRecord::normalize(&raw);
        let twice = HeroRecord::normalize(&raw);
        assert_eq!(once, twice);
    }

    #[test]
    fn envelope_parses_the_service_shape() {
        let json = r#"{
            "response": "success",
            "results": [{
                "name": "Iron Man",
                "biography": {"place-of-birth": "-"},
                "work": {"base": "Stark Tower"},
                "image": {"url": "https://example.com/im.jpg"}
            }]
        }"#;
        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.results.len(), 1);
        let record = HeroRecord::normalize(&envelope.results[0]);
        assert_eq!(record.name, "IRON MAN");
        assert_eq!(record.place_of_birth, FIELD_PLACEHOLDER);
        assert_eq!(record.base, "Stark Tower");
    }

    #[test]
    fn file_stem_replaces_spaces() {
        let record = HeroRecord::normalize(&candidate("Rocket Raccoon", None, None));
        assert_eq!(record.file_stem(), "ROCKET_RACCOON");
    }
}
