use serde::{Deserialize, Serialize};

/// The artist profile shown under the last layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub bio: String,
    pub genres: Vec<String>,
    pub equipment: String,
    pub contact: ProfileContact,
    pub profile_image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProfileContact {
    pub email: Option<String>,
    pub twitter: Option<String>,
    pub soundcloud: Option<String>,
    pub bandcamp: Option<String>,
    pub youtube: Option<String>,
    pub youtube_vocaloid: Option<String>,
    pub instagram: Option<String>,
}

impl ProfileContact {
    /// `(label, target)` pairs for every non-empty contact, emails as `mailto:`.
    pub fn links(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(email) = filled(&self.email) {
            out.push(("Email", format!("mailto:{email}")));
        }
        for (label, value) in [
            ("Twitter", &self.twitter),
            ("SoundCloud", &self.soundcloud),
            ("Bandcamp", &self.bandcamp),
            ("YouTube", &self.youtube),
            ("YouTube (Vocaloid)", &self.youtube_vocaloid),
            ("Instagram", &self.instagram),
        ] {
            if let Some(v) = filled(value) {
                out.push((label, v.to_string()));
            }
        }
        out
    }
}

fn filled(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// The usage-terms document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub title: String,
    pub last_updated: String,
    pub sections: Vec<LicenseSection>,
    #[serde(default)]
    pub contact: LicenseContact,
}

impl License {
    /// Contact rows that are present, labelled for display.
    pub fn contact_rows(&self) -> Vec<(&'static str, &str)> {
        [
            ("Email", &self.contact.email),
            ("Website", &self.contact.website),
            ("Twitter", &self.contact.twitter),
        ]
        .into_iter()
        .filter_map(|(label, v)| v.as_deref().map(|v| (label, v)))
        .collect()
    }

    /// Lines the page shows before wrapping: title and date, a blank line,
    /// heading and body per section, then the contact block if any.
    pub fn line_count(&self) -> usize {
        let sections: usize = self
            .sections
            .iter()
            .map(|s| 2 + s.content.lines().count())
            .sum();
        let contact = match self.contact_rows().len() {
            0 => 0,
            n => 2 + n,
        };
        2 + sections + contact
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LicenseSection {
    pub id: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LicenseContact {
    pub email: Option<String>,
    pub website: Option<String>,
    pub twitter: Option<String>,
}
