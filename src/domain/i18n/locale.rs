use serde::{Deserialize, Serialize};

/// A language with an optional country, e.g. `es` or `es_ES`.
/// Language is stored lowercase and country uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    language: String,
    country: Option<String>,
}

impl Locale {
    pub fn new(language: &str, country: Option<&str>) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            country: country
                .filter(|c| !c.is_empty())
                .map(|c| c.to_ascii_uppercase()),
        }
    }

    /// Parse `es`, `es_ES` or `es-ES`. Returns `None` for anything that is not
    /// a 2-3 letter language optionally followed by a 2 letter country.
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        let mut parts = tag.split(|c| c == '_' || c == '-');

        let language = parts.next()?;
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return None;
        }

        let country = match parts.next() {
            Some(country)
                if country.len() == 2 && country.chars().all(|c| c.is_ascii_alphabetic()) =>
            {
                Some(country)
            }
            Some(_) => return None,
            None => None,
        };

        if parts.next().is_some() {
            return None;
        }

        Some(Self::new(language, country))
    }

    /// Pick the preferred locale from an `Accept-Language` header value,
    /// honouring q-weights. Wildcards and malformed tags are skipped.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        let mut candidates: Vec<(f32, usize, Locale)> = header
            .split(',')
            .enumerate()
            .filter_map(|(position, entry)| {
                let mut fields = entry.split(';');
                let tag = fields.next()?.trim();
                let weight = fields
                    .find_map(|f| f.trim().strip_prefix("q="))
                    .map(|q| q.trim().parse::<f32>().unwrap_or(0.0))
                    .unwrap_or(1.0);

                if !weight.is_finite() || weight <= 0.0 || weight > 1.0 {
                    return None;
                }

                Locale::parse(tag).map(|locale| (weight, position, locale))
            })
            .collect();

        candidates.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
        candidates.into_iter().next().map(|(_, _, locale)| locale)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Language-only locales for Spanish and Catalan are narrowed to Spain,
    /// which is the only country bundle shipped for them.
    pub fn specific(&self) -> Self {
        if self.country.is_some() {
            return self.clone();
        }

        match self.language.as_str() {
            "es" | "ca" => Self::new(&self.language, Some("ES")),
            _ => self.clone(),
        }
    }

    /// Bundle suffixes to try, most specific first: `es_ES`, `es`
    pub fn bundle_candidates(&self) -> Vec<String> {
        match &self.country {
            Some(country) => vec![format!("{}_{}", self.language, country), self.language.clone()],
            None => vec![self.language.clone()],
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("es", Some("ES"))
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}_{}", self.language, country),
            None => write!(f, "{}", self.language),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s).ok_or_else(|| format!("Invalid locale: {}", s))
    }
}
