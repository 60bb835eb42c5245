use std::collections::BTreeSet;

/// Seed genres used when the user picked none.
pub const DEFAULT_SEED_GENRES: [&str; 2] = ["pop", "rock"];

/// The catalog accepts at most this many seeds per recommendation request.
pub const MAX_SEED_GENRES: usize = 5;

/// Genre tags picked by the user. Behaves like a set: a tag is either selected
/// or not, and toggling twice is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreSelection {
    genres: BTreeSet<String>,
}

impl GenreSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        for tag in tags {
            selection.select(tag.as_ref());
        }
        selection
    }

    /// Adds `genre`. Tags are trimmed and lowercased; blank tags are ignored.
    pub fn select(&mut self, genre: &str) -> &mut Self {
        let genre = normalize(genre);
        if !genre.is_empty() {
            self.genres.insert(genre);
        }
        self
    }

    pub fn deselect(&mut self, genre: &str) -> &mut Self {
        self.genres.remove(&normalize(genre));
        self
    }

    /// Flips the selection state of `genre` and returns whether it is now selected.
    ///
    /// Meant for interactive pickers where tapping a genre twice unselects it.
    /// The CLI does not use it: a repeated `--genre` flag goes through
    /// [`GenreSelection::select`], so naming a genre twice still selects it.
    pub fn toggle(&mut self, genre: &str) -> bool {
        let genre = normalize(genre);
        if genre.is_empty() {
            return false;
        }
        if self.genres.remove(&genre) {
            false
        } else {
            self.genres.insert(genre);
            true
        }
    }

    pub fn contains(&self, genre: &str) -> bool {
        self.genres.contains(&normalize(genre))
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.genres.iter().map(String::as_str)
    }

    /// Drops every tag not present in `available`, returning the rejected ones.
    pub fn retain_available(&mut self, available: &[String]) -> Vec<String> {
        let mut rejected = Vec::new();
        self.genres.retain(|g| {
            let keep = available.iter().any(|a| a == g);
            if !keep {
                rejected.push(g.clone());
            }
            keep
        });
        rejected
    }

    /// Seeds for a recommendation request: the selection itself, or the
    /// default pair when nothing is selected. Capped at [`MAX_SEED_GENRES`].
    pub fn seeds(&self) -> Vec<String> {
        if self.genres.is_empty() {
            return DEFAULT_SEED_GENRES.iter().map(|g| g.to_string()).collect();
        }

        self.genres.iter().take(MAX_SEED_GENRES).cloned().collect()
    }
}

fn normalize(genre: &str) -> String {
    genre.trim().to_lowercase()
}
