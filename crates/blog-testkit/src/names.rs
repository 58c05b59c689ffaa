//! Fake-name sources for fixture authors.

use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::fixtures::FixtureError;

/// A source of synthetic human names.
pub trait NameSource: Send + Sync {
    fn first_name(&self, rng: &mut StdRng) -> Result<String, FixtureError>;

    fn last_name(&self, rng: &mut StdRng) -> Result<String, FixtureError>;
}

/// English names from the `fake` crate, drawn from the caller's RNG so a
/// seed reproduces them. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleNames;

impl NameSource for SampleNames {
    fn first_name(&self, rng: &mut StdRng) -> Result<String, FixtureError> {
        Ok(FirstName().fake_with_rng(rng))
    }

    fn last_name(&self, rng: &mut StdRng) -> Result<String, FixtureError> {
        Ok(LastName().fake_with_rng(rng))
    }
}

/// A user-supplied pair of name lists.
#[derive(Debug, Clone, Default)]
pub struct NameLists {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
}

impl NameSource for NameLists {
    fn first_name(&self, rng: &mut StdRng) -> Result<String, FixtureError> {
        pick(&self.first_names, rng)
    }

    fn last_name(&self, rng: &mut StdRng) -> Result<String, FixtureError> {
        pick(&self.last_names, rng)
    }
}

fn pick<S: AsRef<str>>(names: &[S], rng: &mut StdRng) -> Result<String, FixtureError> {
    let usable: Vec<&str> = names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !name.trim().is_empty())
        .collect();

    usable
        .choose(rng)
        .map(|name| name.to_string())
        .ok_or(FixtureError::NameSourceUnavailable)
}
