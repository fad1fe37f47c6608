use std::collections::HashSet;

use crate::error::ConfigError;
use crate::model::{KeyScheme, SchemeCode};

/// The home-network key schemes eligible for assignment to new profiles.
///
/// Assignment is cyclic over the configured order: the `n`-th profile an
/// operator generates gets scheme `n mod len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySchemeRegistry {
    schemes: Vec<KeyScheme>,
}

impl KeySchemeRegistry {
    pub fn new(schemes: Vec<KeyScheme>) -> Result<Self, ConfigError> {
        if schemes.is_empty() {
            return Err(ConfigError::NoKeySchemes);
        }

        let mut seen = HashSet::with_capacity(schemes.len());
        for scheme in &schemes {
            scheme.validate()?;
            if !seen.insert(scheme.code) {
                return Err(ConfigError::DuplicateSchemeCode { code: scheme.code });
            }
        }

        Ok(Self { schemes })
    }

    pub fn select(&self, index: usize) -> &KeyScheme {
        &self.schemes[index % self.schemes.len()]
    }

    pub fn get(&self, code: SchemeCode) -> Option<&KeyScheme> {
        self.schemes.iter().find(|s| s.code == code)
    }

    pub fn contains(&self, code: SchemeCode) -> bool {
        self.get(code).is_some()
    }

    pub fn codes(&self) -> impl Iterator<Item = SchemeCode> + '_ {
        self.schemes.iter().map(|s| s.code)
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}
