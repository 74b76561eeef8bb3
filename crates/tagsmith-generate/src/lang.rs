use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Inclusive code-point range with punctuation holes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageAlphabet {
    pub start: u32,
    pub end: u32,
    pub excluded: &'static [u32],
}

pub const ENGLISH: LanguageAlphabet = LanguageAlphabet {
    start: 65,
    end: 122,
    excluded: &[91, 92, 93, 94, 95, 96],
};

pub const RUSSIAN: LanguageAlphabet = LanguageAlphabet {
    start: 1025,
    end: 1105,
    excluded: &[
        1026, 1027, 1028, 1029, 1030, 1031, 1032, 1033, 1034, 1035, 1036, 1037, 1038, 1039,
    ],
};

pub const CHINESE: LanguageAlphabet = LanguageAlphabet {
    start: 19968,
    end: 40869,
    excluded: &[],
};

impl LanguageAlphabet {
    /// Number of code points that can be drawn.
    pub fn len(&self) -> u32 {
        (self.end - self.start + 1) - self.excluded.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, ch: char) -> bool {
        let code = ch as u32;
        code >= self.start && code <= self.end && !self.excluded.contains(&code)
    }

    /// Picks one rune uniformly, stepping over the holes.
    pub fn random_char(&self, rng: &mut dyn RngCore) -> char {
        let mut code = self.start + rng.random_range(0..self.len());
        // excluded is sorted, so each hole at or below the cursor shifts it once
        for hole in self.excluded {
            if *hole <= code {
                code += 1;
            }
        }
        char::from_u32(code).unwrap_or('?')
    }

    pub fn random_string(&self, len: usize, rng: &mut dyn RngCore) -> String {
        (0..len).map(|_| self.random_char(rng)).collect()
    }
}

/// Alphabet selector for random strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Russian,
    Chinese,
}

impl Language {
    /// Resolves a three-letter code; unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "rus" => Language::Russian,
            "chi" => Language::Chinese,
            _ => Language::English,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "eng",
            Language::Russian => "rus",
            Language::Chinese => "chi",
        }
    }

    pub fn alphabet(self) -> &'static LanguageAlphabet {
        match self {
            Language::English => &ENGLISH,
            Language::Russian => &RUSSIAN,
            Language::Chinese => &CHINESE,
        }
    }
}

const ASCII_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Random string over ASCII letters.
pub fn ascii_letters(len: usize, rng: &mut dyn RngCore) -> String {
    (0..len)
        .map(|_| char::from(ASCII_LETTERS[rng.random_range(0..ASCII_LETTERS.len())]))
        .collect()
}
