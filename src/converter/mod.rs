pub mod format;
pub mod tokenizer;

use crate::error::Result;
use crate::{CaseStyle, Config};
use lazy_static::lazy_static;
use tokenizer::DigitPolicy;

lazy_static! {
    static ref SHARED: Converter = Converter::default();
}

/// Case converter configured with a default style and digit policy.
///
/// Conversions are pure, so one converter can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    style: CaseStyle,
    digits: DigitPolicy,
}

impl Converter {
    pub fn new(config: &Config) -> Self {
        log::debug!(
            "creating converter: style={}, digits={:?}",
            config.style,
            config.digits
        );

        Self {
            style: config.style,
            digits: config.digits,
        }
    }

    /// Converter with default settings, used by the crate-level functions
    pub fn shared() -> &'static Converter {
        &SHARED
    }

    pub fn style(&self) -> CaseStyle {
        self.style
    }

    pub fn digits(&self) -> DigitPolicy {
        self.digits
    }

    pub fn convert(&self, input: &str, style: CaseStyle) -> Result<String> {
        log::trace!("converting {:?} to {}", input, style);

        match style {
            CaseStyle::Camel => Ok(self.camel(input)),
            CaseStyle::Kebab => self.kebab(input),
            CaseStyle::Dot => Ok(self.dot(input)),
        }
    }

    /// Convert to the configured style
    pub fn convert_default(&self, input: &str) -> Result<String> {
        self.convert(input, self.style)
    }

    pub fn camel(&self, input: &str) -> String {
        format::camel(input, self.digits)
    }

    pub fn kebab(&self, input: &str) -> Result<String> {
        format::kebab(input)
    }

    pub fn dot(&self, input: &str) -> String {
        format::dot(input, self.digits)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
