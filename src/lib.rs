pub mod config;
pub mod converter;
pub mod error;
pub mod numeric;
pub mod style;
pub mod value;

pub use config::Config;
pub use converter::tokenizer::DigitPolicy;
pub use converter::Converter;
pub use error::{Error, Result};
pub use numeric::{add_numbers, add_values};
pub use style::CaseStyle;
pub use value::convert_value;

/// Convert `input` to camelCase, e.g. `"XML HTTP REQUEST"` becomes `"xmlHttpRequest"`
pub fn to_camel_case(input: &str) -> String {
    Converter::shared().camel(input)
}

/// Convert `input` to kebab-case; blank or separator-only input is an error
pub fn to_kebab_case(input: &str) -> Result<String> {
    Converter::shared().kebab(input)
}

/// Convert `input` to dot.case, e.g. `"helloWorld"` becomes `"hello.world"`
pub fn to_dot_case(input: &str) -> String {
    Converter::shared().dot(input)
}

/// Convert `input` to `style` with default settings
pub fn convert(input: &str, style: CaseStyle) -> Result<String> {
    Converter::shared().convert(input, style)
}
