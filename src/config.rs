use json::{JsonValue, object};

use crate::{
    error::{BrighterError, Result},
    texture::Shape2D,
    transform::brighten::{BrightenTransform, DEFAULT_OFFSET, Overflow, Strategy},
};

/// Parameters of a brighten kernel.
///
/// ```json
/// { "offset": 10, "overflow": "wrap", "strategy": "auto" }
/// ```
///
/// `overflow` defaults to `"wrap"` and `strategy` to `"auto"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightenConfig {
    pub offset: u8,
    pub overflow: Overflow,
    /// `None` picks a strategy from the image shape.
    pub strategy: Option<Strategy>,
}

impl Default for BrightenConfig {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            overflow: Overflow::Wrap,
            strategy: None,
        }
    }
}

impl BrightenConfig {
    pub fn from_json(json_string: &str) -> Result<BrightenConfig> {
        let json = json::parse(json_string)?;
        if !json.is_object() {
            return Err(config_error("Expected a config object"));
        }

        let offset = match json["offset"].as_u8() {
            Some(val) => val,
            None => return Err(config_error("Couldn't parse offset, expected 0..=255")),
        };

        let overflow = if json["overflow"].is_null() {
            Overflow::default()
        } else {
            match json["overflow"].as_str() {
                Some(s) => s.parse::<Overflow>()?,
                None => return Err(config_error("Couldn't parse overflow")),
            }
        };

        let strategy = if json["strategy"].is_null() {
            None
        } else {
            match json["strategy"].as_str() {
                Some("auto") => None,
                Some(s) => Some(s.parse::<Strategy>()?),
                None => return Err(config_error("Couldn't parse strategy")),
            }
        };

        Ok(BrightenConfig {
            offset,
            overflow,
            strategy,
        })
    }

    pub fn to_json(&self) -> String {
        let strategy = self.strategy.map_or("auto", |s| s.name());
        let data = object! { offset: self.offset, overflow: self.overflow, strategy: strategy };
        data.dump()
    }

    /// Build the transform this config describes for an image of `shape_hint`.
    pub fn build(&self, shape_hint: Shape2D) -> BrightenTransform {
        let strategy = self
            .strategy
            .unwrap_or_else(|| Strategy::auto(shape_hint));
        BrightenTransform::new(strategy, self.offset, self.overflow)
    }
}

fn config_error(msg: &str) -> BrighterError {
    BrighterError::Config(String::from(msg))
}

impl From<Overflow> for JsonValue {
    fn from(overflow: Overflow) -> Self {
        JsonValue::String(String::from(overflow.name()))
    }
}

impl From<Strategy> for JsonValue {
    fn from(strategy: Strategy) -> Self {
        JsonValue::String(String::from(strategy.name()))
    }
}
