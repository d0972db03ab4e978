use std::fmt;

use crate::foundation::error::{TweenError, TweenResult};

pub use kurbo::Point;

/// Format a float the shortest way that round-trips ("4", "0.67").
pub(crate) fn fmt_number(v: f64) -> String {
    v.to_string()
}

/// An SVG dimension: numeric value plus unit suffix ("10px" -> 10, "px").
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dim {
    /// Numeric magnitude.
    pub value: f64,
    /// Unit suffix; empty for unitless values.
    pub unit: String,
}

impl Dim {
    /// Build a dimension from parts.
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Parse an SVG dimension string such as `"10px"`, `".2"` or `"100%"`.
    pub fn parse(s: &str) -> TweenResult<Self> {
        let s = s.trim();
        let split = s
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(s.len());
        let (number, rest) = s.split_at(split);
        let value: f64 = number
            .parse()
            .map_err(|_| TweenError::config(format!("invalid dimension value '{s}'")))?;
        let unit = rest.trim();
        if unit.contains(|c: char| c.is_ascii_digit()) {
            return Err(TweenError::config(format!(
                "invalid dimension value '{s}'"
            )));
        }
        Ok(Self::new(value, unit))
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", fmt_number(self.value), self.unit)
    }
}

/// An SVG viewBox: left, top, width, height.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewBox {
    /// Left edge of the viewport.
    pub left: f64,
    /// Top edge of the viewport.
    pub top: f64,
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
}

impl ViewBox {
    /// Parse a viewBox string: four numbers separated by commas or whitespace.
    pub fn parse(s: &str) -> TweenResult<Self> {
        let mut vals = [0.0f64; 4];
        let mut count = 0;
        for token in s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            if count == 4 {
                return Err(TweenError::config(format!("invalid viewBox '{s}'")));
            }
            vals[count] = token
                .parse()
                .map_err(|_| TweenError::config(format!("invalid viewBox '{s}'")))?;
            count += 1;
        }
        if count != 4 {
            return Err(TweenError::config(format!("invalid viewBox '{s}'")));
        }
        Ok(Self {
            left: vals[0],
            top: vals[1],
            width: vals[2],
            height: vals[3],
        })
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            fmt_number(self.left),
            fmt_number(self.top),
            fmt_number(self.width),
            fmt_number(self.height)
        )
    }
}
