//! Animation parameters polled from the two external numeric controls.

/// Value used whenever a control does not hold a number.
pub const PARSE_FALLBACK: f32 = 1.0;

/// Internal defaults, only visible before the first successful poll.
pub const DEFAULT_SPEED: f32 = 30.0;
pub const DEFAULT_SIZE: f32 = 0.8;

/// Poll-based view of the speed and size controls.
///
/// `None` means the control could not be found; it is treated like empty text.
pub trait ParameterSource {
    fn speed_text(&self) -> Option<String>;
    fn size_text(&self) -> Option<String>;
}

/// Parses `text` with the leading-integer rules of JavaScript's `parseInt`
/// (no radix) and returns `fallback` when no digit can be read.
///
/// Trailing garbage is ignored (`"12px"` is 12, `"0.5"` is 0). Valid values are
/// never clamped, so negative and huge numbers pass straight through.
pub fn parse_parameter_or(text: &str, fallback: f32) -> f32 {
    let s = text.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value = 0.0f64;
    let mut seen = 0usize;
    for d in digits.chars().map_while(|c| c.to_digit(radix)) {
        value = value * f64::from(radix) + f64::from(d);
        seen += 1;
    }
    if seen == 0 {
        return fallback;
    }

    let value = value as f32;
    if negative {
        -value
    } else {
        value
    }
}

/// The two user-driven shader inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParameters {
    pub speed: f32,
    pub size: f32,
}

impl Default for AnimationParameters {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            size: DEFAULT_SIZE,
        }
    }
}

impl AnimationParameters {
    /// Re-reads both controls. Each one falls back to 1 on its own; the
    /// previous frame's value is never kept.
    pub fn refresh(&mut self, source: &impl ParameterSource) {
        self.speed = read(source.speed_text(), "speed");
        self.size = read(source.size_text(), "size");
    }
}

fn read(text: Option<String>, name: &str) -> f32 {
    let text = text.unwrap_or_default();
    let value = parse_parameter_or(&text, f32::NAN);
    if value.is_nan() {
        log::debug!("{name} control holds {text:?}; using {PARSE_FALLBACK}");
        PARSE_FALLBACK
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_prefix_is_honoured() {
        assert_eq!(parse_parameter_or("0x1f", 1.0), 31.0);
        assert_eq!(parse_parameter_or("-0X10", 1.0), -16.0);
        assert_eq!(parse_parameter_or("0x", 1.0), 1.0);
    }

    #[test]
    fn lone_sign_is_not_a_number() {
        assert_eq!(parse_parameter_or("-", 1.0), 1.0);
        assert_eq!(parse_parameter_or("+ 3", 1.0), 1.0);
    }

    #[test]
    fn negative_zero_keeps_its_sign() {
        let v = parse_parameter_or("-0", 1.0);
        assert_eq!(v, 0.0);
        assert!(v.is_sign_negative());
    }
}
