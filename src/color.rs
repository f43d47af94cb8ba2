use std::{fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ColorError;

lazy_static! {
  static ref HEX_RE: Regex = Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$")
    .expect("Hex color pattern is valid");
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RgbColor {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

impl From<(u8, u8, u8)> for RgbColor {
  fn from((r, g, b): (u8, u8, u8)) -> Self {
    RgbColor { r, g, b }
  }
}

impl From<RgbColor> for image::Rgb<u8> {
  fn from(color: RgbColor) -> Self {
    image::Rgb([color.r, color.g, color.b])
  }
}

impl fmt::Display for RgbColor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
  }
}

impl FromStr for RgbColor {
  type Err = ColorError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    parse_hex(s)
  }
}

/// Whether `input` is exactly `#rgb`, `#rrggbb`, `rgb` or `rrggbb`
/// in hexadecimal digits of either case. Nothing else may surround it.
pub fn is_valid(input: &str) -> bool {
  HEX_RE.is_match(input)
}

/// Parse a 3 or 6 digit hex color, with or without a leading `#`.
///
/// Short forms duplicate every digit, so `#a1f` reads as `#aa11ff`.
pub fn parse_hex(input: &str) -> Result<RgbColor, ColorError> {
  let hex = input.strip_prefix('#').unwrap_or(input);

  // from_str_radix would take a sign, and slicing needs ASCII
  if !hex.bytes().all(|digit| digit.is_ascii_hexdigit()) {
    return Err(ColorError::InvalidColorFormat);
  }

  let hex: String = match hex.len() {
    3 => hex.chars().flat_map(|digit| [digit, digit]).collect(),
    6 => hex.to_owned(),
    _ => return Err(ColorError::InvalidColorFormat),
  };

  let channel = |at: usize| {
    u8::from_str_radix(&hex[at..at + 2], 16)
      .map_err(|_| ColorError::InvalidColorFormat)
  };

  Ok(RgbColor {
    r: channel(0)?,
    g: channel(2)?,
    b: channel(4)?,
  })
}

pub fn to_rgb(input: &str) -> Option<RgbColor> {
  parse_hex(input).ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  const DIGITS: &str = "0123456789abcdefABCDEF";

  fn digit_value(digit: char) -> u8 {
    digit.to_digit(16).unwrap() as u8
  }

  #[test]
  fn known_colors() {
    assert!(is_valid("#3498db"));
    assert_eq!(to_rgb("#3498db"), Some((52, 152, 219).into()));

    assert!(is_valid("#000"));
    assert_eq!(to_rgb("#000"), Some((0, 0, 0).into()));

    assert!(!is_valid("#12345"));
    assert!(!is_valid("#zzzzzz"));
  }

  #[test]
  fn hash_is_optional() {
    assert!(is_valid("3498db"));
    assert_eq!(to_rgb("3498db"), to_rgb("#3498db"));
    assert_eq!(to_rgb("fff"), Some((255, 255, 255).into()));
  }

  #[test]
  fn every_short_form_expands_by_duplication() {
    for r in DIGITS.chars() {
      for g in DIGITS.chars() {
        for b in DIGITS.chars() {
          let hex = format!("#{r}{g}{b}");
          assert!(is_valid(&hex), "{hex} should be valid");

          let expected = RgbColor {
            r: digit_value(r) * 0x11,
            g: digit_value(g) * 0x11,
            b: digit_value(b) * 0x11,
          };
          assert_eq!(to_rgb(&hex), Some(expected));
          assert_eq!(to_rgb(&hex[1..]), Some(expected));
        }
      }
    }
  }

  #[test]
  fn long_form_reads_pairs_in_order() {
    for (i, r) in DIGITS.chars().enumerate() {
      let g = DIGITS.chars().nth((i + 7) % DIGITS.len()).unwrap();
      let b = DIGITS.chars().nth((i + 13) % DIGITS.len()).unwrap();
      let hex = format!("{r}{g}{g}{b}{b}{r}");

      assert!(is_valid(&hex));
      assert!(is_valid(&format!("#{hex}")));

      let color = to_rgb(&hex).unwrap();
      assert_eq!(color.r, digit_value(r) << 4 | digit_value(g));
      assert_eq!(color.g, digit_value(g) << 4 | digit_value(b));
      assert_eq!(color.b, digit_value(b) << 4 | digit_value(r));
    }
  }

  #[test]
  fn rejects_malformed_input() {
    let bad = [
      "",
      "#",
      "##000",
      "#0",
      "#00",
      "#0000",
      "#00000",
      "#0000000",
      "#00000000",
      " #000",
      "#000 ",
      "#000\n",
      "0#00",
      "#00g",
      "#ff00zz",
      "#+ffff",
      "a+bcde",
      "-ff",
      "#ééé",
      "aé",
    ];

    for input in bad {
      assert!(!is_valid(input), "{input:?} should be invalid");
      assert_eq!(to_rgb(input), None, "{input:?} should not convert");
      assert_eq!(parse_hex(input), Err(ColorError::InvalidColorFormat));
    }
  }

  #[test]
  fn from_str_and_display() {
    let color: RgbColor = "#3498DB".parse().unwrap();
    assert_eq!(color.to_string(), "#3498db");

    assert_eq!("#0a0".parse::<RgbColor>().unwrap().to_string(), "#00aa00");
    assert!("nope".parse::<RgbColor>().is_err());
  }

  #[test]
  fn converts_into_image_pixel() {
    let pixel: image::Rgb<u8> = RgbColor { r: 1, g: 2, b: 3 }.into();
    assert_eq!(pixel, image::Rgb([1, 2, 3]));
  }
}
