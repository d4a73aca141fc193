//! Conversión de coordenadas GPS en grados, minutos y segundos a grados decimales.

/// Número racional sin signo tal como lo almacena EXIF.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rational {
    pub num: u32,
    pub denom: u32,
}

impl Rational {
    pub const fn new(num: u32, denom: u32) -> Self {
        Self { num, denom }
    }

    /// Devuelve `None` cuando el denominador es cero.
    pub fn to_f64(self) -> Option<f64> {
        if self.denom == 0 {
            return None;
        }
        Some(f64::from(self.num) / f64::from(self.denom))
    }
}

impl From<exif::Rational> for Rational {
    fn from(value: exif::Rational) -> Self {
        Self::new(value.num, value.denom)
    }
}

/// Calcula `grados + minutos/60 + segundos/3600`.
///
/// Si alguna componente tiene denominador cero no hay coordenada válida.
pub fn convert_to_degrees(components: [Rational; 3]) -> Option<f64> {
    let [degrees, minutes, seconds] = components;
    Some(degrees.to_f64()? + minutes.to_f64()? / 60.0 + seconds.to_f64()? / 3600.0)
}

/// Aplica el hemisferio: `S` y `W` producen valores negativos.
pub fn signed_coordinate(value: f64, reference: Option<&str>) -> f64 {
    match reference.map(str::trim) {
        Some(r) if r.eq_ignore_ascii_case("S") || r.eq_ignore_ascii_case("W") => -value,
        _ => value,
    }
}

/// Texto decimal de una coordenada; los grados enteros conservan `.0`.
pub fn format_coordinate(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn converts_whole_degrees_and_minutes() {
        let value = convert_to_degrees([
            Rational::new(40, 1),
            Rational::new(30, 1),
            Rational::new(0, 1),
        ]);
        assert_eq!(value, Some(40.5));
    }

    #[test]
    fn converts_fractional_seconds() {
        let value = convert_to_degrees([
            Rational::new(2, 1),
            Rational::new(21, 1),
            Rational::new(785, 100),
        ])
        .unwrap_or_default();
        assert!(approx_eq(value, 2.0 + 21.0 / 60.0 + 7.85 / 3600.0));
    }

    #[test]
    fn matches_formula_across_denominators() {
        for denom in 1..=7_u32 {
            for d in [0_u32, 1, 45, 89, 179] {
                for m in [0_u32, 15, 59] {
                    let s = 1234_u32;
                    let value = convert_to_degrees([
                        Rational::new(d * denom, denom),
                        Rational::new(m * denom, denom),
                        Rational::new(s, denom),
                    ])
                    .unwrap_or(f64::NAN);
                    let expected =
                        f64::from(d) + f64::from(m) / 60.0 + f64::from(s) / f64::from(denom) / 3600.0;
                    assert!(approx_eq(value, expected), "d={d} m={m} denom={denom}");
                }
            }
        }
    }

    #[test]
    fn zero_denominator_has_no_coordinate() {
        let value = convert_to_degrees([
            Rational::new(40, 1),
            Rational::new(30, 0),
            Rational::new(0, 1),
        ]);
        assert_eq!(value, None);
    }

    #[test]
    fn southern_and_western_references_are_negative() {
        assert_eq!(signed_coordinate(40.5, Some("N")), 40.5);
        assert_eq!(signed_coordinate(40.5, Some("S")), -40.5);
        assert_eq!(signed_coordinate(73.25, Some("W")), -73.25);
        assert_eq!(signed_coordinate(73.25, Some("E")), 73.25);
        assert_eq!(signed_coordinate(73.25, None), 73.25);
    }

    #[test]
    fn coordinates_always_show_a_decimal_part() {
        assert_eq!(format_coordinate(40.0), "40.0");
        assert_eq!(format_coordinate(-3.0), "-3.0");
        assert_eq!(format_coordinate(40.5), "40.5");
        assert_eq!(format_coordinate(0.00001), "0.00001");
    }
}
