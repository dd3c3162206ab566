//! Parsing of whitespace-separated component lists.

use crate::num::Scalar;
use anyhow::{Result, anyhow, bail};

/// Parses exactly `N` whitespace-separated scalar components from the given
/// text.
pub(crate) fn parse_components<T: Scalar, const N: usize>(text: &str) -> Result<[T; N]> {
    let mut components = [T::ZERO; N];
    let mut tokens = text.split_whitespace();

    for (idx, component) in components.iter_mut().enumerate() {
        let token = tokens
            .next()
            .ok_or_else(|| anyhow!("expected {N} components, found {idx}"))?;
        *component = token
            .parse()
            .map_err(|_| anyhow!("invalid component `{token}`"))?;
    }

    let surplus = tokens.count();
    if surplus > 0 {
        bail!("expected {N} components, found {}", N + surplus);
    }

    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_the_exact_number_of_components_works() {
        let [x, y] = parse_components::<f32, 2>("4 2").unwrap();
        assert_eq!(x, 4.0);
        assert_eq!(y, 2.0);

        let [x, y, z] = parse_components::<i32, 3>("  -1\t2  3 ").unwrap();
        assert_eq!([x, y, z], [-1, 2, 3]);
    }

    #[test]
    fn parsing_fractional_components_works() {
        let [x, y] = parse_components::<f64, 2>("4.25 -2.5").unwrap();
        assert_eq!(x, 4.25);
        assert_eq!(y, -2.5);
    }

    #[test]
    fn parsing_the_wrong_number_of_components_fails() {
        assert!(parse_components::<f32, 3>("1 2").is_err());
        assert!(parse_components::<f32, 3>("1 2 3 4").is_err());
        assert!(parse_components::<f32, 3>("").is_err());
    }

    #[test]
    fn parsing_a_malformed_component_fails() {
        assert!(parse_components::<f32, 2>("1 abc").is_err());
        assert!(parse_components::<i32, 2>("1 2.5").is_err());
    }
}
