use crate::lang::NOISE_CHARS;

/// Normalizes the raw text of a numeric literal before it is parsed.
///
/// Every configured decimal separator becomes `.`, every noise character
/// that is not itself a separator is dropped. The replacement is done in a
/// single pass, so with `,` as the separator `1,234.5` reads as `1.2345`.
#[derive(Debug, Clone)]
pub struct NumberReplacer {
    separators: Vec<char>,
    noise: Vec<char>,
}

impl NumberReplacer {
    pub fn new(separators: &[char]) -> NumberReplacer {
        let noise = NOISE_CHARS
            .iter()
            .copied()
            .filter(|c| !separators.contains(c))
            .collect();
        NumberReplacer {
            separators: separators.to_vec(),
            noise,
        }
    }

    pub fn replace(&self, s: &str) -> String {
        s.chars()
            .filter(|c| !self.noise.contains(c))
            .map(|c| if self.separators.contains(&c) { '.' } else { c })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separator() {
        let r = NumberReplacer::new(&[',']);
        assert_eq!(r.replace("1 234,56"), "1234.56");
        assert_eq!(r.replace("1.234,5"), "1234.5");
        assert_eq!(r.replace("1,234.5"), "1.2345");
    }

    #[test]
    fn test_dot_separator() {
        let r = NumberReplacer::new(&['.']);
        assert_eq!(r.replace("1,234.5"), "1234.5");
        assert_eq!(r.replace("1'000`000"), "1000000");
        assert_eq!(r.replace("1.2.3"), "1.2.3");
    }

    #[test]
    fn test_both_separators() {
        let r = NumberReplacer::new(&['.', ',']);
        assert_eq!(r.replace("1,5"), "1.5");
        assert_eq!(r.replace("1 000.5"), "1000.5");
    }

    #[test]
    fn test_separator_outside_noise() {
        let r = NumberReplacer::new(&[';']);
        assert_eq!(r.replace("3;25"), "3.25");
        assert_eq!(r.replace("1.000;5"), "1000.5");
    }
}
