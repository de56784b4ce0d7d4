//! Subcommand implementations and shared argument types.

pub mod combine;
pub mod normalize;
pub mod shape;

use std::str::FromStr;

/// A sequence of samples given on the command line as `1,-2,3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Samples(Vec<i64>);

impl Samples {
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }
}

impl FromStr for Samples {
    type Err = String;

    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        let samples = arg
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<i64>()
                    .map_err(|e| format!("invalid sample '{}': {}", part, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if samples.is_empty() {
            return Err("expected at least one sample".to_string());
        }
        Ok(Self(samples))
    }
}

/// Format samples as one comma-separated line.
pub fn format_samples(samples: &[i64]) -> String {
    samples
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_samples() {
        assert_eq!("1,2,3".parse(), Ok(Samples(vec![1, 2, 3])));
        assert_eq!("-4, 0 ,7".parse(), Ok(Samples(vec![-4, 0, 7])));
        assert_eq!("5".parse(), Ok(Samples(vec![5])));
    }

    #[test]
    fn test_parse_samples_rejects_garbage() {
        assert!("".parse::<Samples>().is_err());
        assert!(",,".parse::<Samples>().is_err());
        assert!("1,x".parse::<Samples>().is_err());
    }

    #[test]
    fn test_format_samples() {
        assert_eq!(format_samples(&[1, -2, 3]), "1,-2,3");
        assert_eq!(format_samples(&[]), "");
    }
}
