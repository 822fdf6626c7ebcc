//! Acoustic impedance

use super::check_length;
use crate::error::Result;

/// Acoustic impedance `Z = rho * v` for each layer
pub fn impedance(density: &[f64], velocity: &[f64]) -> Result<Vec<f64>> {
    check_length("velocity", velocity, density.len())?;

    Ok(density
        .iter()
        .zip(velocity.iter())
        .map(|(&rho, &v)| rho * v)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeismicError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_layer_impedance() {
        let z = impedance(&[2000.0, 2500.0], &[500.0, 1500.0]).unwrap();
        assert_eq!(z, vec![1.0e6, 3.75e6]);
    }

    #[test]
    fn test_length_matches_layers() {
        let z = impedance(&[2000.0, 2300.0, 2500.0], &[500.0, 1000.0, 1500.0]).unwrap();
        assert_eq!(z.len(), 3);
    }

    #[test]
    fn test_empty() {
        assert!(impedance(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_mismatch() {
        let err = impedance(&[2000.0, 2500.0], &[500.0]).unwrap_err();
        assert!(matches!(
            err,
            SeismicError::DimensionMismatch {
                expected: 2,
                found: 1,
                ..
            }
        ));
    }
}
