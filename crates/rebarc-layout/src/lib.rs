//! Placement geometry for longitudinal reinforcing in a concrete section.
//! All dimensions are inches; areas are square inches.

use rebarc_base::{Error, Result};

/// Distance from the face of concrete to the center of a longitudinal bar,
/// through clear cover and one layer of transverse reinforcing. Pass a
/// transverse diameter of zero when no transverse layer is present.
pub fn position(cover: f64, bar_diameter: f64, trans_diameter: f64) -> f64 {
    cover + trans_diameter + bar_diameter / 2.0
}

/// Center-to-center spacing of `num_bars` bars across a section of the given
/// width, with the first and last bars set back `offset` from each edge.
pub fn spacing(width: f64, num_bars: f64, offset: f64) -> Result<f64> {
    if num_bars <= 1.0 {
        return Err(Error::InvalidParameter(format!(
            "num_bars must be > 1, got {num_bars}"
        )));
    }
    Ok((width - 2.0 * offset) / (num_bars - 1.0))
}

/// Inverse of [`spacing`]: bar count for a target spacing. The result is not
/// rounded; callers round up or down for their use case.
pub fn num_bars(width: f64, spacing: f64, offset: f64) -> Result<f64> {
    ensure_positive("spacing", spacing)?;
    Ok((width - 2.0 * offset) / spacing + 1.0)
}

/// Steel area per foot of section width for bars at the given spacing.
pub fn as_per_ft(bar_area: f64, spacing: f64) -> Result<f64> {
    ensure_positive("spacing", spacing)?;
    Ok(bar_area * (12.0 / spacing))
}

/// Total steel area across the section width.
pub fn steel_area(bar_area: f64, width: f64, spacing: f64, offset: f64) -> Result<f64> {
    Ok(num_bars(width, spacing, offset)? * bar_area)
}

/// Bond factor c_b: the lesser of cover to bar center and half the spacing.
pub fn bond_cb(cover: f64, bar_diameter: f64, spacing: f64) -> f64 {
    (bar_diameter / 2.0 + cover).min(spacing / 2.0)
}

fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "{name} must be > 0, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_accounts_for_cover_and_transverse_layer() {
        assert_eq!(position(1.5, 0.5, 0.375), 2.125);
    }

    #[test]
    fn position_without_transverse_layer() {
        assert_eq!(position(2.0, 1.0, 0.0), 2.5);
    }

    #[test]
    fn spacing_distributes_five_bars() -> Result<()> {
        assert_eq!(spacing(24.0, 5.0, 1.5)?, 5.25);
        Ok(())
    }

    #[test]
    fn spacing_with_zero_offset_places_edge_bars_on_faces() -> Result<()> {
        // With no edge setback the first and last bars sit on the section
        // faces, so five bars span four equal intervals.
        assert_eq!(spacing(24.0, 5.0, 0.0)?, 6.0);
        Ok(())
    }

    #[test]
    fn spacing_rejects_zero_bars() {
        assert!(spacing(24.0, 0.0, 1.5).is_err());
    }

    #[test]
    fn spacing_rejects_single_bar() {
        assert!(spacing(24.0, 1.0, 1.5).is_err());
    }

    #[test]
    fn num_bars_inverts_spacing() -> Result<()> {
        let n = num_bars(24.0, 5.25, 1.5)?;
        assert!((n - 5.0).abs() < 1.0e-9);
        Ok(())
    }

    #[test]
    fn num_bars_with_zero_offset_counts_edge_bars() -> Result<()> {
        let n = num_bars(24.0, 6.0, 0.0)?;
        assert!((n - 5.0).abs() < 1.0e-9);
        Ok(())
    }

    #[test]
    fn num_bars_rejects_zero_spacing() {
        assert!(num_bars(24.0, 0.0, 1.5).is_err());
    }

    #[test]
    fn as_per_ft_at_six_inches() -> Result<()> {
        assert_eq!(as_per_ft(0.20, 6.0)?, 0.40);
        Ok(())
    }

    #[test]
    fn as_per_ft_rejects_zero_spacing() {
        assert!(as_per_ft(0.20, 0.0).is_err());
    }

    #[test]
    fn steel_area_scales_bar_area_by_count() -> Result<()> {
        let total = steel_area(0.20, 24.0, 5.25, 1.5)?;
        assert!((total - 1.0).abs() < 1.0e-9);
        Ok(())
    }

    #[test]
    fn steel_area_with_zero_offset() -> Result<()> {
        let total = steel_area(0.20, 24.0, 6.0, 0.0)?;
        assert!((total - 1.0).abs() < 1.0e-9);
        Ok(())
    }

    #[test]
    fn bond_cb_governed_by_spacing() {
        assert_eq!(bond_cb(2.0, 1.0, 3.0), 1.5);
    }

    #[test]
    fn bond_cb_governed_by_cover() {
        assert_eq!(bond_cb(1.0, 1.0, 8.0), 1.5);
    }
}
