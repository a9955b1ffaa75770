/// Locates the table entry closest to a target angle.
pub trait AngleLookup {
    /// Index of the entry of `values` closest to `target`.
    /// `values` is sorted ascending and non-empty.
    fn find_closest_index(&self, values: &[f64], target: f64) -> usize;
}

/// Binary search over a sorted table. Ties go to the lower index.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosestAngle;

impl AngleLookup for ClosestAngle {
    fn find_closest_index(&self, values: &[f64], target: f64) -> usize {
        if values.is_empty() {
            return 0;
        }
        let upper = values.partition_point(|v| *v < target);
        if upper == 0 {
            return 0;
        }
        if upper == values.len() {
            return values.len() - 1;
        }
        let below = upper - 1;
        if (target - values[below]).abs() <= (values[upper] - target).abs() {
            below
        } else {
            upper
        }
    }
}

#[cfg(test)]
mod test {
    use super::{AngleLookup, ClosestAngle};
    use rstest::rstest;

    #[rstest]
    #[case(&[0.0, 90.0, 180.0, 270.0], 180.0, 2)]
    #[case(&[0.0, 100.0, 170.0, 200.0], 180.0, 2)]
    #[case(&[0.0, 100.0, 195.0, 200.0], 180.0, 2)]
    #[case(&[0.0, 120.0, 240.0], 180.0, 1)]
    #[case(&[200.0, 300.0], 180.0, 0)]
    #[case(&[10.0, 20.0], 180.0, 1)]
    #[case(&[42.0], 180.0, 0)]
    fn closest(#[case] values: &[f64], #[case] target: f64, #[case] expected: usize) {
        assert_eq!(ClosestAngle.find_closest_index(values, target), expected);
    }
}
