/// Open interval during which the spacecraft is shadowed.
///
/// Both ends are excluded: a sample that lands exactly on `start` or `end`
/// is considered sunlit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipseWindow {
    pub start: f64,
    pub end: f64,
}

impl EclipseWindow {
    /// Window on an absolute time axis (libration-point orbits).
    pub fn absolute(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Window on the in-orbit time axis, measured from local solar noon.
    /// Eclipse begins half a sun-arc after noon and lasts `eclipse_length`.
    pub fn centered_on_noon(orbit_period: f64, eclipse_length: f64) -> Self {
        let half_sun = (orbit_period - eclipse_length) / 2.0;
        Self {
            start: half_sun,
            end: half_sun + eclipse_length,
        }
    }

    pub fn contains(&self, t: f64) -> bool {
        self.start < t && t < self.end
    }

    pub fn is_sunlit(&self, t: f64) -> bool {
        !self.contains(t)
    }
}

#[cfg(test)]
mod test {
    use super::EclipseWindow;
    use rstest::rstest;

    #[test]
    fn noon_centered_bounds() {
        let window = EclipseWindow::centered_on_noon(96.0, 36.0);
        assert_eq!(window.start, 30.0);
        assert_eq!(window.end, 66.0);
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(10.0, true)]
    #[case(10.5, false)]
    #[case(19.999, false)]
    #[case(20.0, true)]
    #[case(25.0, true)]
    fn boundaries_are_sunlit(#[case] t: f64, #[case] sunlit: bool) {
        let window = EclipseWindow::absolute(10.0, 20.0);
        assert_eq!(window.is_sunlit(t), sunlit);
    }

    #[test]
    fn empty_window_never_eclipses() {
        let window = EclipseWindow::centered_on_noon(90.0, 0.0);
        assert!((0..90).all(|t| window.is_sunlit(t as f64)));
    }
}
