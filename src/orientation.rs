//! Chart orientation: the primary axis along which states are arranged.

use crate::geometry::Point;

/// The primary axis of the chart.
///
/// States are placed one after another along the primary axis; the secondary
/// coordinate stays aligned to the chart margin. The layout code is written
/// against (primary, secondary) pairs and uses [`split`](Self::split) /
/// [`point`](Self::point) to map them to concrete axes, so horizontal and
/// vertical charts share one placement routine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// States flow left to right.
    #[default]
    Horizontal,
    /// States flow top to bottom.
    Vertical,
}

impl Orientation {
    /// Parse an orientation name. Accepts exactly `"horizontal"` and
    /// `"vertical"`; returns `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }

    /// Parse an orientation name, normalizing unrecognized input to
    /// [`Horizontal`](Self::Horizontal).
    ///
    /// An invalid orientation is not an error: a chart with a garbled
    /// orientation hint must still lay out, identically to the default.
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    /// Whether the primary axis is the x axis.
    pub fn is_horizontal(self) -> bool {
        self == Self::Horizontal
    }

    /// Split a (width, height) extent into (primary, secondary) components.
    pub fn split(self, width: f64, height: f64) -> (f64, f64) {
        match self {
            Self::Horizontal => (width, height),
            Self::Vertical => (height, width),
        }
    }

    /// Assemble a point from (primary, secondary) coordinates.
    pub fn point(self, primary: f64, secondary: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(primary, secondary),
            Self::Vertical => Point::new(secondary, primary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_exact_literals() {
        assert_eq!(
            Orientation::from_name("horizontal"),
            Some(Orientation::Horizontal)
        );
        assert_eq!(
            Orientation::from_name("vertical"),
            Some(Orientation::Vertical)
        );
    }

    #[test]
    fn from_name_rejects_everything_else() {
        assert_eq!(Orientation::from_name(""), None);
        assert_eq!(Orientation::from_name("Horizontal"), None);
        assert_eq!(Orientation::from_name("VERTICAL"), None);
        assert_eq!(Orientation::from_name("diagonal"), None);
    }

    #[test]
    fn unrecognized_names_normalize_to_horizontal() {
        assert_eq!(
            Orientation::from_name_or_default("WrongOrientation"),
            Orientation::Horizontal
        );
        assert_eq!(
            Orientation::from_name_or_default(""),
            Orientation::Horizontal
        );
        assert_eq!(
            Orientation::from_name_or_default("vertical"),
            Orientation::Vertical
        );
    }

    #[test]
    fn default_is_horizontal() {
        assert_eq!(Orientation::default(), Orientation::Horizontal);
        assert!(Orientation::default().is_horizontal());
    }

    #[test]
    fn split_and_point_round_trip() {
        for o in [Orientation::Horizontal, Orientation::Vertical] {
            let pt = Point::new(3.0, 9.0);
            let (p, s) = o.split(pt.x, pt.y);
            assert_eq!(o.point(p, s), pt, "round-trip failed for {o:?}");
        }
    }

    #[test]
    fn split_swaps_axes_when_vertical() {
        assert_eq!(Orientation::Horizontal.split(120.0, 60.0), (120.0, 60.0));
        assert_eq!(Orientation::Vertical.split(120.0, 60.0), (60.0, 120.0));
        assert_eq!(
            Orientation::Horizontal.point(10.0, 20.0),
            Point::new(10.0, 20.0)
        );
        assert_eq!(
            Orientation::Vertical.point(10.0, 20.0),
            Point::new(20.0, 10.0)
        );
    }
}
