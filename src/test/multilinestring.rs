use crate::geometry::MultiLineString;
use crate::test::line;

pub(crate) fn ml0() -> MultiLineString {
    MultiLineString::new(vec![
        line(&[(0., 0.), (10., 0.), (10., 10.), (0., 10.), (10., 20.)]),
        line(&[(2., 2.), (2., 6.), (6., 4.), (20., 2.)]),
    ])
}

pub(crate) fn ml1() -> MultiLineString {
    MultiLineString::new(vec![
        line(&[(0.1, 0.2), (0.3, 0.4)]),
        line(&[]),
        line(&[(-7.77, 8.88)]),
    ])
}
