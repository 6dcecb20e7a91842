use crate::geometry::Polygon;
use crate::test::line;

pub(crate) fn p0() -> Polygon {
    Polygon::new(
        line(&[(0., 0.), (10., 0.), (10., 10.), (0., 10.), (0., 0.)]),
        vec![line(&[(2., 2.), (2., 6.), (6., 4.), (2., 2.)])],
    )
}

pub(crate) fn p1() -> Polygon {
    Polygon::new(
        line(&[(60., 60.), (60., 50.), (70., 40.), (60., 60.)]),
        vec![],
    )
}

pub(crate) fn p2() -> Polygon {
    Polygon::new(
        line(&[(-1.5, -1.5), (1.5, -1.5), (1.5, 1.5), (-1.5, 1.5), (-1.5, -1.5)]),
        vec![
            line(&[(-1., -1.), (-0.5, -1.), (-0.5, -0.5), (-1., -1.)]),
            line(&[(0.25, 0.25), (0.75, 0.25), (0.75, 0.75), (0.25, 0.25)]),
        ],
    )
}
