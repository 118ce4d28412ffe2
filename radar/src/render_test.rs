#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Clear,
    ClearData,
    Grid(GridLayer),
    Polygon(Vec<Point>),
    Points(Vec<ControlPoint>),
}

/// Records every call so tests can assert on exactly what was drawn.
#[derive(Default)]
struct FakeSurface {
    calls: Vec<Call>,
    fail_on_polygon: bool,
}

impl RadarSurface for FakeSurface {
    type Error = &'static str;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.calls.push(Call::Clear);
        Ok(())
    }

    fn clear_data(&mut self) -> Result<(), Self::Error> {
        self.calls.push(Call::ClearData);
        Ok(())
    }

    fn draw_grid(&mut self, grid: &GridLayer) -> Result<(), Self::Error> {
        self.calls.push(Call::Grid(grid.clone()));
        Ok(())
    }

    fn draw_polygon(&mut self, polygon: &[Point]) -> Result<(), Self::Error> {
        if self.fail_on_polygon {
            return Err("polygon rejected");
        }
        self.calls.push(Call::Polygon(polygon.to_vec()));
        Ok(())
    }

    fn draw_points(&mut self, points: &[ControlPoint]) -> Result<(), Self::Error> {
        self.calls.push(Call::Points(points.to_vec()));
        Ok(())
    }
}

fn five_axis_model() -> RadarModel {
    RadarModel::with_labels(
        ["Conception", "Research", "Drafting", "Style", "Proofing"]
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
    )
}

fn approx_eq(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

// =============================================================
// build_grid / build_data
// =============================================================

#[test]
fn grid_has_four_rings_and_one_spoke_and_label_per_axis() {
    let cfg = RadarConfig::default();
    let grid = build_grid(&cfg, five_axis_model().labels());
    assert_eq!(grid.rings.len(), 4);
    assert!(grid.rings.iter().all(|r| r.len() == 5));
    assert_eq!(grid.spokes.len(), 5);
    assert_eq!(grid.labels.len(), 5);
    assert_eq!(grid.labels[2].text, "Drafting");
}

#[test]
fn spokes_run_from_center_to_outer_ring() {
    let cfg = RadarConfig::default();
    let grid = build_grid(&cfg, five_axis_model().labels());
    for (i, spoke) in grid.spokes.iter().enumerate() {
        assert_eq!(spoke.from, cfg.center);
        assert!(approx_eq(spoke.to, grid.rings[3][i]));
    }
}

#[test]
fn grid_for_no_labels_is_empty() {
    assert_eq!(build_grid(&RadarConfig::default(), &[]), GridLayer::default());
}

#[test]
fn default_values_trace_ring_level_two() {
    let cfg = RadarConfig::default();
    let model = five_axis_model();
    let grid = build_grid(&cfg, model.labels());
    let data = build_data(&cfg, model.values());
    assert_eq!(data.polygon.len(), 5);
    for (vertex, ring_vertex) in data.polygon.iter().zip(&grid.rings[1]) {
        assert!(approx_eq(*vertex, *ring_vertex));
    }
}

#[test]
fn data_points_match_polygon_vertices() {
    let cfg = RadarConfig::default();
    let data = build_data(&cfg, &[0.2, 0.9, 0.4]);
    for (p, v) in data.points.iter().zip(&data.polygon) {
        assert_eq!(p.center, *v);
    }
}

// =============================================================
// init_radar / update_radar
// =============================================================

#[test]
fn init_clears_then_draws_grid_then_data() {
    let cfg = RadarConfig::default();
    let mut surface = FakeSurface::default();
    init_radar(&mut surface, &cfg, &five_axis_model()).unwrap();

    assert_eq!(surface.calls.len(), 5);
    assert_eq!(surface.calls[0], Call::Clear);
    assert!(matches!(surface.calls[1], Call::Grid(_)));
    assert_eq!(surface.calls[2], Call::ClearData);
    assert!(matches!(surface.calls[3], Call::Polygon(_)));
    assert!(matches!(surface.calls[4], Call::Points(_)));
}

#[test]
fn update_never_touches_the_grid() {
    let cfg = RadarConfig::default();
    let mut surface = FakeSurface::default();
    update_radar(&mut surface, &cfg, &five_axis_model()).unwrap();
    assert!(
        surface
            .calls
            .iter()
            .all(|c| !matches!(c, Call::Clear | Call::Grid(_)))
    );
}

#[test]
fn update_twice_with_same_state_draws_identical_output() {
    let cfg = RadarConfig::default();
    let mut model = five_axis_model();
    model.set_value(1, 0.73).unwrap();

    let mut first = FakeSurface::default();
    update_radar(&mut first, &cfg, &model).unwrap();
    let mut second = FakeSurface::default();
    update_radar(&mut second, &cfg, &model).unwrap();
    update_radar(&mut second, &cfg, &model).unwrap();

    assert_eq!(second.calls[..3], first.calls[..]);
    assert_eq!(second.calls[3..], first.calls[..]);
}

#[test]
fn update_on_empty_model_only_clears() {
    let cfg = RadarConfig::default();
    let mut surface = FakeSurface::default();
    update_radar(&mut surface, &cfg, &RadarModel::new()).unwrap();
    assert_eq!(surface.calls, vec![Call::ClearData]);
}

#[test]
fn surface_error_propagates() {
    let cfg = RadarConfig::default();
    let mut surface = FakeSurface { fail_on_polygon: true, ..FakeSurface::default() };
    let err = init_radar(&mut surface, &cfg, &five_axis_model()).unwrap_err();
    assert_eq!(err, "polygon rejected");
    assert!(!surface.calls.iter().any(|c| matches!(c, Call::Points(_))));
}
