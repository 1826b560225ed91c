use std::cell::RefCell;
use std::rc::Rc;

use canvas_plotter::api::PLOTTER_CONFIG_JSON_SCHEMA_V1;
use canvas_plotter::core::{AxisSide, DataPoint, DataRange, OutputPoint, Tic, Viewport};
use canvas_plotter::render::{DrawingSink, FrameRecorder, LineAttributes};
use canvas_plotter::{PlotError, PlotResult, Plotter, PlotterConfig};

fn unit_config() -> PlotterConfig {
    PlotterConfig::new(
        Viewport::new(0.0, 100.0, 100.0, 0.0),
        DataRange::new(0.0, 10.0, 0.0, 10.0).expect("range"),
    )
}

fn unit_plotter() -> Plotter<FrameRecorder> {
    Plotter::new(FrameRecorder::new(), unit_config()).expect("plotter init")
}

#[test]
fn default_session_state() {
    let plotter = Plotter::new(FrameRecorder::new(), PlotterConfig::default()).expect("init");

    assert_eq!(plotter.viewport(), Viewport::new(0.0, 100.0, 100.0, 0.0));
    assert_eq!(plotter.data_range().x_bounds(), (0.0, 1000.0));
    assert_eq!(plotter.data_range().y_bounds(), (0.0, 1000.0));
    assert_eq!(plotter.font_size_px(), 10.0);
    assert_eq!(plotter.surface().line_width(), 1.0);
    assert_eq!(plotter.config(), PlotterConfig::default());
}

#[test]
fn init_applies_configured_line_width() {
    let plotter =
        Plotter::new(FrameRecorder::new(), unit_config().with_line_width(2.5)).expect("init");

    assert_eq!(plotter.surface().line_width(), 2.5);
    assert_eq!(plotter.config().line_width, 2.5);
}

#[test]
fn bind_applies_margin_and_remembers_it() {
    let mut plotter = unit_plotter();

    plotter.bind(300.0, 200.0, Some(50.0)).expect("bind");
    assert_eq!(plotter.viewport(), Viewport::new(50.0, 250.0, 150.0, 50.0));

    plotter.bind(600.0, 120.0, None).expect("rebind");
    // 3 * 50 > 120, so the vertical margin is dropped.
    assert_eq!(plotter.viewport(), Viewport::new(50.0, 550.0, 120.0, 0.0));
    assert_eq!(plotter.config().margin_px, Some(50.0));
}

#[test]
fn bind_without_margin_fills_the_surface() {
    let mut plotter = unit_plotter();

    plotter.bind(640.0, 480.0, None).expect("bind");

    assert_eq!(plotter.viewport(), Viewport::new(0.0, 640.0, 480.0, 0.0));
}

#[test]
fn invalid_bind_leaves_state_unchanged() {
    let mut plotter = unit_plotter();
    let before = plotter.config();

    let err = plotter.bind(0.0, 200.0, Some(10.0)).expect_err("zero width");
    assert!(matches!(err, PlotError::InvalidViewport { .. }));

    let err = plotter.bind(300.0, 200.0, Some(-1.0)).expect_err("negative margin");
    assert!(matches!(err, PlotError::InvalidData(_)));

    assert_eq!(plotter.config(), before);
}

#[test]
fn frame_outlines_viewport_at_double_width() {
    let mut plotter = unit_plotter();

    plotter.frame().expect("frame");
    let frame = plotter.surface().frame();

    assert_eq!(frame.polylines.len(), 1);
    let outline = &frame.polylines[0];
    assert_eq!(outline.line_width, 2.0);
    assert_eq!(outline.points.len(), 5);
    assert_eq!(outline.points.first(), outline.points.last());
    assert!(outline.points.contains(&OutputPoint::new(100.0, 0.0)));
    assert_eq!(plotter.surface().line_width(), 1.0);
}

#[test]
fn line_maps_points_through_the_viewport() {
    let mut plotter = unit_plotter();

    plotter
        .line(&[DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 10.0)])
        .expect("line");

    assert_eq!(
        plotter.surface().frame().polylines[0].points,
        vec![OutputPoint::new(0.0, 100.0), OutputPoint::new(100.0, 0.0)]
    );
}

#[test]
fn short_line_is_a_no_op_even_on_degenerate_range() {
    let mut plotter = unit_plotter();
    plotter
        .set_data_range(DataRange::new(2.0, 2.0, 0.0, 1.0).expect("range"))
        .expect("set range");

    plotter.line(&[DataPoint::new(2.0, 0.5)]).expect("single point");
    assert!(plotter.surface().frame().is_empty());

    let err = plotter
        .line(&[DataPoint::new(2.0, 0.0), DataPoint::new(2.0, 1.0)])
        .expect_err("flat x axis");
    assert!(matches!(err, PlotError::DegenerateRange { axis: 'x' }));
}

#[test]
fn reframe_resets_axis_to_column_extent_with_errors() {
    let mut plotter = unit_plotter();
    let rows = vec![vec![1.0, 10.0, 0.5], vec![3.0, -2.0, -1.0]];

    plotter
        .reframe(true, AxisSide::LeftY, &rows, 1, Some(2))
        .expect("reframe");

    assert_eq!(plotter.data_range().y_bounds(), (-3.0, 10.5));
    assert_eq!(plotter.data_range().x_bounds(), (0.0, 10.0));
}

#[test]
fn reframe_without_reset_only_grows() {
    let mut plotter = unit_plotter();
    let rows = [[4.0, 1.0], [12.0, 2.0]];

    plotter
        .reframe(false, AxisSide::BottomX, &rows, 0, None)
        .expect("reframe");

    assert_eq!(plotter.data_range().x_bounds(), (0.0, 12.0));
}

#[test]
fn reframe_rejects_missing_cells_without_touching_range() {
    let mut plotter = unit_plotter();
    let before = plotter.data_range();
    let rows = vec![vec![1.0, 2.0], vec![3.0]];

    let err = plotter
        .reframe(true, AxisSide::TopX, &rows, 1, None)
        .expect_err("row 1 has no column 1");

    assert!(matches!(err, PlotError::InvalidData(_)));
    assert_eq!(plotter.data_range(), before);

    let empty: [[f64; 2]; 0] = [];
    plotter
        .reframe(true, AxisSide::TopX, &empty, 0, None)
        .expect("empty table");
    assert_eq!(plotter.data_range(), before);
}

#[test]
fn bounds_fit_both_axes_to_points() {
    let mut plotter = unit_plotter();

    plotter
        .bounds(&[
            DataPoint::new(-4.0, 7.0),
            DataPoint::new(2.0, -1.0),
            DataPoint::new(0.5, 3.0),
        ])
        .expect("bounds");

    assert_eq!(plotter.data_range().x_bounds(), (-4.0, 2.0));
    assert_eq!(plotter.data_range().y_bounds(), (-1.0, 7.0));
}

#[test]
fn bounds_ignore_empty_input_and_reject_nan() {
    let mut plotter = unit_plotter();
    let before = plotter.data_range();

    plotter.bounds(&[]).expect("empty");
    assert_eq!(plotter.data_range(), before);

    let err = plotter
        .bounds(&[DataPoint::new(1.0, 1.0), DataPoint::new(f64::NAN, 2.0)])
        .expect_err("NaN point");
    assert!(matches!(err, PlotError::InvalidData(_)));
    assert_eq!(plotter.data_range(), before);
}

#[test]
fn set_config_rejects_invalid_values_atomically() {
    let mut plotter = unit_plotter();
    let before = plotter.config();

    let err = plotter
        .set_config(unit_config().with_font_size_px(0.0))
        .expect_err("zero font size");
    assert!(matches!(err, PlotError::InvalidData(_)));

    let err = plotter
        .set_config(PlotterConfig::new(
            Viewport::new(5.0, 5.0, 100.0, 0.0),
            DataRange::default(),
        ))
        .expect_err("zero-width viewport");
    assert!(matches!(err, PlotError::InvalidViewport { .. }));

    assert_eq!(plotter.config(), before);

    let next = unit_config().with_margin_px(8.0).with_line_width(3.0);
    plotter.set_config(next).expect("valid config");
    assert_eq!(plotter.config(), next);
    assert_eq!(plotter.surface().line_width(), 3.0);
}

#[test]
fn config_json_contract_round_trips() {
    let config = unit_config().with_font_size_px(12.0).with_margin_px(20.0);

    let json = config.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {PLOTTER_CONFIG_JSON_SCHEMA_V1}")));

    let parsed = PlotterConfig::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, config);
}

#[test]
fn bare_config_json_fills_defaults() {
    let parsed = PlotterConfig::from_json_compat_str(r#"{ "font_size_px": 14.0 }"#)
        .expect("parse bare config");

    assert_eq!(parsed.font_size_px, 14.0);
    assert_eq!(parsed.line_width, 1.0);
    assert_eq!(parsed.viewport, Viewport::default());
}

#[test]
fn config_json_rejects_unknown_schema_and_invalid_values() {
    let future = r#"{ "schema_version": 2, "config": {} }"#;
    let err = PlotterConfig::from_json_compat_str(future).expect_err("schema 2");
    assert!(matches!(err, PlotError::InvalidData(ref message) if message.contains("schema")));

    let err = PlotterConfig::from_json_compat_str(r#"{ "line_width": -1.0 }"#)
        .expect_err("negative width");
    assert!(matches!(err, PlotError::InvalidData(_)));

    let inverted = r#"{ "data_range": { "min_x": 5.0, "max_x": 1.0, "min_y": 0.0, "max_y": 1.0 } }"#;
    let err = PlotterConfig::from_json_compat_str(inverted).expect_err("inverted range");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn line_override_receives_polylines_while_text_reaches_surface() {
    let seen: Rc<RefCell<Vec<(f64, usize)>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let hook = move |attributes: &LineAttributes, points: &[OutputPoint]| -> PlotResult<()> {
        sink.borrow_mut().push((attributes.line_width, points.len()));
        Ok(())
    };
    let mut plotter =
        Plotter::with_line_override(FrameRecorder::new(), unit_config(), hook).expect("init");

    plotter.frame().expect("frame");
    plotter
        .axis(AxisSide::BottomX, &[Tic::major(5.0)], None)
        .expect("axis");

    assert_eq!(*seen.borrow(), vec![(2.0, 5), (1.0, 2), (1.0, 2)]);

    let (recorder, _) = plotter.into_surface().into_parts();
    let frame = recorder.into_frame();
    assert!(frame.polylines.is_empty());
    assert_eq!(frame.texts.len(), 1);
    assert_eq!(frame.texts[0].text, "5");
}

#[test]
fn line_override_errors_propagate_to_caller() {
    let hook = |_: &LineAttributes, _: &[OutputPoint]| -> PlotResult<()> {
        Err(PlotError::InvalidData("host refused polyline".to_owned()))
    };
    let mut plotter =
        Plotter::with_line_override(FrameRecorder::new(), unit_config(), hook).expect("init");

    let err = plotter.frame().expect_err("hook failure");

    assert!(matches!(err, PlotError::InvalidData(_)));
    assert_eq!(plotter.surface().line_width(), 1.0);
}
