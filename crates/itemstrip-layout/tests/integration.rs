//! Integration tests for itemstrip-layout.
//!
//! These tests drive full layout passes through the public API and paint the
//! results onto a recording canvas.

use itemstrip_core::{Canvas, Color, DrawCommand, Insets, Point, RecordingCanvas, Rect, TextStyle};
use itemstrip_layout::{
    break_lines, layout, normalize, parse_items, DividerEdge, DividerEdges, Gravity, LayoutError,
    LineMetrics, MeasureError, MeasureSpec, RenderStyle, StripConfig, StripLayoutEngine,
    StripRenderer, TextMeasurer,
};
use std::sync::Arc;

// =============================================================================
// Test Measurers
// =============================================================================

/// Host-style measurer: ASCII glyphs are half an em, everything else a full
/// em. At the default 24px that is 12px and 24px glyphs with 30px lines.
#[derive(Debug, Default)]
struct HostMeasurer;

impl TextMeasurer for HostMeasurer {
    fn measure_width(&self, text: &str, text_size: f32) -> Result<f32, MeasureError> {
        Ok(text
            .chars()
            .map(|c| if c.is_ascii() { text_size / 2.0 } else { text_size })
            .sum())
    }

    fn line_metrics(&self, text_size: f32) -> Result<LineMetrics, MeasureError> {
        Ok(LineMetrics::new(-text_size, text_size / 4.0))
    }
}

/// Fails on any text containing `!`.
struct PickyMeasurer;

impl TextMeasurer for PickyMeasurer {
    fn measure_width(&self, text: &str, text_size: f32) -> Result<f32, MeasureError> {
        if text.contains('!') {
            return Err(MeasureError(format!("cannot shape {text:?}")));
        }
        HostMeasurer.measure_width(text, text_size)
    }

    fn line_metrics(&self, text_size: f32) -> Result<LineMetrics, MeasureError> {
        HostMeasurer.line_metrics(text_size)
    }
}

// =============================================================================
// Documented Properties
// =============================================================================

#[test]
fn test_normalization_examples() {
    let padded = normalize(&["a", "b"], Some(4));
    assert_eq!(padded.count, 4);
    assert_eq!(padded.items, vec!["a", "b", "", ""]);

    let raised = normalize(&["a", "b", "c"], Some(2));
    assert_eq!(raised.count, 3);
    assert_eq!(raised.items, vec!["a", "b", "c"]);
}

#[test]
fn test_cell_width_with_dividers() {
    let config = StripConfig::new().with_dividers(4.0, DividerEdges::MIDDLE);
    let layout = StripLayoutEngine::new(HostMeasurer)
        .layout(
            &config,
            &["a", "b", "c", "d"],
            MeasureSpec::Exact(412.0),
            MeasureSpec::Unspecified,
        )
        .expect("layout");
    assert_eq!(layout.cell_width, 100.0);
}

#[test]
fn test_auto_height_two_lines() {
    let config = StripConfig::new().with_padding(Insets::new(0.0, 5.0, 0.0, 5.0));
    // 100px cells; 10 Latin glyphs need 120px and wrap to two lines.
    let layout = StripLayoutEngine::new(HostMeasurer)
        .layout(
            &config,
            &["abcdefghij", "x"],
            MeasureSpec::Exact(200.0),
            MeasureSpec::Unspecified,
        )
        .expect("layout");
    assert_eq!(layout.max_lines(), 2);
    assert_eq!(layout.size.height, 70.0);
}

#[test]
fn test_center_gravity_horizontal_offset() {
    // At 20px "中文" is 40px wide inside a 100px content box.
    let config = StripConfig::new()
        .with_text_size(20.0)
        .with_gravity(Gravity::Center);
    let layout = StripLayoutEngine::new(HostMeasurer)
        .layout(
            &config,
            &["中文"],
            MeasureSpec::Exact(100.0),
            MeasureSpec::Unspecified,
        )
        .expect("layout");
    let line = &layout.cells[0].wrapped.lines()[0];
    assert_eq!(line.width, 40.0);
    assert_eq!(layout.cells[0].origins[0].x, 30.0);
}

#[test]
fn test_idempotent_layout() {
    let config = StripConfig::new()
        .with_item_count(3)
        .with_padding(Insets::uniform(4.0))
        .with_dividers(1.0, DividerEdges::ALL)
        .with_ref_width(240.0)
        .with_gravity(Gravity::CenterVertical);
    let engine = StripLayoutEngine::new(HostMeasurer);
    let items = parse_items("多项文本|item two|");
    let first = engine
        .layout(
            &config,
            &items,
            MeasureSpec::Exact(333.0),
            MeasureSpec::Unspecified,
        )
        .expect("layout");
    let second = engine
        .layout(
            &config,
            &items,
            MeasureSpec::Exact(333.0),
            MeasureSpec::Unspecified,
        )
        .expect("layout");
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize"),
        serde_json::to_string(&second).expect("serialize")
    );
}

#[test]
fn test_degenerate_width_is_not_an_error() {
    let config = StripConfig::new()
        .with_item_count(2)
        .with_padding(Insets::new(8.0, 0.0, 8.0, 0.0))
        .with_dividers(2.0, DividerEdges::ALL);
    // 2 * 16 padding + 2 start + 2 end + 2 middle = 38
    let layout = StripLayoutEngine::new(HostMeasurer)
        .layout(
            &config,
            &["abc", "def"],
            MeasureSpec::Exact(38.0),
            MeasureSpec::Unspecified,
        )
        .expect("degenerate pass");
    assert!(layout.cells.iter().all(|c| c.wrapped.is_empty()));
    assert!(layout.cells.iter().all(|c| c.content.area() == 0.0));
}

#[test]
fn test_wrap_completeness_and_fit() {
    let text = "MultiItemTextView 多项文本视图 mixed";
    for budget in [13.0, 24.0, 50.0, 99.5, 400.0] {
        let item = break_lines(text, budget, 24.0, &HostMeasurer).expect("measure");
        assert_eq!(item.text(), text);
        for line in item.lines() {
            assert!(line.width <= budget || line.text.chars().count() == 1);
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_unresolvable_width_fails_fast() {
    let err = layout(
        HostMeasurer,
        &StripConfig::new(),
        &["a"],
        MeasureSpec::Unspecified,
        MeasureSpec::Unspecified,
    )
    .unwrap_err();
    assert!(matches!(err, LayoutError::UnresolvableWidth { .. }));
}

#[test]
fn test_measurer_error_is_carried_verbatim() {
    let err = StripLayoutEngine::new(PickyMeasurer)
        .layout(
            &StripConfig::new(),
            &["fine", "bad!"],
            MeasureSpec::Exact(300.0),
            MeasureSpec::Unspecified,
        )
        .unwrap_err();
    match err {
        LayoutError::Measure(MeasureError(msg)) => assert_eq!(msg, "cannot shape \"bad!\""),
        other => panic!("unexpected error {other:?}"),
    }
}

// =============================================================================
// Configuration Surface
// =============================================================================

#[test]
fn test_yaml_config_end_to_end() {
    let yaml = r##"
item_count: 3
text_size: 24
item_width: 100
padding: { start: 5, top: 5, end: 5, bottom: 5 }
divider:
  width: 2
  color: "#000000"
  edges: { top: true, bottom: true, middle: true }
gravity: center
"##;
    let config = StripConfig::from_yaml(yaml).expect("config");
    let layout = StripLayoutEngine::new(HostMeasurer)
        .layout(
            &config,
            &parse_items("a|b"),
            MeasureSpec::Unspecified,
            MeasureSpec::Unspecified,
        )
        .expect("layout");

    // 3 * 100 + 2 * 2 middle dividers
    assert_eq!(layout.size.width, 304.0);
    // 5 + 5 padding, one 30px line, 2 + 2 dividers
    assert_eq!(layout.size.height, 44.0);
    assert_eq!(layout.cells[2].text, "");
    let edges: Vec<DividerEdge> = layout.dividers.iter().map(|d| d.edge).collect();
    assert_eq!(
        edges,
        vec![
            DividerEdge::Top,
            DividerEdge::Bottom,
            DividerEdge::Middle,
            DividerEdge::Middle
        ]
    );
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_render_full_strip() {
    let config = StripConfig::new()
        .with_item_count(2)
        .with_padding(Insets::uniform(5.0))
        .with_dividers(2.0, DividerEdges::MIDDLE)
        .with_divider_color(Color::BLACK)
        .with_gravity(Gravity::CenterVertical);
    let layout = StripLayoutEngine::new(Arc::new(HostMeasurer))
        .layout(
            &config,
            &["abcdefghijklmn", "z"],
            MeasureSpec::Exact(202.0),
            MeasureSpec::Unspecified,
        )
        .expect("layout");

    let mut canvas = RecordingCanvas::new();
    StripRenderer::new(RenderStyle::from_config(&config)).paint(&layout, &mut canvas);

    // 90px budget fits 7 Latin glyphs per line.
    assert_eq!(canvas.texts(), vec!["abcdefg", "hijklmn", "z"]);
    assert_eq!(
        canvas.commands()[0],
        DrawCommand::filled_rect(Rect::new(100.0, 0.0, 2.0, 70.0), Color::BLACK)
    );

    // The single-line cell is centered in the 60px content box.
    let z = canvas
        .commands()
        .iter()
        .find_map(|c| match c {
            DrawCommand::Text {
                content, position, ..
            } if content == "z" => Some(*position),
            _ => None,
        })
        .expect("z painted");
    assert_eq!(z, Point::new(107.0, 5.0 + 15.0 + 24.0));
}

#[test]
fn test_renderer_drives_custom_canvas() {
    #[derive(Default)]
    struct CountingCanvas {
        rects: usize,
        texts: usize,
        lines: usize,
    }

    impl Canvas for CountingCanvas {
        fn fill_rect(&mut self, _rect: Rect, _color: Color) {
            self.rects += 1;
        }

        fn stroke_rect(&mut self, _rect: Rect, _color: Color, _width: f32) {
            self.rects += 1;
        }

        fn draw_text(&mut self, _text: &str, _position: Point, _style: &TextStyle) {
            self.texts += 1;
        }

        fn draw_line(&mut self, _from: Point, _to: Point, _color: Color, _width: f32) {
            self.lines += 1;
        }
    }

    let config = StripConfig::new().with_dividers(1.0, DividerEdges::ALL);
    let layout = StripLayoutEngine::new(HostMeasurer)
        .layout(
            &config,
            &["a", "b", "c"],
            MeasureSpec::Exact(300.0),
            MeasureSpec::Unspecified,
        )
        .expect("layout");
    let mut canvas = CountingCanvas::default();
    StripRenderer::new(RenderStyle::from_config(&config).with_debug_overlay(true))
        .paint(&layout, &mut canvas);

    // 3 overlay backgrounds + 4 edge dividers + 2 middle dividers.
    assert_eq!(canvas.rects, 9);
    assert_eq!(canvas.texts, 3);
    assert_eq!(canvas.lines, 1);
}
