use glam::{Mat4, Vec2, Vec3};
use grid_layer::target::RenderTarget;
use grid_layer::traits::ViewRect;
use grid_layer::{
    CanvasRenderer, DrawOutcome, Grid, GridRenderer, RenderContext, RenderError, SkipReason,
};

const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Renderer with `count` 800x600 targets
fn renderer_with_targets(count: usize) -> CanvasRenderer {
    let targets = (0..count)
        .map(|i| RenderTarget::new(format!("target-{i}"), 800, 600))
        .collect();
    CanvasRenderer::new(targets, [0, 0, 0, 255])
}

fn sized_context() -> RenderContext {
    RenderContext::new(Grid::filled(4, 4, WHITE))
        .with_view_size(Vec2::new(800.0, 600.0))
        .with_transform(Mat4::IDENTITY)
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_default_context() {
    let ctx = RenderContext::default();
    assert_eq!(ctx.idx, 0);
    assert_eq!(ctx.view_size, Vec2::ZERO);
    assert_eq!(ctx.transform, Mat4::ZERO);
    assert_eq!(ctx.grid, Grid::default());
    assert_eq!(ctx.grid.dimensions(), (0, 0));
}

#[test]
fn test_render_context_is_plain_value() {
    fn assert_value<T: Send + Sync + Clone + 'static>() {}
    assert_value::<RenderContext>();
}

// ============================================================================
// Skip conditions
// ============================================================================

#[test]
fn test_unsized_contexts_draw_nothing_without_error() {
    let sizes = [
        Vec2::ZERO,
        Vec2::new(0.0, 600.0),
        Vec2::new(800.0, 0.0),
        Vec2::new(-800.0, 600.0),
        Vec2::new(800.0, -1.0),
    ];

    for size in sizes {
        let mut renderer = renderer_with_targets(1);
        let ctx = sized_context().with_view_size(size);
        let outcome = renderer.render(&ctx).expect("unsized context must not error");
        assert_eq!(outcome, DrawOutcome::Skipped(SkipReason::Unsized), "size {size:?}");
        assert!(renderer.draws().is_empty());
    }
}

#[test]
fn test_zero_transform_draws_nothing_without_error() {
    let mut renderer = renderer_with_targets(1);
    let ctx = sized_context().with_transform(Mat4::ZERO);
    let outcome = renderer.render(&ctx).unwrap();
    assert_eq!(outcome, DrawOutcome::Skipped(SkipReason::UnconfiguredTransform));
    assert!(renderer.draws().is_empty());
}

#[test]
fn test_degenerate_and_non_finite_transforms_skip() {
    let mut renderer = renderer_with_targets(1);

    let flat = sized_context().with_transform(Mat4::from_scale(Vec3::new(0.0, 1.0, 1.0)));
    assert_eq!(
        renderer.render(&flat).unwrap(),
        DrawOutcome::Skipped(SkipReason::DegenerateTransform)
    );

    let mut broken = Mat4::IDENTITY;
    broken.w_axis.x = f32::INFINITY;
    let broken = sized_context().with_transform(broken);
    assert_eq!(
        renderer.render(&broken).unwrap(),
        DrawOutcome::Skipped(SkipReason::NonFiniteTransform)
    );
    assert!(renderer.draws().is_empty());
}

#[test]
fn test_z_flattening_transform_still_draws() {
    let mut renderer = renderer_with_targets(1);
    let ctx = RenderContext::new(Grid::filled(2, 2, WHITE))
        .with_view_size(Vec2::new(800.0, 600.0))
        .with_transform(Mat4::from_scale(Vec3::new(1.0, 1.0, 0.0)));

    let outcome = renderer.render(&ctx).unwrap();
    assert!(outcome.is_drawn(), "got {outcome:?}");
    assert_eq!(renderer.draws()[0].cells, 4);
}

// ============================================================================
// Target index
// ============================================================================

#[test]
fn test_out_of_range_index_errors_without_drawing() {
    let mut renderer = renderer_with_targets(2);
    renderer.begin_frame();
    let before: Vec<_> = renderer.targets().iter().map(|t| t.canvas.clone()).collect();

    let err = renderer.render(&sized_context().with_idx(2)).unwrap_err();
    assert_eq!(err, RenderError::InvalidTarget { idx: 2, count: 2 });
    assert!(renderer.draws().is_empty());

    let after: Vec<_> = renderer.targets().iter().map(|t| t.canvas.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_scenario_idx_five_against_two_targets() {
    let mut renderer = renderer_with_targets(2);
    let ctx = RenderContext {
        idx: 5,
        ..RenderContext::default()
    };
    let err = renderer.render(&ctx).unwrap_err();
    assert_eq!(err, RenderError::InvalidTarget { idx: 5, count: 2 });
    assert!(renderer.draws().is_empty());
}

// ============================================================================
// Drawing
// ============================================================================

#[test]
fn test_scenario_four_by_four_identity() {
    let mut renderer = renderer_with_targets(1);
    renderer.begin_frame();

    let outcome = renderer.render(&sized_context()).unwrap();
    assert!(outcome.is_drawn());
    assert_eq!(renderer.draws().len(), 1);

    let call = &renderer.draws()[0];
    assert_eq!(call.target, 0);
    assert_eq!(call.grid, (4, 4));
    assert_eq!(call.cells, 16);
    assert_eq!(call.pixels, 800 * 600);
    assert_eq!(
        call.covered,
        ViewRect {
            min: [0.0, 0.0],
            max: [800.0, 600.0],
        }
    );

    let canvas = &renderer.targets().get(0).unwrap().canvas;
    assert!(canvas.pixels().chunks_exact(4).all(|px| px == WHITE));
}

#[test]
fn test_render_does_not_mutate_grid() {
    let mut renderer = renderer_with_targets(1);
    let ctx = sized_context();
    let snapshot = ctx.clone();
    renderer.render(&ctx).unwrap();
    assert_eq!(ctx, snapshot);
}

#[test]
fn test_copy_renders_identically() {
    let original = sized_context();
    let copy = original.clone();

    let mut a = renderer_with_targets(1);
    let mut b = renderer_with_targets(1);
    a.begin_frame();
    b.begin_frame();

    assert_eq!(a.render(&original).unwrap(), b.render(&copy).unwrap());
    assert_eq!(
        a.targets().get(0).unwrap().canvas,
        b.targets().get(0).unwrap().canvas
    );
}

// ============================================================================
// Frames
// ============================================================================

#[test]
fn test_frame_isolates_failing_context() {
    let mut renderer = renderer_with_targets(2);
    renderer.begin_frame();

    let contexts = [
        RenderContext::default(),
        sized_context().with_idx(7),
        sized_context().with_idx(1),
    ];
    let report = renderer.render_frame(&contexts);

    assert_eq!(report.results.len(), 3);
    assert_eq!(report.skipped(), 1);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.drawn(), 1);
    assert!(matches!(
        report.results[1],
        Err(RenderError::InvalidTarget { idx: 7, .. })
    ));
    assert_eq!(renderer.draws()[0].target, 1);
}

#[test]
fn test_frame_report_json() {
    let mut renderer = renderer_with_targets(1);
    let report = renderer.render_frame(&[RenderContext::default(), sized_context().with_idx(3)]);
    let json = report.to_json();

    assert_eq!(json["drawn"], 0);
    assert_eq!(json["skipped"], 1);
    assert_eq!(json["failed"], 1);
    assert_eq!(json["contexts"][0]["ok"]["Skipped"], "Unsized");
    assert!(json["contexts"][1]["error"]
        .as_str()
        .unwrap()
        .contains("render target 3"));
}
