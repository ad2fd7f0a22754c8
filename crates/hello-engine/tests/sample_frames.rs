//! Frame planning and shader resolution as the samples drive them, without a GPU.

use hello_engine::geometry::{Primitive, ViewportSize};
use hello_engine::render::{FramePlan, FrameState, ShaderPair, SkipReason};
use hello_engine::shader::{ShaderError, ShaderLibrary};

#[test]
fn triangle_sample_sequence() {
    let mut state = FrameState::new(Primitive::Triangle, ViewportSize::new(800, 600));

    // First frame after startup.
    let call = state.plan(true).draw_call().cloned().unwrap();
    assert_eq!(call.viewport, ViewportSize::new(800, 600));
    assert_eq!(
        call.vertices.iter().map(|v| v.position).collect::<Vec<_>>(),
        vec![[250.0, -250.0], [-250.0, -250.0], [0.0, 250.0]]
    );

    // Drawable lost for a frame: nothing encoded.
    assert_eq!(state.plan(false), FramePlan::Skip(SkipReason::NoDrawable));

    // Minimized, then restored.
    state.resize(0, 0);
    assert_eq!(state.plan(true), FramePlan::Skip(SkipReason::EmptyViewport));
    state.resize(1600, 1200);
    assert_eq!(
        state.plan(true).draw_call().map(|c| c.viewport),
        Some(ViewportSize::new(1600, 1200))
    );
}

#[test]
fn quad_sample_draws_six_green_vertices_every_frame() {
    let state = FrameState::new(Primitive::Quad, ViewportSize::new(500, 500));
    for _ in 0..3 {
        let plan = state.plan(true);
        let call = plan.draw_call().unwrap();
        assert_eq!(call.vertex_count(), 6);
        assert!(call.vertices.iter().all(|v| v.color == [0.0, 1.0, 0.0, 1.0]));
    }
}

#[test]
fn misnamed_vertex_shader_yields_no_pipeline_inputs() {
    let library = ShaderLibrary::hello().unwrap();
    let result = ShaderPair::resolve(&library, "vertex_shader", "fragmentShader");
    match result {
        Err(ShaderError::MissingEntryPoint { name, label }) => {
            assert_eq!(name, "vertex_shader");
            assert_eq!(label, "hello");
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("resolution should fail"),
    }
}
