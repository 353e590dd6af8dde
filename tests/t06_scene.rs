use scanfill::{
    rasterize, PixfmtRgb24, Polygon, Render, Rgb8, RenderingBase, Scene, SpanRenderer, Vertex,
    VertexPool,
};

const GREEN: Rgb8 = Rgb8 { r: 0, g: 200, b: 0 };
const BLUE: Rgb8 = Rgb8 { r: 0, g: 0, b: 255 };

/// Two overlapping triangles sharing no pool vertices
fn overlap_scene() -> Scene {
    let mut pool = VertexPool::new();
    pool.push(0.0, 0.0, GREEN);
    pool.push(40.0, 0.0, GREEN);
    pool.push(0.0, 40.0, GREEN);
    pool.push(10.0, 10.0, BLUE);
    pool.push(50.0, 10.0, BLUE);
    pool.push(10.0, 50.0, BLUE);
    let polygons = vec![Polygon::new(vec![0, 1, 2]), Polygon::new(vec![3, 4, 5])];
    Scene::new(pool, polygons).with_marker_radius(2.0)
}

fn paint(scene: &Scene) -> RenderingBase<PixfmtRgb24> {
    let mut ren_base = RenderingBase::new(PixfmtRgb24::new(64, 64));
    ren_base.clear(&Rgb8::white());
    let mut ren = SpanRenderer::with_base(&mut ren_base);
    scene.draw(&mut ren);
    ren_base
}

#[test]
fn t06_unselected_scene_paints_in_pool_order() {
    let base = paint(&overlap_scene());
    // second polygon lands on top of the overlap
    assert_eq!(base.pixf.get((15, 15)), BLUE);
}

#[test]
fn t06_selected_polygon_paints_last() {
    let mut scene = overlap_scene();
    assert_eq!(scene.press(1.0, 1.0), Some(0));
    let base = paint(&scene);
    // dragging a green vertex lifts the green triangle over the blue one
    assert_eq!(base.pixf.get((15, 15)), GREEN);

    scene.release();
    let base = paint(&scene);
    assert_eq!(base.pixf.get((15, 15)), BLUE);
}

#[test]
fn t06_drag_refills_at_the_new_position() {
    let mut scene = overlap_scene();
    scene.press(41.0, 1.0);
    assert_eq!(scene.selected(), Some(1));
    assert!(scene.drag_to(40.0, 63.0));
    let base = paint(&scene);
    // the stretched triangle now covers a point well below its old extent
    assert_eq!(base.pixf.get((15, 45)), GREEN);
}

#[test]
fn t06_spans_clip_to_the_buffer() {
    let square = [
        Vertex::new(-5.0, -5.0),
        Vertex::new(5.0, -5.0),
        Vertex::new(5.0, 5.0),
        Vertex::new(-5.0, 5.0),
    ];
    let mut ren_base = RenderingBase::new(PixfmtRgb24::new(10, 10));
    ren_base.clear(&Rgb8::white());
    {
        let mut ren = SpanRenderer::with_base(&mut ren_base);
        for span in rasterize(&square, Rgb8::black()) {
            ren.draw_span(&span);
        }
    }
    // rows -5..-1 and columns beyond 5 fall outside and are dropped
    assert_eq!(ren_base.pixf.get((0, 0)), Rgb8::black());
    assert_eq!(ren_base.pixf.get((5, 4)), Rgb8::black());
    assert_eq!(ren_base.pixf.get((6, 0)), Rgb8::white());
    assert_eq!(ren_base.pixf.get((0, 5)), Rgb8::white());
}
