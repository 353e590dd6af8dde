use scanfill::{rasterize, rasterize_strict, EdgeTable, Rgb8, Vertex};

#[test]
fn t05_horizontal_edges_never_bucketed() {
    // square: 4 edges, top and bottom horizontal
    let square = [
        Vertex::new(0.0, 0.0),
        Vertex::new(10.0, 0.0),
        Vertex::new(10.0, 10.0),
        Vertex::new(0.0, 10.0),
    ];
    assert_eq!(EdgeTable::from_vertices(&square).edge_count(), 2);

    // U-shape: 8 edges, 4 horizontal
    let u = [
        Vertex::new(0.0, 0.0),
        Vertex::new(4.0, 0.0),
        Vertex::new(4.0, 10.0),
        Vertex::new(6.0, 10.0),
        Vertex::new(6.0, 0.0),
        Vertex::new(10.0, 0.0),
        Vertex::new(10.0, 20.0),
        Vertex::new(0.0, 20.0),
    ];
    assert_eq!(EdgeTable::from_vertices(&u).edge_count(), 4);

    // diamond: nothing horizontal, all 4 edges kept
    let diamond = [
        Vertex::new(5.0, 0.0),
        Vertex::new(10.0, 5.0),
        Vertex::new(5.0, 10.0),
        Vertex::new(0.0, 5.0),
    ];
    assert_eq!(EdgeTable::from_vertices(&diamond).edge_count(), 4);
}

#[test]
fn t05_simple_polygons_pass_strict_mode() {
    // the even-crossing invariant holds scanline by scanline, so strict
    // and lenient mode agree on simple polygons
    let color = Rgb8::new(80, 80, 200);
    let shapes: Vec<Vec<Vertex>> = vec![
        vec![
            Vertex::new(5.0, 0.0),
            Vertex::new(10.0, 5.0),
            Vertex::new(5.0, 10.0),
            Vertex::new(0.0, 5.0),
        ],
        vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(10.0, 0.0),
            Vertex::new(10.0, 10.0),
            Vertex::new(0.0, 10.0),
        ],
        vec![
            Vertex::new(5.0, 0.0),
            Vertex::new(10.0, 10.0),
            Vertex::new(0.0, 10.0),
        ],
    ];
    for verts in &shapes {
        let strict = rasterize_strict(verts, color).unwrap();
        assert_eq!(strict, rasterize(verts, color));
    }
}
