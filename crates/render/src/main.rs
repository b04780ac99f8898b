//! Render a shaded SVG still of the Möbius strip and print its measures.

use mobius_kernel::strip::{MobiusStrip, StripParams};
use mobius_tessellation::{tessellate_strip, validate_mesh, TriangleMesh};
use std::fs;

/// Simple isometric projection: 3D -> 2D
fn project(x: f64, y: f64, z: f64) -> (f64, f64) {
    let angle_x: f64 = 0.6;
    let angle_z: f64 = 0.8;
    let rx = x * angle_z.cos() - y * angle_z.sin();
    let ry = x * angle_z.sin() + y * angle_z.cos();
    let pz = ry * angle_x.sin() + z * angle_x.cos();
    (rx, -pz)
}

/// Screen-space direction of a world axis, for the axis gizmo.
fn axis_direction(x: f64, y: f64, z: f64) -> (f64, f64) {
    let (ox, oy) = project(0.0, 0.0, 0.0);
    let (px, py) = project(x, y, z);
    let (dx, dy) = (px - ox, py - oy);
    let len = (dx * dx + dy * dy).sqrt().max(1e-12);
    (dx / len, dy / len)
}

fn axis_gizmo(height: f64) -> String {
    let (anchor_x, anchor_y) = (46.0, height - 32.0);
    let arm = 34.0;
    let mut svg = String::new();
    for (label, dir) in [
        ("X", axis_direction(1.0, 0.0, 0.0)),
        ("Y", axis_direction(0.0, 1.0, 0.0)),
        ("Z", axis_direction(0.0, 0.0, 1.0)),
    ] {
        let (ex, ey) = (anchor_x + dir.0 * arm, anchor_y + dir.1 * arm);
        svg.push_str(&format!(
            "  <line x1=\"{anchor_x:.1}\" y1=\"{anchor_y:.1}\" x2=\"{ex:.1}\" y2=\"{ey:.1}\" \
             stroke=\"#8892b0\" stroke-width=\"1\"/>\n"
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-family=\"monospace\" font-size=\"11\" \
             fill=\"#8892b0\" text-anchor=\"middle\">{label}</text>\n",
            anchor_x + dir.0 * (arm + 9.0),
            anchor_y + dir.1 * (arm + 9.0) + 4.0,
        ));
    }
    svg
}

fn mesh_to_svg(mesh: &TriangleMesh, width: f64, height: f64, title: &str) -> String {
    if mesh.indices.is_empty() {
        return format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\">\
             <text x=\"10\" y=\"20\" font-family=\"monospace\" font-size=\"14\" fill=\"#ccc\">{title}</text>\
             </svg>"
        );
    }

    let num_verts = mesh.positions.len() / 3;
    let mut projected: Vec<(f64, f64)> = Vec::with_capacity(num_verts);
    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;

    for i in 0..num_verts {
        let x = mesh.positions[i * 3] as f64;
        let y = mesh.positions[i * 3 + 1] as f64;
        let z = mesh.positions[i * 3 + 2] as f64;
        let (px, py) = project(x, y, z);
        projected.push((px, py));
        min_x = min_x.min(px);
        max_x = max_x.max(px);
        min_y = min_y.min(py);
        max_y = max_y.max(py);
    }

    let padding = 40.0;
    let avail_w = width - 2.0 * padding;
    let avail_h = height - 2.0 * padding - 25.0;
    let data_w = (max_x - min_x).max(0.001);
    let data_h = (max_y - min_y).max(0.001);
    let scale = (avail_w / data_w).min(avail_h / data_h);
    let offset_x = padding + (avail_w - data_w * scale) / 2.0;
    let offset_y = padding + 25.0 + (avail_h - data_h * scale) / 2.0;

    let tx = |px: f64| -> f64 { (px - min_x) * scale + offset_x };
    let ty = |py: f64| -> f64 { (py - min_y) * scale + offset_y };

    struct TriInfo {
        i0: usize,
        i1: usize,
        i2: usize,
        depth: f64,
        brightness: f64,
    }

    let num_tris = mesh.indices.len() / 3;
    let mut tris: Vec<TriInfo> = Vec::with_capacity(num_tris);

    let light_dir = (0.3_f64, -0.5_f64, 0.8_f64);
    let light_len =
        (light_dir.0 * light_dir.0 + light_dir.1 * light_dir.1 + light_dir.2 * light_dir.2)
            .sqrt();

    for t in 0..num_tris {
        let i0 = mesh.indices[t * 3] as usize;
        let i1 = mesh.indices[t * 3 + 1] as usize;
        let i2 = mesh.indices[t * 3 + 2] as usize;

        let z0 = mesh.positions[i0 * 3 + 2] as f64;
        let z1 = mesh.positions[i1 * 3 + 2] as f64;
        let z2 = mesh.positions[i2 * 3 + 2] as f64;
        let depth = (z0 + z1 + z2) / 3.0;

        let ax = mesh.positions[i1 * 3] as f64 - mesh.positions[i0 * 3] as f64;
        let ay = mesh.positions[i1 * 3 + 1] as f64 - mesh.positions[i0 * 3 + 1] as f64;
        let az = mesh.positions[i1 * 3 + 2] as f64 - mesh.positions[i0 * 3 + 2] as f64;
        let bx = mesh.positions[i2 * 3] as f64 - mesh.positions[i0 * 3] as f64;
        let by = mesh.positions[i2 * 3 + 1] as f64 - mesh.positions[i0 * 3 + 1] as f64;
        let bz = mesh.positions[i2 * 3 + 2] as f64 - mesh.positions[i0 * 3 + 2] as f64;
        let nx = ay * bz - az * by;
        let ny = az * bx - ax * bz;
        let nz = ax * by - ay * bx;
        let nlen = (nx * nx + ny * ny + nz * nz).sqrt().max(1e-12);

        // One-sided sheet: front and back are the same face, so shade by the
        // unsigned incidence instead of tinting backfaces.
        let dot =
            (nx * light_dir.0 + ny * light_dir.1 + nz * light_dir.2) / (nlen * light_len);
        let brightness = 0.3 + 0.7 * dot.abs().min(1.0);

        tris.push(TriInfo {
            i0,
            i1,
            i2,
            depth,
            brightness,
        });
    }

    tris.sort_by(|a, b| a.depth.partial_cmp(&b.depth).unwrap());

    // For high-poly meshes, reduce stroke to avoid visual noise
    let stroke_width = if num_tris > 200 { 0.2 } else { 0.5 };
    let stroke_color = if num_tris > 200 { "#222240" } else { "#2a2a4a" };

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" style=\"background:#1a1a2e\">\n\
         <text x=\"{}\" y=\"20\" font-family=\"monospace\" font-size=\"13\" fill=\"#8892b0\" text-anchor=\"middle\">{title}</text>\n",
        width / 2.0
    );

    for tri in &tris {
        let (x0, y0) = (tx(projected[tri.i0].0), ty(projected[tri.i0].1));
        let (x1, y1) = (tx(projected[tri.i1].0), ty(projected[tri.i1].1));
        let (x2, y2) = (tx(projected[tri.i2].0), ty(projected[tri.i2].1));

        let b = tri.brightness;
        let (r, g, bl) = ((150.0 * b) as u8, (190.0 * b) as u8, (225.0 * b) as u8);

        svg.push_str(&format!(
            "  <polygon points=\"{x0:.1},{y0:.1} {x1:.1},{y1:.1} {x2:.1},{y2:.1}\" \
             fill=\"rgb({r},{g},{bl})\" stroke=\"{stroke_color}\" stroke-width=\"{stroke_width}\"/>\n"
        ));
    }

    svg.push_str(&axis_gizmo(height));

    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-family=\"monospace\" font-size=\"10\" fill=\"#5a6080\" \
         text-anchor=\"middle\">{} triangles, {} vertices</text>\n",
        width / 2.0,
        height - 8.0,
        num_tris,
        num_verts
    ));

    svg.push_str("</svg>\n");
    svg
}

/// Print mesh size and openness info.
fn report_mesh(mesh: &TriangleMesh) {
    let stats = validate_mesh(mesh);
    let closed = if stats.is_watertight() { "watertight" } else { "open" };
    println!(
        "  mesh: {tris} tris, {verts} verts, {closed}, boundary_edges={boundary}",
        tris = mesh.triangle_count(),
        verts = mesh.vertex_count(),
        boundary = stats.boundary_edges,
    );
}

fn main() {
    let params = StripParams {
        radius: 1.0,
        width: 0.4,
        resolution: 200,
    };
    let strip = MobiusStrip::new(params).expect("strip resolution");

    let area = strip.surface_area().expect("area quadrature");
    let edge = strip.edge_length();
    println!("Approx. Surface Area: {area}");
    println!("Approx. Edge Length: {edge}");

    let mesh = tessellate_strip(&strip);
    report_mesh(&mesh);

    fs::create_dir_all("docs/renders").expect("create docs/renders dir");
    let svg = mesh_to_svg(&mesh, 640.0, 480.0, "Möbius Strip (R=1, w=0.4, n=200)");
    fs::write("docs/renders/mobius_strip.svg", svg).expect("write svg");
    println!("render written to docs/renders/mobius_strip.svg");
}
