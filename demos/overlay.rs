use bbox_utils_rs::{pairwise_iou, to_corner_form, CenterBox};
use clap::Parser;
use image::Rgba;
use imageproc::{drawing::draw_hollow_rect_mut, rect::Rect};
use ndarray::Array2;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Image to draw on
    image_path: String,

    /// Path to save the labeled image to
    output_path: String,

    /// Detections in center form, formatted as `label:score:cx,cy,w,h`
    /// with coordinates in pixels
    boxes: Vec<String>,

    /// Line width of the drawn rectangles
    #[arg(long, default_value = "1")]
    line_width: u32,
}

fn parse_box(spec: &str) -> (String, f32, CenterBox) {
    let mut parts = spec.splitn(3, ':');
    let label = parts.next().expect("Empty box spec").to_string();
    let score = parts
        .next()
        .expect("Box spec is missing a score")
        .parse::<f32>()
        .expect("Score is not a number");
    let coords = parts
        .next()
        .expect("Box spec is missing coordinates")
        .split(',')
        .map(|c| c.trim().parse::<f32>().expect("Coordinate is not a number"))
        .collect::<Vec<_>>();
    assert_eq!(coords.len(), 4, "Expected cx,cy,w,h");
    (label, score, [coords[0], coords[1], coords[2], coords[3]].into())
}

fn main() {
    let args = Args::parse();
    let parsed = args.boxes.iter().map(|s| parse_box(s)).collect::<Vec<_>>();

    let mut centers = Array2::<f32>::zeros((parsed.len(), 4));
    for (mut row, (_, _, center)) in centers.outer_iter_mut().zip(parsed.iter()) {
        let values: [f32; 4] = (*center).into();
        for (cell, value) in row.iter_mut().zip(values) {
            *cell = value;
        }
    }

    let overlap = pairwise_iou(centers.view(), centers.view()).expect("Failed to compute IoU");
    println!("Pairwise IoU:\n{:.4}", overlap);

    let corners = to_corner_form(centers.view()).expect("Failed to convert boxes");

    let mut image = image::open(&args.image_path).expect("Failed to open image");
    let color = Rgba([0u8, 0u8, 255u8, 255u8]);
    for (row, (label, score, _)) in corners.outer_iter().zip(parsed.iter()) {
        println!("{}: {:.2}", label, score);
        let x1 = row[0] as i32;
        let y1 = row[1] as i32;
        let width = (row[2] - row[0]).max(1.0) as u32;
        let height = (row[3] - row[1]).max(1.0) as u32;
        // draw_hollow_rect_mut has no stroke width, so inset repeated rects
        for inset in 0..args.line_width as i32 {
            let w = (width as i32 - 2 * inset).max(1) as u32;
            let h = (height as i32 - 2 * inset).max(1) as u32;
            draw_hollow_rect_mut(
                &mut image,
                Rect::at(x1 + inset, y1 + inset).of_size(w, h),
                color,
            );
        }
    }
    image
        .save(&args.output_path)
        .expect("Failed to save labeled image");
}
