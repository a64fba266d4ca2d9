use fractal_viewer::{Command, FrameSurface, GradientEngine, ViewportController};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let width = 800;
    let height = 600;

    let mut controller = ViewportController::new(GradientEngine::new(), width, height);
    let mut surface = FrameSurface::new(width, height);

    for command in [
        Command::ZoomIn,
        Command::ZoomIn,
        Command::PanRight,
        Command::PanDown,
    ] {
        controller.apply(command);
    }

    println!("Rendering viewport...");
    println!("Surface size: {}x{}", width, height);
    println!("Zoom factor: {}", controller.viewport().zoom_factor());

    let start = Instant::now();
    controller.redraw(&mut surface)?;
    println!("Duration:   {:?}", start.elapsed());

    std::fs::create_dir_all("output")?;
    fractal_viewer::write_ppm(&surface, "output/frame.ppm")?;

    Ok(())
}
