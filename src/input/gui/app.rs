use crate::controllers::viewport::ViewportController;
use crate::core::data::surface::FrameSurface;
use crate::engine::demo::GradientEngine;
use crate::input::command::command_for_key;
use crate::presenters::pixels::presenter::PixelsPresenter;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::Key,
    window::{Window, WindowBuilder},
};

/// Opens the viewer window and runs the event loop until close.
///
/// `AboutToWait` arranges at most one `request_redraw` per pending frame;
/// `RedrawRequested` is the frame boundary where the controller syncs the
/// engine and composites. A failed redraw keeps the previous frame on screen.
pub fn run_gui() {
    let event_loop = EventLoop::new().expect("Failed to create event loop");

    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fractal Viewer")
            .with_inner_size(LogicalSize::new(800.0, 600.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let size = window.inner_size();
    let mut presenter = PixelsPresenter::new(window);
    let mut controller = ViewportController::new(GradientEngine::new(), size.width, size.height);
    let mut surface = FrameSurface::new(size.width.max(1), size.height.max(1));
    let mut redraw_pending = true;

    event_loop
        .run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                }
                WindowEvent::KeyboardInput {
                    event: key_event, ..
                } => {
                    if key_event.state == ElementState::Pressed {
                        if let Key::Character(text) = &key_event.logical_key {
                            if let Some(command) = command_for_key(text.as_str()) {
                                if controller.apply(command) {
                                    redraw_pending = true;
                                }
                            }
                        }
                    }
                }
                WindowEvent::Resized(new_size) => {
                    if controller.resize(new_size.width, new_size.height) {
                        redraw_pending = true;
                    }

                    // A minimize reports zero dimensions; the surface and
                    // presenter track the clamped viewport so they stay in
                    // step with what the next frame will paint.
                    let width = controller.viewport().width();
                    let height = controller.viewport().height();
                    if let Err(e) = presenter.resize(width, height) {
                        eprintln!("Surface resize error: {e}");
                        elwt.exit();
                        return;
                    }
                    surface.resize(width, height);
                }
                WindowEvent::RedrawRequested => {
                    redraw_pending = false;

                    match controller.redraw(&mut surface) {
                        Ok(_) => {
                            if let Err(e) = presenter.present(&surface) {
                                eprintln!("Present error: {e}");
                                elwt.exit();
                            }
                        }
                        Err(e) => {
                            // Previous frame stays displayed.
                            eprintln!("Redraw error: {e}");
                        }
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })
        .expect("Event loop error");
}
